//! Parsing of one input line into caller supplied slots.
//!
//! The format language mirrors the output side: `{}` is one field, `{{` and `}}`
//! are literal braces. A field starts after any leading whitespace and ends at
//! whitespace or at the literal character that follows it in the format.
//! Whitespace in the format matches any run of whitespace in the input, every
//! other character must match exactly.
//!
//! Parsing stops early and reports the fields filled so far when the input runs
//! out, the way `scanf` does.

use crate::error::ScanError;

/// A destination for one parsed field.
///
/// Implementations must leave `self` untouched when they return an error.
pub trait Slot {
    /// Stores `field`, which is field number `index` of the line.
    fn fill(&mut self, field: &str, index: usize) -> Result<(), ScanError>;
}

impl<const N: usize> Slot for heapless::String<N> {
    fn fill(&mut self, field: &str, index: usize) -> Result<(), ScanError> {
        if field.len() > N {
            return Err(ScanError::Overflow {
                index,
                capacity: N,
                needed: field.len(),
            });
        }
        self.clear();
        // length checked above
        let _ = self.push_str(field);
        Ok(())
    }
}

#[cfg(feature = "std")]
impl Slot for std::string::String {
    fn fill(&mut self, field: &str, _index: usize) -> Result<(), ScanError> {
        self.clear();
        self.push_str(field);
        Ok(())
    }
}

macro_rules! parsed_slot {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Slot for $ty {
                fn fill(&mut self, field: &str, index: usize) -> Result<(), ScanError> {
                    *self = field.parse().map_err(|_| ScanError::Invalid { index })?;
                    Ok(())
                }
            }
        )*
    };
}

parsed_slot!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, char);

/// Parses `line` according to `format` into `slots`.
///
/// Returns the number of slots filled, which is less than the number of fields
/// in the format when the line ends early.
pub fn scan(line: &str, format: &str, slots: &mut [&mut dyn Slot]) -> Result<usize, ScanError> {
    let mut pos = 0;
    let mut filled = 0;
    let mut rest = format;

    while let Some(c) = rest.chars().next() {
        if rest.starts_with("{}") {
            rest = &rest[2..];
            pos = skip_whitespace(line, pos);
            if pos == line.len() {
                return Ok(filled);
            }

            let end = field_end(line, pos, next_literal(rest));
            // a field runs up to a literal without any text in between
            if end == pos {
                return Err(ScanError::Mismatch { position: pos });
            }
            let slot = slots
                .get_mut(filled)
                .ok_or(ScanError::MissingSlot { index: filled })?;
            slot.fill(&line[pos..end], filled)?;
            filled += 1;
            pos = end;
            continue;
        }

        let doubled = rest.starts_with("{{") || rest.starts_with("}}");
        rest = &rest[if doubled { 2 } else { c.len_utf8() }..];

        if c.is_whitespace() {
            pos = skip_whitespace(line, pos);
        } else if line[pos..].starts_with(c) {
            pos += c.len_utf8();
        } else if pos == line.len() {
            return Ok(filled);
        } else {
            return Err(ScanError::Mismatch { position: pos });
        }
    }

    Ok(filled)
}

fn skip_whitespace(line: &str, pos: usize) -> usize {
    let rest = &line[pos..];
    pos + (rest.len() - rest.trim_start().len())
}

// the literal a field runs up to, if the format has one right after the field
fn next_literal(rest: &str) -> Option<char> {
    if rest.starts_with("{}") {
        return None;
    }
    rest.chars().next().filter(|c| !c.is_whitespace())
}

fn field_end(line: &str, pos: usize, stop: Option<char>) -> usize {
    line[pos..]
        .char_indices()
        .find(|&(_, c)| c.is_whitespace() || Some(c) == stop)
        .map_or(line.len(), |(i, _)| pos + i)
}
