//! The user LEDs of the board.

use embassy_stm32::gpio::Output;
use embassy_time::{Duration, Timer};

pub struct Blinker<'d> {
    led: Output<'d>,
}

impl<'d> Blinker<'d> {
    pub fn new(led: Output<'d>) -> Self {
        Blinker { led }
    }

    pub fn on(&mut self) {
        self.led.set_high();
    }

    pub fn off(&mut self) {
        self.led.set_low();
    }

    /// One full cycle: on for `period`, then off for `period`.
    pub async fn blink(&mut self, period: Duration) {
        self.on();
        Timer::after(period).await;
        self.off();
        Timer::after(period).await;
    }
}
