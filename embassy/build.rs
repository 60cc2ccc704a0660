fn main() {
    // linker scripts from cortex-m-rt and defmt, memory.x comes from embassy-stm32's memory-x feature
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
