use std::env;

fn main() {
    let target = env::var("TARGET").unwrap();

    // Link arguments only apply to the AVR images. Host builds (cargo test)
    // compile the library without them.
    if target.contains("avr") {
        println!("cargo:rustc-link-arg=-mmcu=atmega328p");
    }

    // Pass CPU frequency for timing calculations
    println!("cargo:rustc-env=MCU_FREQ_HZ=8000000");
}
