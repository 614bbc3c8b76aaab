//! Shared library for the ledkit firmware images.
//!
//! The binaries under `src/bin/` are standalone sketches; everything they
//! have in common (register-level HAL, small drivers, the pure logic the
//! host tests attach to) lives here.
#![no_std]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

pub mod charlieplex;
pub mod colorwheel;
pub mod config;
pub mod drivers;
pub mod fader;
pub mod hal;
pub mod matcher;
pub mod rng;
pub mod soft_pwm;
pub mod testing;
