#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

//! # ledbank LEDs
//!
//! A bank of up to 16 LEDs stored one bit per LED in a 16-bit image register
//! owned by the caller. The register is the wire format: bit `n` is LED
//! `n + 1`, `1` means on.
//!
//! ```
//! use ledbank_leds::LedBank;
//!
//! let mut register: u16 = 0xFFFF;
//! let mut leds = LedBank::init(&mut register);
//! leds.turn_on(4)?;
//! leds.turn_on(6)?;
//! leds.turn_off(4)?;
//! assert_eq!(leds.mask(), 0x0020);
//! # Ok::<(), ledbank_core::LedError>(())
//! ```

pub mod bank;
pub mod shared;

pub use bank::LedBank;
pub use shared::{shared_register, SharedLedBank, SharedRegister};

/// Log target for bank operations
pub const LOG_TARGET: &str = "ledbank::leds";
