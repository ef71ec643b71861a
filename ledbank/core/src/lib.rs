#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

//! # ledbank core
//!
//! Types shared by every ledbank crate: the error enum, logical LED indexes,
//! pin direction and level, and the [`HardwareAccess`] contract that platform
//! ports implement to reach the actual port/bit registers.

use core::fmt;

pub mod hardware;
pub mod index;

pub use hardware::*;
pub use index::*;

/// ledbank version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type used throughout ledbank
pub type LedResult<T> = Result<T, LedError>;

/// Error types for ledbank operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Null register, LED index outside 1..=16, or an unknown pin handle
    InvalidArgument,
    /// No free slot left in the pin pool
    PoolExhausted,
}

impl fmt::Display for LedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedError::InvalidArgument => write!(f, "Invalid argument"),
            LedError::PoolExhausted => write!(f, "Pin pool exhausted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LedError {}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::InvalidArgument => defmt::write!(fmt, "InvalidArgument"),
            LedError::PoolExhausted => defmt::write!(fmt, "PoolExhausted"),
        }
    }
}

#[cfg(feature = "embedded-hal")]
impl embedded_hal::digital::Error for LedError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}
