//! Logical LED indexes

use core::fmt;
use crate::{LedError, LedResult};

/// Number of LEDs carried by one 16-bit image register
pub const LED_COUNT: u8 = 16;

/// Validated, 1-based logical LED index
///
/// LED `n` lives in bit `n - 1` of the image register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LedIndex(u8);

impl LedIndex {
    /// First LED
    pub const FIRST: LedIndex = LedIndex(1);

    /// Last LED
    pub const LAST: LedIndex = LedIndex(LED_COUNT);

    /// Create a new LED index, rejecting anything outside `1..=16`
    pub fn new(index: u8) -> LedResult<Self> {
        if Self::is_valid(index) {
            Ok(LedIndex(index))
        } else {
            Err(LedError::InvalidArgument)
        }
    }

    /// True iff `1 <= index <= 16`
    pub const fn is_valid(index: u8) -> bool {
        index >= 1 && index <= LED_COUNT
    }

    /// Get the raw 1-based index
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// 0-based bit position inside the image register
    pub const fn bit(self) -> u8 {
        self.0 - 1
    }

    /// Single-bit mask selecting this LED
    pub const fn mask(self) -> u16 {
        1u16 << (self.0 - 1)
    }

    /// Iterate over every LED in order
    pub fn all() -> impl Iterator<Item = LedIndex> {
        (1..=LED_COUNT).map(LedIndex)
    }
}

impl TryFrom<u8> for LedIndex {
    type Error = LedError;

    fn try_from(index: u8) -> LedResult<Self> {
        LedIndex::new(index)
    }
}

impl From<LedIndex> for u8 {
    fn from(index: LedIndex) -> u8 {
        index.0
    }
}

impl fmt::Display for LedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LED{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedIndex {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "LED{}", self.0);
    }
}
