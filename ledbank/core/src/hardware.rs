//! Hardware-access contract for port/bit addressed GPIO lines

use core::fmt;

/// Configured direction of a GPIO line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Input (the reset state of every new pin)
    #[default]
    Input,
    /// Output
    Output,
}

impl Direction {
    /// Map the `is_output` flag used by the hardware layer
    pub const fn from_output(is_output: bool) -> Self {
        if is_output {
            Direction::Output
        } else {
            Direction::Input
        }
    }

    /// True for [`Direction::Output`]
    pub const fn is_output(self) -> bool {
        matches!(self, Direction::Output)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Input => write!(f, "input"),
            Direction::Output => write!(f, "output"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Direction {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Direction::Input => defmt::write!(fmt, "Input"),
            Direction::Output => defmt::write!(fmt, "Output"),
        }
    }
}

/// Logic level of a GPIO line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Low level (0V)
    Low,
    /// High level (VCC)
    High,
}

impl Level {
    /// True for [`Level::High`]
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> bool {
        level.is_high()
    }
}

impl core::ops::Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Level {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Level::Low => defmt::write!(fmt, "Low"),
            Level::High => defmt::write!(fmt, "High"),
        }
    }
}

/// Register-level GPIO primitives provided by a platform port.
///
/// Every call is immediate and side-effecting. Only [`get_input`] returns a
/// value; the others have no failure path.
///
/// [`get_input`]: HardwareAccess::get_input
pub trait HardwareAccess {
    /// Configure the line at `port`/`bit` as output (`true`) or input
    fn set_direction(&mut self, port: u8, bit: u8, is_output: bool);

    /// Drive the line at `port`/`bit` high (`true`) or low
    fn set_output(&mut self, port: u8, bit: u8, high: bool);

    /// Sample the logic level of the line at `port`/`bit`
    fn get_input(&mut self, port: u8, bit: u8) -> bool;
}

impl<H: HardwareAccess + ?Sized> HardwareAccess for &mut H {
    fn set_direction(&mut self, port: u8, bit: u8, is_output: bool) {
        (**self).set_direction(port, bit, is_output)
    }

    fn set_output(&mut self, port: u8, bit: u8, high: bool) {
        (**self).set_output(port, bit, high)
    }

    fn get_input(&mut self, port: u8, bit: u8) -> bool {
        (**self).get_input(port, bit)
    }
}
