#![no_std]
#![forbid(unsafe_code)]

//! # ledbank simulated port
//!
//! [`SimPort`] implements [`HardwareAccess`] on plain memory: eight 32-bit
//! ports with direction, output and input latches. Every call is appended to
//! a bounded log so host code can check exactly which hardware operations a
//! pin issued.

use ledbank_core::HardwareAccess;
use log::trace;

/// Number of simulated ports
pub const PORT_COUNT: usize = 8;

/// Number of lines per simulated port
pub const BITS_PER_PORT: u8 = 32;

/// Default call log depth
pub const DEFAULT_LOG_DEPTH: usize = 32;

/// One recorded hardware call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    SetDirection { port: u8, bit: u8, is_output: bool },
    SetOutput { port: u8, bit: u8, high: bool },
    GetInput { port: u8, bit: u8 },
}

#[cfg(feature = "defmt")]
impl defmt::Format for Call {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Call::SetDirection { port, bit, is_output } => {
                defmt::write!(fmt, "SetDirection({}, {}, {})", port, bit, is_output)
            }
            Call::SetOutput { port, bit, high } => {
                defmt::write!(fmt, "SetOutput({}, {}, {})", port, bit, high)
            }
            Call::GetInput { port, bit } => defmt::write!(fmt, "GetInput({}, {})", port, bit),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct PortLatches {
    direction: u32,
    output: u32,
    input: u32,
}

/// In-memory GPIO ports with a call log of depth `LOG`
#[derive(Debug)]
pub struct SimPort<const LOG: usize = DEFAULT_LOG_DEPTH> {
    ports: [PortLatches; PORT_COUNT],
    calls: heapless::Vec<Call, LOG>,
    overflowed: bool,
}

impl<const LOG: usize> SimPort<LOG> {
    /// Create a port bank with every line an input at low level
    pub const fn new() -> Self {
        Self {
            ports: [PortLatches {
                direction: 0,
                output: 0,
                input: 0,
            }; PORT_COUNT],
            calls: heapless::Vec::new(),
            overflowed: false,
        }
    }

    fn latches(&mut self, port: u8, bit: u8) -> Option<(&mut PortLatches, u32)> {
        if bit >= BITS_PER_PORT {
            return None;
        }
        self.ports
            .get_mut(port as usize)
            .map(|latches| (latches, 1u32 << bit))
    }

    fn record(&mut self, call: Call) {
        trace!("sim: {:?}", call);
        if self.calls.push(call).is_err() {
            self.overflowed = true;
        }
    }

    /// Drive the external level seen by an input line
    pub fn set_input_level(&mut self, port: u8, bit: u8, high: bool) {
        if let Some((latches, mask)) = self.latches(port, bit) {
            if high {
                latches.input |= mask;
            } else {
                latches.input &= !mask;
            }
        }
    }

    /// Level currently latched on an output line
    pub fn output_level(&self, port: u8, bit: u8) -> bool {
        self.read(port, bit, |latches| latches.output)
    }

    /// Check if a line is configured as output
    pub fn is_output(&self, port: u8, bit: u8) -> bool {
        self.read(port, bit, |latches| latches.direction)
    }

    fn read(&self, port: u8, bit: u8, latch: impl Fn(&PortLatches) -> u32) -> bool {
        if bit >= BITS_PER_PORT {
            return false;
        }
        self.ports
            .get(port as usize)
            .map(|latches| latch(latches) & (1u32 << bit) != 0)
            .unwrap_or(false)
    }

    /// Calls recorded so far, oldest first
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Number of recorded calls matching `predicate`
    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }

    /// True once a call was dropped because the log was full
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Forget recorded calls, keeping latch state
    pub fn clear_calls(&mut self) {
        self.calls.clear();
        self.overflowed = false;
    }
}

impl<const LOG: usize> Default for SimPort<LOG> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const LOG: usize> HardwareAccess for SimPort<LOG> {
    fn set_direction(&mut self, port: u8, bit: u8, is_output: bool) {
        self.record(Call::SetDirection { port, bit, is_output });
        if let Some((latches, mask)) = self.latches(port, bit) {
            if is_output {
                latches.direction |= mask;
            } else {
                latches.direction &= !mask;
            }
        }
    }

    fn set_output(&mut self, port: u8, bit: u8, high: bool) {
        self.record(Call::SetOutput { port, bit, high });
        if let Some((latches, mask)) = self.latches(port, bit) {
            if high {
                latches.output |= mask;
            } else {
                latches.output &= !mask;
            }
        }
    }

    fn get_input(&mut self, port: u8, bit: u8) -> bool {
        self.record(Call::GetInput { port, bit });
        match self.latches(port, bit) {
            Some((latches, mask)) if latches.direction & mask != 0 => latches.output & mask != 0,
            Some((latches, mask)) => latches.input & mask != 0,
            None => false,
        }
    }
}
