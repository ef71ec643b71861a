//! Pooled GPIO pin objects

use core::fmt;

use ledbank_core::{Direction, HardwareAccess, LedError, Level, LedResult};
use ledbank_mem::{Arena, Handle, PoolStats, SlotStorage, StaticSlots};
use log::{debug, trace, warn};

use crate::GpioConfig;

#[cfg(feature = "alloc")]
use ledbank_mem::HeapSlots;

/// Handle to a pin created by a [`Gpio`] pool
pub type PinHandle = Handle;

/// State of one GPIO line as tracked by the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    port: u8,
    bit: u8,
    direction: Direction,
    driven: Level,
}

impl Line {
    const fn new(port: u8, bit: u8) -> Self {
        Self {
            port,
            bit,
            direction: Direction::Input,
            driven: Level::Low,
        }
    }

    /// Port the line belongs to
    pub const fn port(self) -> u8 {
        self.port
    }

    /// Bit position inside the port
    pub const fn bit(self) -> u8 {
        self.bit
    }

    /// Configured direction
    pub const fn direction(self) -> Direction {
        self.direction
    }

    /// Last level driven while configured as output
    pub const fn driven(self) -> Level {
        self.driven
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}.{} ({})", self.port, self.bit, self.direction)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Line {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "P{}.{} ({})", self.port, self.bit, self.direction);
    }
}

/// Pool of GPIO pins routed to one hardware-access implementation.
///
/// Pins are created once and addressed by [`PinHandle`] afterwards. Every
/// operation through a handle that does not name a live pin fails with
/// [`LedError::InvalidArgument`](ledbank_core::LedError::InvalidArgument)
/// without touching the hardware.
pub struct Gpio<H: HardwareAccess, S: SlotStorage<Line>> {
    hw: H,
    pins: Arena<Line, S>,
    config: GpioConfig,
}

/// Pool with `N` statically allocated slots
pub type StaticGpio<H, const N: usize = { crate::GPIO_MAX_INSTANCES }> = Gpio<H, StaticSlots<Line, N>>;

/// Pool with heap-allocated slots
#[cfg(feature = "alloc")]
pub type HeapGpio<H> = Gpio<H, HeapSlots<Line>>;

impl<H: HardwareAccess, const N: usize> Gpio<H, StaticSlots<Line, N>> {
    /// Create a pool with `N` statically allocated slots
    pub fn new_static(hw: H, config: GpioConfig) -> Self {
        Self::new(hw, StaticSlots::new(), config)
    }
}

#[cfg(feature = "alloc")]
impl<H: HardwareAccess> Gpio<H, HeapSlots<Line>> {
    /// Create a pool whose slots are allocated on the heap on demand
    pub fn new_heap(hw: H, config: GpioConfig) -> Self {
        Self::new(hw, HeapSlots::new(), config)
    }
}

impl<H: HardwareAccess, S: SlotStorage<Line>> Gpio<H, S> {
    /// Create a pool over explicit slot storage
    pub fn new(hw: H, storage: S, config: GpioConfig) -> Self {
        let pins = Arena::new(storage, config.max_instances);
        debug!(target: config.name, "pool ready, {} slots", pins.capacity());
        Self { hw, pins, config }
    }

    /// Create a pin for `port`/`bit`, configured as input.
    ///
    /// No hardware call is issued until the direction is set.
    pub fn create(&mut self, port: u8, bit: u8) -> LedResult<PinHandle> {
        match self.pins.insert(Line::new(port, bit)) {
            Ok(handle) => {
                debug!(target: self.config.name, "create P{}.{} -> {}", port, bit, handle);
                Ok(handle)
            }
            Err(err) => {
                warn!(target: self.config.name, "create P{}.{}: {}", port, bit, err);
                Err(err)
            }
        }
    }

    /// Free a pin; `pin` and its copies become stale
    pub fn release(&mut self, pin: PinHandle) -> LedResult<()> {
        let name = self.config.name;
        let line = self.pins.remove(pin).inspect_err(|err| rejected(name, pin, err))?;
        debug!(target: self.config.name, "release {} ({})", pin, line);
        Ok(())
    }

    /// Record the direction and configure the line accordingly
    pub fn set_output(&mut self, pin: PinHandle, is_output: bool) -> LedResult<()> {
        let line = self.line_mut(pin)?;
        line.direction = Direction::from_output(is_output);
        let (port, bit) = (line.port, line.bit);

        trace!(target: self.config.name, "set_direction P{}.{} output={}", port, bit, is_output);
        self.hw.set_direction(port, bit, is_output);
        Ok(())
    }

    /// Drive an output pin; input pins are left alone
    pub fn set_state(&mut self, pin: PinHandle, high: bool) -> LedResult<()> {
        let line = self.line_mut(pin)?;
        if !line.direction.is_output() {
            return Ok(());
        }
        line.driven = Level::from(high);
        let (port, bit) = (line.port, line.bit);

        trace!(target: self.config.name, "set_output P{}.{} high={}", port, bit, high);
        self.hw.set_output(port, bit, high);
        Ok(())
    }

    /// Sample the line level, whatever its direction
    pub fn state(&mut self, pin: PinHandle) -> LedResult<bool> {
        let (port, bit) = self.port_bit(pin)?;
        let high = self.hw.get_input(port, bit);
        trace!(target: self.config.name, "get_input P{}.{} -> {}", port, bit, high);
        Ok(high)
    }

    /// Configured direction of a pin
    pub fn direction(&self, pin: PinHandle) -> LedResult<Direction> {
        self.line(pin).map(Line::direction)
    }

    /// Port and bit a pin was created with
    pub fn port_bit(&self, pin: PinHandle) -> LedResult<(u8, u8)> {
        self.line(pin).map(|line| (line.port, line.bit))
    }

    /// Tracked state of a pin
    pub fn line(&self, pin: PinHandle) -> LedResult<Line> {
        self.pins
            .get(pin)
            .copied()
            .inspect_err(|err| rejected(self.config.name, pin, err))
    }

    fn line_mut(&mut self, pin: PinHandle) -> LedResult<&mut Line> {
        let name = self.config.name;
        self.pins.get_mut(pin).inspect_err(|err| rejected(name, pin, err))
    }

    /// Iterate over live pins
    pub fn pins(&self) -> impl Iterator<Item = (PinHandle, &Line)> {
        self.pins.iter()
    }

    /// Slot usage of the pool
    pub fn stats(&self) -> PoolStats {
        self.pins.stats()
    }

    /// Pool configuration
    pub fn config(&self) -> &GpioConfig {
        &self.config
    }

    /// Borrow the hardware-access implementation
    pub fn hardware(&self) -> &H {
        &self.hw
    }

    /// Mutably borrow the hardware-access implementation
    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hw
    }

    /// Tear the pool down and return the hardware-access implementation
    pub fn free(self) -> H {
        self.hw
    }
}

fn rejected(name: &str, pin: PinHandle, err: &LedError) {
    warn!(target: name, "{}: {}", pin, err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledbank_sim::{Call, SimPort};

    fn pool() -> StaticGpio<SimPort> {
        Gpio::new_static(SimPort::new(), GpioConfig::default())
    }

    #[test]
    fn test_create_defaults_to_input() {
        let mut gpio = pool();
        let pin = gpio.create(1, 7).unwrap();

        assert_eq!(gpio.direction(pin), Ok(Direction::Input));
        assert_eq!(gpio.port_bit(pin), Ok((1, 7)));
        assert!(gpio.hardware().calls().is_empty());
    }

    #[test]
    fn test_set_output_records_direction() {
        let mut gpio = pool();
        let pin = gpio.create(1, 7).unwrap();

        gpio.set_output(pin, true).unwrap();
        assert_eq!(gpio.direction(pin), Ok(Direction::Output));
        assert_eq!(
            gpio.hardware().calls(),
            &[Call::SetDirection { port: 1, bit: 7, is_output: true }]
        );
    }

    #[test]
    fn test_driven_level_tracked() {
        let mut gpio = pool();
        let pin = gpio.create(0, 2).unwrap();

        gpio.set_output(pin, true).unwrap();
        gpio.set_state(pin, true).unwrap();
        assert_eq!(gpio.line(pin).unwrap().driven(), Level::High);
    }

    #[test]
    fn test_released_pin_rejected() {
        let mut gpio = pool();
        let pin = gpio.create(0, 0).unwrap();
        gpio.release(pin).unwrap();

        assert_eq!(gpio.set_output(pin, true), Err(LedError::InvalidArgument));
        assert_eq!(gpio.release(pin), Err(LedError::InvalidArgument));
        assert!(gpio.hardware().calls().is_empty());
    }

    #[test]
    fn test_direction_follows_set_output() {
        let mut gpio = pool();
        let pin = gpio.create(3, 0).unwrap();

        gpio.set_output(pin, true).unwrap();
        assert_eq!(gpio.direction(pin), Ok(Direction::Output));
        gpio.set_output(pin, false).unwrap();
        assert_eq!(gpio.direction(pin), Ok(Direction::Input));
    }
}
