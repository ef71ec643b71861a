//! embedded-hal adapters for pool pins

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
use ledbank_core::{HardwareAccess, LedError, LedResult};
use ledbank_mem::SlotStorage;

use crate::{Gpio, Line, PinHandle};

/// A pool pin borrowed as an `embedded-hal` digital pin.
///
/// Writes follow the pool rules: driving a pin configured as input is a
/// no-op that still returns `Ok`.
pub struct PinRef<'a, H: HardwareAccess, S: SlotStorage<Line>> {
    gpio: &'a mut Gpio<H, S>,
    handle: PinHandle,
}

impl<'a, H: HardwareAccess, S: SlotStorage<Line>> PinRef<'a, H, S> {
    /// Handle of the borrowed pin
    pub fn handle(&self) -> PinHandle {
        self.handle
    }
}

impl<H: HardwareAccess, S: SlotStorage<Line>> Gpio<H, S> {
    /// Borrow a pin as an `embedded-hal` digital pin
    pub fn pin(&mut self, handle: PinHandle) -> LedResult<PinRef<'_, H, S>> {
        self.line(handle)?;
        Ok(PinRef { gpio: self, handle })
    }
}

/// `ErrorType` trait implementation for `embedded-hal` v1.0.0.
impl<H: HardwareAccess, S: SlotStorage<Line>> ErrorType for PinRef<'_, H, S> {
    type Error = LedError;
}

/// `InputPin` trait implementation for `embedded-hal` v1.0.0.
impl<H: HardwareAccess, S: SlotStorage<Line>> InputPin for PinRef<'_, H, S> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.gpio.state(self.handle)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.gpio.state(self.handle).map(|high| !high)
    }
}

/// `OutputPin` trait implementation for `embedded-hal` v1.0.0.
impl<H: HardwareAccess, S: SlotStorage<Line>> OutputPin for PinRef<'_, H, S> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.gpio.set_state(self.handle, false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.gpio.set_state(self.handle, true)
    }
}

/// `StatefulOutputPin` trait implementation for `embedded-hal` v1.0.0.
impl<H: HardwareAccess, S: SlotStorage<Line>> StatefulOutputPin for PinRef<'_, H, S> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        self.gpio.line(self.handle).map(|line| line.driven().is_high())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        self.gpio.line(self.handle).map(|line| !line.driven().is_high())
    }
}
