//! Pin pool shared between execution contexts

use core::cell::RefCell;

use critical_section::Mutex;
use ledbank_core::{HardwareAccess, LedResult};
use ledbank_mem::{PoolStats, SlotStorage};

use crate::{Gpio, Line, PinHandle};

/// A [`Gpio`] pool guarded by a critical section.
///
/// The allocation scan in [`create`](Self::create) and every pin operation
/// run with interrupts masked (or the platform equivalent), so the pool can
/// live in a `static` and be used from interrupt handlers.
pub struct SharedGpio<H: HardwareAccess, S: SlotStorage<Line>> {
    inner: Mutex<RefCell<Gpio<H, S>>>,
}

impl<H: HardwareAccess, S: SlotStorage<Line>> SharedGpio<H, S> {
    /// Wrap a pool
    pub const fn new(gpio: Gpio<H, S>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(gpio)),
        }
    }

    /// Run `f` on the pool inside a critical section
    pub fn with<R>(&self, f: impl FnOnce(&mut Gpio<H, S>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }

    /// [`Gpio::create`] inside a critical section
    pub fn create(&self, port: u8, bit: u8) -> LedResult<PinHandle> {
        self.with(|gpio| gpio.create(port, bit))
    }

    /// [`Gpio::release`] inside a critical section
    pub fn release(&self, pin: PinHandle) -> LedResult<()> {
        self.with(|gpio| gpio.release(pin))
    }

    /// [`Gpio::set_output`] inside a critical section
    pub fn set_output(&self, pin: PinHandle, is_output: bool) -> LedResult<()> {
        self.with(|gpio| gpio.set_output(pin, is_output))
    }

    /// [`Gpio::set_state`] inside a critical section
    pub fn set_state(&self, pin: PinHandle, high: bool) -> LedResult<()> {
        self.with(|gpio| gpio.set_state(pin, high))
    }

    /// [`Gpio::state`] inside a critical section
    pub fn state(&self, pin: PinHandle) -> LedResult<bool> {
        self.with(|gpio| gpio.state(pin))
    }

    /// Slot usage of the pool
    pub fn stats(&self) -> PoolStats {
        self.with(|gpio| gpio.stats())
    }

    /// Unwrap the pool
    pub fn into_inner(self) -> Gpio<H, S> {
        self.inner.into_inner().into_inner()
    }
}
