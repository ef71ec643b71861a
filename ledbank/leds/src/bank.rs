//! LED bank over an exclusively borrowed image register

use core::ptr;

use ledbank_core::{LedError, LedIndex, LedResult};
use log::{debug, trace, warn};

use crate::LOG_TARGET;

/// Up to 16 LEDs mirrored one bit each in a caller-owned register.
///
/// Bit `n` of the register is LED `n + 1`; `1` is on. The bank holds the
/// register by exclusive reference, so one register binds at most one bank
/// at a time, and several banks over different registers coexist.
pub struct LedBank<'a> {
    register: &'a mut u16,
}

impl<'a> LedBank<'a> {
    /// Bind `register` and switch every LED off
    pub fn init(register: &'a mut u16) -> Self {
        let mut bank = Self { register };
        bank.write(0x0000);
        debug!(target: LOG_TARGET, "bank bound, all LEDs off");
        bank
    }

    /// Bind the register at `register`, rejecting null.
    ///
    /// # Safety
    ///
    /// A non-null `register` must be valid for reads and writes of a `u16`
    /// for `'a`, and nothing else may access it while the bank is alive.
    #[allow(unsafe_code)]
    pub unsafe fn from_ptr(register: *mut u16) -> LedResult<Self> {
        // SAFETY: validity and exclusivity are guaranteed by the caller;
        // `as_mut` handles null.
        match unsafe { register.as_mut() } {
            Some(register) => Ok(Self::init(register)),
            None => {
                warn!(target: LOG_TARGET, "init: null register");
                Err(LedError::InvalidArgument)
            }
        }
    }

    /// True iff `1 <= index <= 16`
    pub const fn is_valid(index: u8) -> bool {
        LedIndex::is_valid(index)
    }

    /// Switch one LED on
    pub fn turn_on(&mut self, index: u8) -> LedResult<()> {
        let led = checked(index)?;
        self.set(led, true);
        Ok(())
    }

    /// Switch one LED off
    pub fn turn_off(&mut self, index: u8) -> LedResult<()> {
        let led = checked(index)?;
        self.set(led, false);
        Ok(())
    }

    /// Flip one LED
    pub fn toggle(&mut self, index: u8) -> LedResult<()> {
        let led = checked(index)?;
        let value = self.read() ^ led.mask();
        self.write(value);
        Ok(())
    }

    /// Whether one LED is on
    pub fn state(&self, index: u8) -> LedResult<bool> {
        let led = checked(index)?;
        Ok(self.is_on(led))
    }

    /// Switch `led` on or off
    pub fn set(&mut self, led: LedIndex, on: bool) {
        let value = if on {
            self.read() | led.mask()
        } else {
            self.read() & !led.mask()
        };
        self.write(value);
    }

    /// Whether `led` is on
    pub fn is_on(&self, led: LedIndex) -> bool {
        (self.read() >> led.bit()) & 1 == 1
    }

    /// Overwrite every LED at once from `mask`
    pub fn set_all(&mut self, mask: u16) {
        self.write(mask);
    }

    /// Switch every LED on
    pub fn turn_on_all(&mut self) {
        self.set_all(0xFFFF);
    }

    /// Switch every LED off
    pub fn turn_off_all(&mut self) {
        self.set_all(0x0000);
    }

    /// Current register value
    pub fn mask(&self) -> u16 {
        self.read()
    }

    /// Unbind and hand the register back
    pub fn release(self) -> &'a mut u16 {
        self.register
    }

    #[allow(unsafe_code)]
    fn read(&self) -> u16 {
        // SAFETY: `register` is a valid, aligned reference.
        unsafe { ptr::read_volatile(&*self.register) }
    }

    #[allow(unsafe_code)]
    fn write(&mut self, value: u16) {
        trace!(target: LOG_TARGET, "register <- {:#06x}", value);
        // SAFETY: `register` is a valid, aligned, exclusive reference.
        unsafe { ptr::write_volatile(&mut *self.register, value) }
    }
}

pub(crate) fn checked(index: u8) -> LedResult<LedIndex> {
    LedIndex::new(index).inspect_err(|_| {
        warn!(target: LOG_TARGET, "LED index {} outside 1..=16", index);
    })
}
