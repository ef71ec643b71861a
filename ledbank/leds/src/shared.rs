//! LED bank over a register shared with interrupt handlers

use core::cell::Cell;

use critical_section::Mutex;
use ledbank_core::{LedIndex, LedResult};
use log::{debug, trace};

use crate::bank::checked;
use crate::LOG_TARGET;

/// Image register that may be touched from several execution contexts
pub type SharedRegister = Mutex<Cell<u16>>;

/// Create a shared register holding `value`
pub const fn shared_register(value: u16) -> SharedRegister {
    Mutex::new(Cell::new(value))
}

/// [`LedBank`](crate::LedBank) counterpart whose read-modify-write sequences
/// each run inside one critical section.
#[derive(Clone, Copy)]
pub struct SharedLedBank<'a> {
    register: &'a SharedRegister,
}

impl<'a> SharedLedBank<'a> {
    /// Bind `register` and switch every LED off
    pub fn init(register: &'a SharedRegister) -> Self {
        let bank = Self { register };
        bank.set_all(0x0000);
        debug!(target: LOG_TARGET, "shared bank bound, all LEDs off");
        bank
    }

    /// True iff `1 <= index <= 16`
    pub const fn is_valid(index: u8) -> bool {
        LedIndex::is_valid(index)
    }

    /// Switch one LED on
    pub fn turn_on(&self, index: u8) -> LedResult<()> {
        let led = checked(index)?;
        self.update(|value| value | led.mask());
        Ok(())
    }

    /// Switch one LED off
    pub fn turn_off(&self, index: u8) -> LedResult<()> {
        let led = checked(index)?;
        self.update(|value| value & !led.mask());
        Ok(())
    }

    /// Flip one LED
    pub fn toggle(&self, index: u8) -> LedResult<()> {
        let led = checked(index)?;
        self.update(|value| value ^ led.mask());
        Ok(())
    }

    /// Whether one LED is on
    pub fn state(&self, index: u8) -> LedResult<bool> {
        let led = checked(index)?;
        Ok(self.mask() & led.mask() != 0)
    }

    /// Overwrite every LED at once from `mask`
    pub fn set_all(&self, mask: u16) {
        self.update(|_| mask);
    }

    /// Current register value
    pub fn mask(&self) -> u16 {
        critical_section::with(|cs| self.register.borrow(cs).get())
    }

    /// Apply `f` to the register inside one critical section
    pub fn update(&self, f: impl FnOnce(u16) -> u16) {
        critical_section::with(|cs| {
            let cell = self.register.borrow(cs);
            let value = f(cell.get());
            trace!(target: LOG_TARGET, "register <- {:#06x}", value);
            cell.set(value);
        });
    }
}
