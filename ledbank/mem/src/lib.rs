#![no_std]
#![forbid(unsafe_code)]

//! # ledbank memory management
//!
//! Fixed-capacity slot arenas addressed by generational [`Handle`]s. The
//! storage strategy is a type parameter: [`StaticSlots`] keeps every slot in
//! a `heapless::Vec` sized at compile time, [`HeapSlots`] (feature `alloc`)
//! grows a heap vector up to the arena limit. An arena never mixes the two.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod arena;
pub mod storage;

pub use arena::*;
pub use storage::*;

/// Slot usage of an arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// Slots the arena may hand out
    pub total_slots: usize,
    /// Slots still available
    pub free_slots: usize,
    /// Live slots
    pub used_slots: usize,
}

impl PoolStats {
    pub const fn new(total_slots: usize) -> Self {
        Self {
            total_slots,
            free_slots: total_slots,
            used_slots: 0,
        }
    }

    pub(crate) fn on_alloc(&mut self) {
        self.used_slots += 1;
        self.free_slots = self.free_slots.saturating_sub(1);
    }

    pub(crate) fn on_release(&mut self) {
        self.used_slots = self.used_slots.saturating_sub(1);
        self.free_slots += 1;
    }

    /// No slot is live
    pub const fn is_empty(&self) -> bool {
        self.used_slots == 0
    }

    /// Every slot is live
    pub const fn is_full(&self) -> bool {
        self.free_slots == 0
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PoolStats {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}/{} slots used", self.used_slots, self.total_slots);
    }
}
