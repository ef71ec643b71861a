//! Generational slot arena

use core::cell::Cell;
use core::fmt;

use critical_section::Mutex;
use ledbank_core::{LedError, LedResult};

use crate::{PoolStats, SlotStorage};

/// Source of arena ids; wraps after 65 536 arenas
static NEXT_ARENA_ID: Mutex<Cell<u16>> = Mutex::new(Cell::new(0));

fn next_arena_id() -> u16 {
    critical_section::with(|cs| {
        let cell = NEXT_ARENA_ID.borrow(cs);
        let id = cell.get();
        cell.set(id.wrapping_add(1));
        id
    })
}

/// Handle naming one arena slot at one generation
///
/// A handle goes stale once its slot is released; every lookup through a
/// stale handle, or through a handle issued by another arena, fails with
/// [`LedError::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    arena: u16,
    index: u16,
    generation: u16,
}

impl Handle {
    /// Id of the arena that issued the handle
    pub const fn arena(self) -> u16 {
        self.arena
    }

    /// Slot index
    pub const fn index(self) -> u16 {
        self.index
    }

    /// Generation the slot had when this handle was issued
    pub const fn generation(self) -> u16 {
        self.generation
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a{}#{}g{}", self.arena, self.index, self.generation)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Handle {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "a{}#{}g{}", self.arena, self.index, self.generation);
    }
}

/// Bounded arena of `T` values over a [`SlotStorage`]
pub struct Arena<T, S: SlotStorage<T>> {
    id: u16,
    storage: S,
    limit: usize,
    stats: PoolStats,
    _marker: core::marker::PhantomData<T>,
}

impl<T, S: SlotStorage<T>> Arena<T, S> {
    /// Create an arena handing out at most `limit` live slots.
    ///
    /// `limit` is clamped to the storage capacity and to the `u16` index space.
    pub fn new(storage: S, limit: usize) -> Self {
        let limit = limit
            .min(storage.capacity())
            .min(u16::MAX as usize);
        Self {
            id: next_arena_id(),
            storage,
            limit,
            stats: PoolStats::new(limit),
            _marker: core::marker::PhantomData,
        }
    }

    /// Store `value` in the first free slot
    pub fn insert(&mut self, value: T) -> LedResult<Handle> {
        let vacant = self.storage.slots().iter().position(|slot| !slot.is_live());
        let index = match vacant {
            Some(index) => index,
            None if self.storage.slots().len() < self.limit => {
                self.storage.grow().ok_or(LedError::PoolExhausted)?
            }
            None => return Err(LedError::PoolExhausted),
        };

        let slot = &mut self.storage.slots_mut()[index];
        slot.value = Some(value);
        self.stats.on_alloc();

        Ok(Handle {
            arena: self.id,
            index: index as u16,
            generation: slot.generation,
        })
    }

    /// Borrow the value behind `handle`
    pub fn get(&self, handle: Handle) -> LedResult<&T> {
        self.owns(handle)?;
        self.storage
            .slots()
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_ref())
            .ok_or(LedError::InvalidArgument)
    }

    /// Mutably borrow the value behind `handle`
    pub fn get_mut(&mut self, handle: Handle) -> LedResult<&mut T> {
        self.owns(handle)?;
        self.storage
            .slots_mut()
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_mut())
            .ok_or(LedError::InvalidArgument)
    }

    /// Free the slot behind `handle` and return its value.
    ///
    /// The slot generation advances so `handle` and all its copies go stale.
    pub fn remove(&mut self, handle: Handle) -> LedResult<T> {
        self.owns(handle)?;
        let slot = self
            .storage
            .slots_mut()
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .ok_or(LedError::InvalidArgument)?;

        let value = slot.value.take().ok_or(LedError::InvalidArgument)?;
        slot.generation = slot.generation.wrapping_add(1);
        self.stats.on_release();
        Ok(value)
    }

    fn owns(&self, handle: Handle) -> LedResult<()> {
        if handle.arena == self.id {
            Ok(())
        } else {
            Err(LedError::InvalidArgument)
        }
    }

    /// Check if `handle` still names a live slot
    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_ok()
    }

    /// Number of live slots
    pub fn len(&self) -> usize {
        self.stats.used_slots
    }

    /// Check if no slot is live
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Maximum number of live slots
    pub fn capacity(&self) -> usize {
        self.limit
    }

    /// Current pool statistics
    pub fn stats(&self) -> PoolStats {
        self.stats
    }

    /// Iterate over live slots
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T)> {
        let arena = self.id;
        self.storage
            .slots()
            .iter()
            .enumerate()
            .filter_map(move |(index, slot)| {
                slot.value.as_ref().map(|value| {
                    (
                        Handle {
                            arena,
                            index: index as u16,
                            generation: slot.generation,
                        },
                        value,
                    )
                })
            })
    }
}
