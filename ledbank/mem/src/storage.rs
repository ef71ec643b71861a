//! Slot storage strategies

/// One arena slot: a generation counter plus the value while the slot is live
#[derive(Debug, Clone)]
pub struct Slot<T> {
    pub(crate) generation: u16,
    pub(crate) value: Option<T>,
}

impl<T> Slot<T> {
    pub(crate) const fn vacant() -> Self {
        Self {
            generation: 0,
            value: None,
        }
    }

    /// Check if the slot currently holds a value
    pub const fn is_live(&self) -> bool {
        self.value.is_some()
    }

    /// Current generation of the slot
    pub const fn generation(&self) -> u16 {
        self.generation
    }
}

/// Backing store for an [`Arena`](crate::Arena)
pub trait SlotStorage<T> {
    /// Hard upper bound on the number of slots this storage can hold
    fn capacity(&self) -> usize;

    /// Slots created so far
    fn slots(&self) -> &[Slot<T>];

    /// Mutable view of the slots created so far
    fn slots_mut(&mut self) -> &mut [Slot<T>];

    /// Append a vacant slot, returning its index, or `None` when full
    fn grow(&mut self) -> Option<usize>;
}

/// Compile-time sized storage backed by `heapless::Vec`
pub struct StaticSlots<T, const N: usize> {
    slots: heapless::Vec<Slot<T>, N>,
}

impl<T, const N: usize> StaticSlots<T, N> {
    /// Create empty static storage
    pub const fn new() -> Self {
        Self {
            slots: heapless::Vec::new(),
        }
    }
}

impl<T, const N: usize> Default for StaticSlots<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> SlotStorage<T> for StaticSlots<T, N> {
    fn capacity(&self) -> usize {
        N
    }

    fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [Slot<T>] {
        &mut self.slots
    }

    fn grow(&mut self) -> Option<usize> {
        let index = self.slots.len();
        self.slots.push(Slot::vacant()).ok()?;
        Some(index)
    }
}

/// Heap-backed storage that grows one slot at a time
#[cfg(feature = "alloc")]
pub struct HeapSlots<T> {
    slots: alloc::vec::Vec<Slot<T>>,
}

#[cfg(feature = "alloc")]
impl<T> HeapSlots<T> {
    /// Create empty heap storage
    pub const fn new() -> Self {
        Self {
            slots: alloc::vec::Vec::new(),
        }
    }
}

#[cfg(feature = "alloc")]
impl<T> Default for HeapSlots<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "alloc")]
impl<T> SlotStorage<T> for HeapSlots<T> {
    fn capacity(&self) -> usize {
        usize::MAX
    }

    fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [Slot<T>] {
        &mut self.slots
    }

    fn grow(&mut self) -> Option<usize> {
        let index = self.slots.len();
        self.slots.push(Slot::vacant());
        Some(index)
    }
}
