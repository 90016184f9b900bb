//! Logical pin registry
//!
//! Built once from a board's static pin table. Lookups use binary search
//! over the id-sorted descriptors, so they are O(log n) and defined for
//! every id: a miss is `None`, never a panic.

use heapless::Vec;

use super::descriptor::{PinDescriptor, PinEntry, PinId, NATIVE_PIN_LIMIT};

/// Maximum logical pins per board
pub const MAX_PINS: usize = 64;

/// Errors building a registry from a board table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// Two table rows share an id
    DuplicateId(PinId),
    /// Id falls in the native GPIO range
    ReservedId(PinId),
    /// Table has more than `MAX_PINS` rows
    TableFull,
}

/// Logical pin registry
#[derive(Debug, Clone)]
pub struct Registry {
    /// Descriptors sorted by id
    pins: Vec<PinDescriptor, MAX_PINS>,
}

impl Registry {
    /// Build a registry from a board pin table
    ///
    /// Rows may appear in any order.
    pub fn from_table(table: &[PinEntry]) -> Result<Self, RegistryError> {
        let mut pins: Vec<PinDescriptor, MAX_PINS> = Vec::new();

        for entry in table {
            if entry.id < NATIVE_PIN_LIMIT {
                return Err(RegistryError::ReservedId(entry.id));
            }
            pins.push(PinDescriptor::new(*entry))
                .map_err(|_| RegistryError::TableFull)?;
        }

        pins.sort_unstable_by_key(|pin| pin.id());

        if let Some(pair) = pins.windows(2).find(|pair| pair[0].id() == pair[1].id()) {
            return Err(RegistryError::DuplicateId(pair[0].id()));
        }

        Ok(Self { pins })
    }

    /// Create a registry with no logical pins (native GPIO only)
    pub fn empty() -> Self {
        Self { pins: Vec::new() }
    }

    fn position(&self, id: PinId) -> Option<usize> {
        self.pins.binary_search_by_key(&id, |pin| pin.id()).ok()
    }

    /// Find the descriptor for a pin id
    pub fn lookup(&self, id: PinId) -> Option<&PinDescriptor> {
        self.position(id).map(|i| &self.pins[i])
    }

    /// Find the descriptor for a pin id, mutably
    pub fn lookup_mut(&mut self, id: PinId) -> Option<&mut PinDescriptor> {
        self.position(id).map(move |i| &mut self.pins[i])
    }

    /// Check if a pin id is registered
    pub fn contains(&self, id: PinId) -> bool {
        self.position(id).is_some()
    }

    /// Number of registered pins
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Check if no pins are registered
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Iterate over all descriptors in id order
    pub fn iter(&self) -> impl Iterator<Item = &PinDescriptor> {
        self.pins.iter()
    }
}
