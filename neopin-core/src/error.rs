//! Error types

use crate::pin::BackendKind;
use crate::sync::Resource;

/// Errors reported by board operations
///
/// None of these are fatal. Unknown pins and mode mismatches are not
/// errors at all: those operations are silently skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Shared hardware lock is held elsewhere; nothing was touched
    Busy(Resource),
    /// PWM range outside 3..=65535, previous range kept
    RangeOutOfBounds(u32),
    /// Resolution in bits outside the accepted window
    ResolutionOutOfBounds(u8),
    /// Bus transaction with an external chip failed
    Bus(BackendKind),
}

/// Log a failed driver transaction and convert it
pub(crate) fn bus_error(kind: BackendKind) -> Error {
    warn!("{} transaction failed", kind);
    Error::Bus(kind)
}

/// Map driver errors to [`Error::Bus`]
pub(crate) trait BusResultExt<T> {
    fn bus(self, kind: BackendKind) -> Result<T, Error>;
}

impl<T, E> BusResultExt<T> for Result<T, E> {
    fn bus(self, kind: BackendKind) -> Result<T, Error> {
        self.map_err(|_| bus_error(kind))
    }
}
