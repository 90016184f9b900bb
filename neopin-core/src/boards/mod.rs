//! Board pin tables
//!
//! Each board module lists its logical pins as `PinId` constants plus the
//! `PINS` table the registry is built from. Ids start at 32, right after
//! the RP2040 GPIO range.

pub mod micro;
pub mod neo;

use crate::pin::PinEntry;

/// Supported boards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardKind {
    /// Neo: 12 digital I/O, 8 analog inputs, 4 analog outputs
    Neo,
    /// Micro: 8 digital I/O, 6 analog inputs, 2 analog outputs
    Micro,
}

impl BoardKind {
    /// Static pin table of the board
    pub const fn pins(self) -> &'static [PinEntry] {
        match self {
            BoardKind::Neo => neo::PINS,
            BoardKind::Micro => micro::PINS,
        }
    }
}
