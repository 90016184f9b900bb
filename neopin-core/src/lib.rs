//! Logical pin layer for Neopin boards
//!
//! This crate maps one integer pin namespace onto every I/O source fitted
//! to a board:
//!
//! - Native RP2040 GPIO, ADC and PWM (ids below 32)
//! - I2C GPIO expander lines
//! - External multiplexed ADC inputs
//! - External DAC outputs
//!
//! It also owns the PWM auto-scaling state and the digital threshold that
//! lets analog-only inputs be read as digital.
//!
//! ```ignore
//! static LOCKS: HardwareLocks<CriticalSectionRawMutex> = HardwareLocks::new();
//!
//! let mut board = Board::new(&LOCKS, boards::neo::PINS, peripherals)?;
//! board.pin_mode(boards::neo::DIO0, PinMode::Output)?;
//! board.analog_write(boards::neo::DIO0, 128)?;
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible to the other modules
mod fmt;

pub mod adc;
pub mod board;
pub mod boards;
pub mod error;
pub mod pin;
pub mod pwm;
pub mod sync;

#[cfg(test)]
mod testing;

pub use board::{Board, Peripherals};
pub use error::Error;
pub use neopin_hal::PinMode;
pub use pin::{BackendKind, PinDescriptor, PinEntry, PinId, Registry, RegistryError};
pub use sync::{HardwareLocks, Resource};
