//! Analog input support
//!
//! - [`mux`] - channel table for the external multiplexed ADC
//! - [`native`] - state of the RP2040's own ADC

pub mod mux;
pub mod native;

pub use mux::mux_code;
pub use native::NativeAdc;
