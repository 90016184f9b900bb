//! Neopin Hardware Abstraction Layer
//!
//! This crate defines the primitive operations the board layer calls into.
//! Nothing here talks to registers: the RP2040 framework and the vendor chip
//! drivers implement these traits, and `neopin-core` routes logical pins to
//! them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (sketch, firmware, etc.)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  neopin-core (registry + dispatcher)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  neopin-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!          │          │          │         │
//!          ▼          ▼          ▼         ▼
//!   ┌──────────┐ ┌──────────┐ ┌────────┐ ┌────────┐
//!   │  RP2040  │ │ CY8C95xx │ │MCP356x │ │ AD56x4 │
//!   │ GPIO/ADC │ │ expander │ │  ADC   │ │  DAC   │
//!   └──────────┘ └──────────┘ └────────┘ └────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::HostGpio`] - RP2040 pin mode and level access
//! - [`adc::HostAdc`] - RP2040 on-chip ADC
//! - [`pwm::HostPwm`] - RP2040 PWM slices
//! - [`expander::GpioExpander`] - I2C GPIO expander with PWM channels
//! - [`adc::MultiChannelAdc`] - external multiplexed ADC
//! - [`dac::MultiChannelDac`] - external multi-channel DAC

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod dac;
pub mod expander;
pub mod gpio;
pub mod pwm;

// Re-export key traits at crate root for convenience
pub use adc::{HostAdc, MultiChannelAdc};
pub use dac::MultiChannelDac;
pub use expander::GpioExpander;
pub use gpio::{HostGpio, PinFunction, PinMode};
pub use pwm::{ClockDivider, HostPwm};
