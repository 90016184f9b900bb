//! PWM output support
//!
//! - [`scaler`] - frequency/range auto-scaling for the RP2040 PWM slices
//! - [`groups`] - expander line to PWM channel routing

pub mod groups;
pub mod scaler;

pub use groups::{expander_pwm_channel, expander_pwm_config};
pub use scaler::{PwmScaler, Scaling};
