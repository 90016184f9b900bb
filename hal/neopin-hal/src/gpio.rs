//! Native GPIO abstractions
//!
//! Pin modes and the primitive pin operations of the host framework.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of GPIO pins on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Pin mode requested by the application
///
/// Mirrors the host framework's pin modes. Output variants differ only in
/// drive strength on the RP2040; other backends collapse them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PinMode {
    /// Floating input
    #[default]
    Input,
    /// Input with pull-up
    InputPullUp,
    /// Input with pull-down
    InputPullDown,
    /// Push-pull output, default drive strength
    Output,
    /// Push-pull output, 2 mA drive
    Output2mA,
    /// Push-pull output, 4 mA drive
    Output4mA,
    /// Push-pull output, 8 mA drive
    Output8mA,
    /// Push-pull output, 12 mA drive
    Output12mA,
}

impl PinMode {
    /// Check if this is any of the output modes
    pub const fn is_output(self) -> bool {
        matches!(
            self,
            PinMode::Output
                | PinMode::Output2mA
                | PinMode::Output4mA
                | PinMode::Output8mA
                | PinMode::Output12mA
        )
    }

    /// Check if this is any of the input modes
    pub const fn is_input(self) -> bool {
        !self.is_output()
    }
}

/// Peripheral function muxed onto a native pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinFunction {
    /// Software-controlled I/O
    Sio,
    /// PWM slice output
    Pwm,
}

/// Native GPIO primitives
///
/// Implemented on top of the host framework's pin API. Register access on
/// the RP2040 cannot fail, so none of these return errors.
pub trait HostGpio {
    /// Apply a pin mode (direction, pulls and drive strength)
    fn set_mode(&mut self, gpio: u8, mode: PinMode);

    /// Enable or disable the input Schmitt trigger
    fn set_input_hysteresis(&mut self, gpio: u8, enabled: bool);

    /// Select the peripheral function for the pin
    fn set_function(&mut self, gpio: u8, function: PinFunction);

    /// Read the pin level (true = high)
    fn read_level(&mut self, gpio: u8) -> bool;

    /// Drive the pin level (true = high)
    fn write_level(&mut self, gpio: u8, high: bool);
}
