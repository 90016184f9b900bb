//! I2C GPIO expander abstraction
//!
//! The expander exposes 20 lines. Each line has a direction, a drive mode
//! and can be routed to one of four PWM channels.

/// Line direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Line is an input
    Input,
    /// Line is an output
    Output,
}

/// Line drive mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveMode {
    /// Resistive pull-up
    PullUp,
    /// Resistive pull-down
    PullDown,
    /// Open drain, drives high only
    OpenDrainHigh,
    /// Open drain, drives low only
    OpenDrainLow,
    /// Strong push-pull
    Strong,
    /// Slow strong push-pull
    SlowStrong,
    /// High impedance
    HighZ,
}

/// Expander PWM channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmChannel {
    Pwm0,
    Pwm1,
    Pwm2,
    Pwm3,
}

/// Clock source for an expander PWM channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmClockSource {
    /// 32 kHz
    Khz32,
    /// 24 MHz
    Mhz24,
    /// 1.5 MHz
    Mhz1_5,
    /// 93.75 kHz
    Khz93_75,
    /// 367.6 Hz
    Hz367_6,
    /// Output of the previous channel
    Previous,
}

/// Expander PWM channel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExpanderPwmConfig {
    /// Channel to program
    pub channel: PwmChannel,
    /// Clock source
    pub clock: PwmClockSource,
    /// Clock divider
    pub divider: u8,
    /// Period in clock ticks
    pub period: u8,
    /// High time in clock ticks
    pub pulse_width: u8,
}

/// I2C GPIO expander
pub trait GpioExpander {
    /// Error type for bus operations
    type Error;

    /// Set line direction and drive mode
    fn set_pin_mode(
        &mut self,
        line: u8,
        direction: Direction,
        drive: DriveMode,
    ) -> Result<(), Self::Error>;

    /// Read the sensed input level of a line
    fn read_pin(&mut self, line: u8) -> Result<bool, Self::Error>;

    /// Read back the level the output register drives on a line
    fn read_output_level(&mut self, line: u8) -> Result<bool, Self::Error>;

    /// Write the output register bit for a line
    fn write_pin(&mut self, line: u8, high: bool) -> Result<(), Self::Error>;

    /// Route a line to its PWM channel
    fn enable_pwm(&mut self, line: u8) -> Result<(), Self::Error>;

    /// Return a line to static output
    fn disable_pwm(&mut self, line: u8) -> Result<(), Self::Error>;

    /// Program one of the PWM channels
    fn configure_pwm(&mut self, config: &ExpanderPwmConfig) -> Result<(), Self::Error>;
}
