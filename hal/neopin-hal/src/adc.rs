//! ADC abstractions
//!
//! Covers the RP2040's own 12-bit ADC and the external multiplexed
//! delta-sigma converter.

/// Native (on-chip) ADC primitives
///
/// The RP2040 ADC has channels 0-3 on GPIO26-29 and channel 4 wired to the
/// internal temperature sensor.
pub trait HostAdc {
    /// Power up and reset the ADC block
    fn init(&mut self);

    /// Prepare a GPIO pad for analog input (digital input disabled, no pulls)
    fn init_gpio(&mut self, gpio: u8);

    /// Select the ADC input channel (0-4)
    fn select_input(&mut self, channel: u8);

    /// Perform a single conversion on the selected channel (12-bit result)
    fn read_raw(&mut self) -> u16;

    /// Enable or disable the internal temperature sensor bias
    fn set_temperature_sensor(&mut self, enabled: bool);
}

/// External multiplexed ADC
///
/// The converter samples whichever inputs the multiplexer register
/// selects. The board layer picks the code; the driver only writes it.
pub trait MultiChannelAdc {
    /// Error type for bus operations
    type Error;

    /// Write the input multiplexer register
    ///
    /// # Arguments
    /// * `code` - Positive input in the upper nibble, negative in the lower
    fn select_mux(&mut self, code: u8) -> Result<(), Self::Error>;

    /// Read the latest raw conversion result
    fn read_raw(&mut self) -> Result<u32, Self::Error>;
}
