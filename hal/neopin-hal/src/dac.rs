//! External DAC abstraction

/// Multi-channel DAC with double-buffered outputs
///
/// A write lands in the channel's input register and only reaches the pin
/// once the DAC register is updated from it.
pub trait MultiChannelDac {
    /// Error type for bus operations
    type Error;

    /// Load a 16-bit code into a channel's input register
    fn write_input_register(&mut self, channel: u8, code: u16) -> Result<(), Self::Error>;

    /// Copy a channel's input register into its DAC register
    fn update_dac_register(&mut self, channel: u8) -> Result<(), Self::Error>;
}
