//! External ADC input multiplexer codes
//!
//! The MUX register takes the positive input in bits 7:4 and the negative
//! input in bits 3:0. Every board input is measured single-ended against
//! the external reference minus pin.

/// Number of external ADC channels
pub const CHANNEL_COUNT: u8 = 8;

/// Negative input: REFIN-
pub const MUX_VIN_NEG_REFIN_MINUS: u8 = 0x0C;

/// Settle time after switching the multiplexer, in microseconds
///
/// Covers the digital filter at an oversampling ratio of 256.
pub const MUX_SETTLE_US: u32 = 500;

/// Positive multiplexer input per board channel
///
/// Board channel 3 is wired to converter input CH4. Board channel 4 has no
/// entry of its own and falls back to CH0 like any unknown channel.
const POSITIVE_INPUT: [u8; CHANNEL_COUNT as usize] = [0, 1, 2, 4, 0, 5, 6, 7];

/// Fallback positive input for channels without a table entry
const FALLBACK_INPUT: u8 = 0;

/// Positive input selected for a board channel
pub fn positive_input(channel: u8) -> u8 {
    POSITIVE_INPUT
        .get(channel as usize)
        .copied()
        .unwrap_or(FALLBACK_INPUT)
}

/// Full MUX register value for a board channel
pub fn mux_code(channel: u8) -> u8 {
    (positive_input(channel) << 4) | MUX_VIN_NEG_REFIN_MINUS
}
