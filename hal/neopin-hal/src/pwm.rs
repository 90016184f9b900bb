//! Native PWM abstractions

/// RP2040 PWM clock divider (8 integer bits, 4 fractional bits)
///
/// Stored in a 16-bit fixed-point value; valid hardware range is
/// 1.0 to 255.9375.
pub type ClockDivider = fixed::types::U12F4;

/// Number of PWM slices on the RP2040
pub const SLICE_COUNT: u8 = 8;

/// PWM slice driving a GPIO
///
/// Each slice owns two channels (A/B), so GPIO pairs share a slice and
/// the pattern repeats every 16 pins.
pub const fn gpio_to_slice(gpio: u8) -> u8 {
    (gpio >> 1) & (SLICE_COUNT - 1)
}

/// Native PWM primitives
pub trait HostPwm {
    /// System clock feeding the PWM slices, in Hz
    fn sys_clock_hz(&self) -> u32;

    /// Configure and start a slice
    ///
    /// # Arguments
    /// * `slice` - Slice number (0-7)
    /// * `divider` - Clock divider
    /// * `wrap` - Counter top value (period is `wrap + 1` ticks)
    fn configure_slice(&mut self, slice: u8, divider: ClockDivider, wrap: u16);

    /// Set the compare level of the channel driving `gpio`
    fn set_level(&mut self, gpio: u8, level: u16);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_mapping() {
        assert_eq!(gpio_to_slice(0), 0);
        assert_eq!(gpio_to_slice(1), 0);
        assert_eq!(gpio_to_slice(2), 1);
        assert_eq!(gpio_to_slice(15), 7);
        // Wraps after 16 pins
        assert_eq!(gpio_to_slice(16), 0);
        assert_eq!(gpio_to_slice(29), 6);
    }

    #[test]
    fn test_divider_bits() {
        let div = ClockDivider::from_bits(16);
        assert_eq!(div, ClockDivider::from_num(1));
        assert_eq!(ClockDivider::from_bits(0xFFF).to_num::<u32>(), 255);
    }
}
