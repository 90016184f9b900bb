//! RP2040 on-chip ADC state
//!
//! GPIO26-29 are ADC channels 0-3 and channel 4 is the temperature sensor.
//! The ADC block and each pad are set up lazily on first use, and the
//! multiplexer is only switched when a different pin is read.

use embedded_hal::delay::DelayNs;
use neopin_hal::HostAdc;

/// First GPIO with an ADC channel
pub const ADC_FIRST_GPIO: u8 = 26;

/// Last GPIO with an ADC channel
pub const ADC_LAST_GPIO: u8 = 29;

/// Channel of the internal temperature sensor
pub const TEMPERATURE_CHANNEL: u8 = 4;

/// Native conversion width in bits
pub const NATIVE_BITS: u8 = 12;

/// Read resolution after reset, in bits
pub const DEFAULT_READ_BITS: u8 = 10;

/// Temperature sensor settle time, in milliseconds
pub const TEMPERATURE_SETTLE_MS: u32 = 1;

/// ADC channel for a GPIO, if it has one
pub fn channel_for_gpio(gpio: u8) -> Option<u8> {
    if (ADC_FIRST_GPIO..=ADC_LAST_GPIO).contains(&gpio) {
        Some(gpio - ADC_FIRST_GPIO)
    } else {
        None
    }
}

/// Convert a raw sensor reading to degrees Celsius
///
/// From the RP2040 datasheet: 0.706 V at 27 °C, -1.721 mV/°C.
pub fn temperature_from_raw(raw: u16, vref: f32) -> f32 {
    let volts = raw as f32 * vref / 4096.0;
    27.0 - (volts - 0.706) / 0.001721
}

/// Native ADC bookkeeping
#[derive(Debug, Clone)]
pub struct NativeAdc {
    /// ADC block powered up
    initialized: bool,
    /// Bitmap of GPIO pads prepared for analog input
    gpio_initialized: u32,
    /// GPIO the multiplexer currently points at
    selected: Option<u8>,
    /// Resolution reads are scaled to
    read_bits: u8,
}

impl Default for NativeAdc {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeAdc {
    /// Create ADC state for a freshly reset chip
    pub const fn new() -> Self {
        Self {
            initialized: false,
            gpio_initialized: 0,
            selected: None,
            read_bits: DEFAULT_READ_BITS,
        }
    }

    /// Current read resolution in bits
    pub fn read_bits(&self) -> u8 {
        self.read_bits
    }

    /// Set the read resolution
    ///
    /// Accepts 1-31 bits; returns false and keeps the old value otherwise.
    pub fn set_read_bits(&mut self, bits: u8) -> bool {
        if bits > 0 && bits < 32 {
            self.read_bits = bits;
            true
        } else {
            false
        }
    }

    /// Check if a GPIO pad is currently set up for analog input
    pub fn is_gpio_initialized(&self, gpio: u8) -> bool {
        gpio < 32 && self.gpio_initialized & (1 << gpio) != 0
    }

    /// Forget the analog setup of a pad (it was given to another function)
    pub fn release_gpio(&mut self, gpio: u8) {
        if gpio < 32 {
            self.gpio_initialized &= !(1 << gpio);
        }
    }

    /// Scale a 12-bit sample to the read resolution
    pub fn scale(&self, raw: u16) -> u32 {
        let raw = raw as u32;
        if self.read_bits < NATIVE_BITS {
            raw >> (NATIVE_BITS - self.read_bits)
        } else {
            raw << (self.read_bits - NATIVE_BITS)
        }
    }

    fn ensure_initialized<A: HostAdc>(&mut self, adc: &mut A) {
        if !self.initialized {
            adc.init();
            self.initialized = true;
        }
    }

    /// Sample a GPIO
    ///
    /// Returns `None` without touching the ADC if the GPIO has no channel.
    pub fn read<A: HostAdc>(&mut self, adc: &mut A, gpio: u8) -> Option<u32> {
        let channel = channel_for_gpio(gpio)?;

        self.ensure_initialized(adc);

        if !self.is_gpio_initialized(gpio) {
            adc.init_gpio(gpio);
            self.gpio_initialized |= 1 << gpio;
        }

        if self.selected != Some(gpio) {
            adc.select_input(channel);
            self.selected = Some(gpio);
        }

        Some(self.scale(adc.read_raw()))
    }

    /// Read the on-die temperature sensor in degrees Celsius
    pub fn read_temperature<A: HostAdc, D: DelayNs>(
        &mut self,
        adc: &mut A,
        delay: &mut D,
        vref: f32,
    ) -> f32 {
        self.ensure_initialized(adc);

        // The next GPIO read must reselect its channel
        self.selected = None;

        adc.set_temperature_sensor(true);
        delay.delay_ms(TEMPERATURE_SETTLE_MS);
        adc.select_input(TEMPERATURE_CHANNEL);
        let raw = adc.read_raw();
        adc.set_temperature_sensor(false);

        temperature_from_raw(raw, vref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_mapping() {
        assert_eq!(channel_for_gpio(26), Some(0));
        assert_eq!(channel_for_gpio(29), Some(3));
        assert_eq!(channel_for_gpio(25), None);
        assert_eq!(channel_for_gpio(30), None);
    }

    #[test]
    fn test_scaling() {
        let mut adc = NativeAdc::new();

        // Default 10 bits drops two bits
        assert_eq!(adc.scale(4095), 1023);

        assert!(adc.set_read_bits(12));
        assert_eq!(adc.scale(4095), 4095);

        assert!(adc.set_read_bits(16));
        assert_eq!(adc.scale(4095), 4095 << 4);

        assert!(adc.set_read_bits(8));
        assert_eq!(adc.scale(0x800), 0x80);
    }

    #[test]
    fn test_read_bits_bounds() {
        let mut adc = NativeAdc::new();
        assert!(!adc.set_read_bits(0));
        assert!(!adc.set_read_bits(32));
        assert_eq!(adc.read_bits(), DEFAULT_READ_BITS);
        assert!(adc.set_read_bits(31));
        assert_eq!(adc.read_bits(), 31);
    }

    #[test]
    fn test_release_gpio() {
        let mut adc = NativeAdc::new();
        adc.gpio_initialized = 1 << 26;
        assert!(adc.is_gpio_initialized(26));
        adc.release_gpio(26);
        assert!(!adc.is_gpio_initialized(26));
        // Out-of-range pins are ignored
        adc.release_gpio(40);
    }

    #[test]
    fn test_temperature_conversion() {
        // 0.706 V is 27 °C by definition
        let raw = (0.706 / 3.3 * 4096.0) as u16;
        let t = temperature_from_raw(raw, 3.3);
        assert!((t - 27.0).abs() < 1.0);

        // Lower voltage means hotter
        assert!(temperature_from_raw(raw - 20, 3.3) > t);
    }
}
