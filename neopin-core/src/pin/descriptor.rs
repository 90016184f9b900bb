//! Pin descriptor types
//!
//! A descriptor says which backend owns a logical pin, where on that
//! backend it lives, and carries the pin's mode and digital threshold.

use neopin_hal::PinMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Logical pin identifier
pub type PinId = u16;

/// Ids below this value are RP2040 GPIO numbers and never hit the registry
pub const NATIVE_PIN_LIMIT: PinId = 32;

/// Threshold a fresh descriptor starts with (reads low until configured)
pub const DEFAULT_DIGITAL_THRESHOLD: u32 = u32::MAX;

/// Hardware that owns a logical pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BackendKind {
    /// RP2040 GPIO (address = GPIO number)
    Native,
    /// I2C GPIO expander (address = expander line)
    Expander,
    /// External multiplexed ADC (address = input channel)
    MultiAdc,
    /// External DAC (address = output channel)
    MultiDac,
}

impl BackendKind {
    /// Mode a pin on this backend actually ends up in
    ///
    /// - Native pins take any mode.
    /// - Expander lines collapse every output mode to `Output`, keep
    ///   `InputPullDown`, and treat everything else as `InputPullUp`.
    /// - ADC inputs are always `Input`, DAC outputs always `Output`.
    pub const fn coerce_mode(self, requested: PinMode) -> PinMode {
        match self {
            BackendKind::Native => requested,
            BackendKind::Expander => {
                if requested.is_output() {
                    PinMode::Output
                } else if matches!(requested, PinMode::InputPullDown) {
                    PinMode::InputPullDown
                } else {
                    PinMode::InputPullUp
                }
            }
            BackendKind::MultiAdc => PinMode::Input,
            BackendKind::MultiDac => PinMode::Output,
        }
    }
}

/// One row of a static board pin table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinEntry {
    /// Logical pin id (must be >= `NATIVE_PIN_LIMIT`)
    pub id: PinId,
    /// Owning backend
    pub backend: BackendKind,
    /// Backend-local address (GPIO, line or channel)
    pub address: u8,
}

impl PinEntry {
    /// Logical alias for an RP2040 GPIO
    pub const fn native(id: PinId, gpio: u8) -> Self {
        Self {
            id,
            backend: BackendKind::Native,
            address: gpio,
        }
    }

    /// Expander line
    pub const fn expander(id: PinId, line: u8) -> Self {
        Self {
            id,
            backend: BackendKind::Expander,
            address: line,
        }
    }

    /// External ADC input channel
    pub const fn adc(id: PinId, channel: u8) -> Self {
        Self {
            id,
            backend: BackendKind::MultiAdc,
            address: channel,
        }
    }

    /// External DAC output channel
    pub const fn dac(id: PinId, channel: u8) -> Self {
        Self {
            id,
            backend: BackendKind::MultiDac,
            address: channel,
        }
    }
}

/// Runtime state of a logical pin
///
/// Identity (id, backend, address) is fixed at construction; mode and
/// threshold change as the application configures the pin.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinDescriptor {
    id: PinId,
    backend: BackendKind,
    address: u8,
    mode: PinMode,
    threshold: u32,
}

impl PinDescriptor {
    /// Create a descriptor in its power-on state
    pub const fn new(entry: PinEntry) -> Self {
        Self {
            id: entry.id,
            backend: entry.backend,
            address: entry.address,
            mode: PinMode::Input,
            threshold: DEFAULT_DIGITAL_THRESHOLD,
        }
    }

    /// Logical pin id
    pub fn id(&self) -> PinId {
        self.id
    }

    /// Owning backend
    pub fn backend(&self) -> BackendKind {
        self.backend
    }

    /// Backend-local address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Current (coerced) mode
    pub fn mode(&self) -> PinMode {
        self.mode
    }

    pub(crate) fn set_mode(&mut self, mode: PinMode) {
        self.mode = mode;
    }

    /// Digital threshold for analog-only inputs
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub(crate) fn set_threshold(&mut self, threshold: u32) {
        self.threshold = threshold;
    }

    /// Interpret an analog sample as a digital level
    pub fn sample_is_high(&self, sample: u32) -> bool {
        sample >= self.threshold
    }
}

// Pins are the same pin when their ids match, whatever their state
impl PartialEq for PinDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PinDescriptor {}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_MODES: [PinMode; 8] = [
        PinMode::Input,
        PinMode::InputPullUp,
        PinMode::InputPullDown,
        PinMode::Output,
        PinMode::Output2mA,
        PinMode::Output4mA,
        PinMode::Output8mA,
        PinMode::Output12mA,
    ];

    #[test]
    fn test_expander_coercion() {
        let kind = BackendKind::Expander;
        assert_eq!(kind.coerce_mode(PinMode::Output), PinMode::Output);
        assert_eq!(kind.coerce_mode(PinMode::Output8mA), PinMode::Output);
        assert_eq!(
            kind.coerce_mode(PinMode::InputPullDown),
            PinMode::InputPullDown
        );
        assert_eq!(kind.coerce_mode(PinMode::Input), PinMode::InputPullUp);
        assert_eq!(kind.coerce_mode(PinMode::InputPullUp), PinMode::InputPullUp);
    }

    #[test]
    fn test_fixed_function_coercion() {
        for mode in ALL_MODES {
            assert_eq!(BackendKind::MultiAdc.coerce_mode(mode), PinMode::Input);
            assert_eq!(BackendKind::MultiDac.coerce_mode(mode), PinMode::Output);
            assert_eq!(BackendKind::Native.coerce_mode(mode), mode);
        }
    }

    #[test]
    fn test_new_descriptor_defaults() {
        let pin = PinDescriptor::new(PinEntry::adc(40, 3));
        assert_eq!(pin.id(), 40);
        assert_eq!(pin.backend(), BackendKind::MultiAdc);
        assert_eq!(pin.address(), 3);
        assert_eq!(pin.mode(), PinMode::Input);
        assert_eq!(pin.threshold(), DEFAULT_DIGITAL_THRESHOLD);

        // Default threshold keeps the pin low for any sample below u32::MAX
        assert!(!pin.sample_is_high(0xFF_FFFF));
    }

    #[test]
    fn test_threshold_compare() {
        let mut pin = PinDescriptor::new(PinEntry::adc(40, 0));
        pin.set_threshold(1000);
        assert!(!pin.sample_is_high(999));
        assert!(pin.sample_is_high(1000));
        assert!(pin.sample_is_high(1001));
    }

    #[test]
    fn test_equality_by_id() {
        let a = PinDescriptor::new(PinEntry::expander(33, 1));
        let mut b = PinDescriptor::new(PinEntry::dac(33, 2));
        b.set_mode(PinMode::Output);
        assert_eq!(a, b);

        let c = PinDescriptor::new(PinEntry::expander(34, 1));
        assert_ne!(a, c);
    }
}
