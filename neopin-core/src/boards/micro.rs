//! Micro pin table

use crate::pin::{PinEntry, PinId};

// Digital I/O on expander lines 12-19
pub const DIO0: PinId = 32;
pub const DIO1: PinId = 33;
pub const DIO2: PinId = 34;
pub const DIO3: PinId = 35;
pub const DIO4: PinId = 36;
pub const DIO5: PinId = 37;
pub const DIO6: PinId = 38;
pub const DIO7: PinId = 39;

// Analog inputs on external ADC channels 0-5
pub const AI0: PinId = 40;
pub const AI1: PinId = 41;
pub const AI2: PinId = 42;
pub const AI3: PinId = 43;
pub const AI4: PinId = 44;
pub const AI5: PinId = 45;

// Analog outputs on DAC channels 0-1
pub const AO0: PinId = 46;
pub const AO1: PinId = 47;

pub const PINS: &[PinEntry] = &[
    PinEntry::expander(DIO0, 12),
    PinEntry::expander(DIO1, 13),
    PinEntry::expander(DIO2, 14),
    PinEntry::expander(DIO3, 15),
    PinEntry::expander(DIO4, 16),
    PinEntry::expander(DIO5, 17),
    PinEntry::expander(DIO6, 18),
    PinEntry::expander(DIO7, 19),
    PinEntry::adc(AI0, 0),
    PinEntry::adc(AI1, 1),
    PinEntry::adc(AI2, 2),
    PinEntry::adc(AI3, 3),
    PinEntry::adc(AI4, 4),
    PinEntry::adc(AI5, 5),
    PinEntry::dac(AO0, 0),
    PinEntry::dac(AO1, 1),
];
