//! Neo pin table
//!
//! - DIO0-DIO11: expander lines 0-11
//! - AI0-AI7: external ADC channels 0-7
//! - AO0-AO3: DAC channels 0-3
//! - IN0-IN1: fast inputs wired straight to GPIO18/19

use crate::pin::{PinEntry, PinId};

pub const DIO0: PinId = 32;
pub const DIO1: PinId = 33;
pub const DIO2: PinId = 34;
pub const DIO3: PinId = 35;
pub const DIO4: PinId = 36;
pub const DIO5: PinId = 37;
pub const DIO6: PinId = 38;
pub const DIO7: PinId = 39;
pub const DIO8: PinId = 40;
pub const DIO9: PinId = 41;
pub const DIO10: PinId = 42;
pub const DIO11: PinId = 43;

pub const AI0: PinId = 44;
pub const AI1: PinId = 45;
pub const AI2: PinId = 46;
pub const AI3: PinId = 47;
pub const AI4: PinId = 48;
pub const AI5: PinId = 49;
pub const AI6: PinId = 50;
pub const AI7: PinId = 51;

pub const AO0: PinId = 52;
pub const AO1: PinId = 53;
pub const AO2: PinId = 54;
pub const AO3: PinId = 55;

pub const IN0: PinId = 56;
pub const IN1: PinId = 57;

pub const PINS: &[PinEntry] = &[
    PinEntry::expander(DIO0, 0),
    PinEntry::expander(DIO1, 1),
    PinEntry::expander(DIO2, 2),
    PinEntry::expander(DIO3, 3),
    PinEntry::expander(DIO4, 4),
    PinEntry::expander(DIO5, 5),
    PinEntry::expander(DIO6, 6),
    PinEntry::expander(DIO7, 7),
    PinEntry::expander(DIO8, 8),
    PinEntry::expander(DIO9, 9),
    PinEntry::expander(DIO10, 10),
    PinEntry::expander(DIO11, 11),
    PinEntry::adc(AI0, 0),
    PinEntry::adc(AI1, 1),
    PinEntry::adc(AI2, 2),
    PinEntry::adc(AI3, 3),
    PinEntry::adc(AI4, 4),
    PinEntry::adc(AI5, 5),
    PinEntry::adc(AI6, 6),
    PinEntry::adc(AI7, 7),
    PinEntry::dac(AO0, 0),
    PinEntry::dac(AO1, 1),
    PinEntry::dac(AO2, 2),
    PinEntry::dac(AO3, 3),
    PinEntry::native(IN0, 18),
    PinEntry::native(IN1, 19),
];
