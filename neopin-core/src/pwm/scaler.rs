//! PWM frequency/range auto-scaling
//!
//! The application asks for a PWM frequency and an output range (the value
//! that means 100% duty). The RP2040 slice counter only has an 8.4 clock
//! divider, so not every pair is reachable directly:
//!
//! - Too slow: the divider would exceed 255. The counter range is doubled
//!   until it fits, and written values are shifted up to match.
//! - Too fast: the divider would drop below 1. The range is halved until it
//!   fits, and written values are shifted down, losing resolution.
//!
//! Scaling is computed lazily on the first write after a change, and each
//! slice is programmed once per scaling.

use neopin_hal::pwm::{ClockDivider, SLICE_COUNT};

use crate::error::Error;

/// Frequency after reset, in Hz
pub const DEFAULT_FREQUENCY_HZ: u32 = 1000;

/// Lowest accepted frequency, in Hz
pub const MIN_FREQUENCY_HZ: u32 = 100;

/// Highest accepted frequency, in Hz
pub const MAX_FREQUENCY_HZ: u32 = 10_000_000;

/// Range after reset (8-bit duty)
pub const DEFAULT_RANGE: u32 = 255;

/// Smallest accepted range
pub const MIN_RANGE: u32 = 3;

/// Largest accepted range
pub const MAX_RANGE: u32 = 65535;

/// Resolution window accepted by `set_resolution`, in bits
pub const MIN_RESOLUTION: u8 = 2;
pub const MAX_RESOLUTION: u8 = 16;

/// Range is only doubled while below this
const RANGE_GROW_LIMIT: u32 = 32768;

/// Range is only halved while at least this
const RANGE_SHRINK_LIMIT: u32 = 6;

/// Largest integer part of the hardware divider
const MAX_DIVIDER_RATIO: u64 = 255;

/// Derived slice parameters for one frequency/range pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scaling {
    /// Left shift applied to written values
    pub pseudo_scale: u8,
    /// Right shift applied to written values
    pub slow_scale: u8,
    /// Counter range actually used
    pub range: u32,
    /// Slice clock divider
    pub divider: ClockDivider,
}

impl Scaling {
    /// Compute slice parameters
    ///
    /// # Arguments
    /// * `clock_hz` - System clock feeding the slices
    /// * `frequency` - Target PWM frequency in Hz
    /// * `range` - Requested output range
    pub fn compute(clock_hz: u32, frequency: u32, range: u32) -> Self {
        let clock = clock_hz as u64;
        let frequency = frequency.max(1) as u64;
        let mut range = range.max(1);
        let mut pseudo_scale = 1u8;
        let mut slow_scale = 1u8;

        // clock / (range * f) > 255
        while clock > MAX_DIVIDER_RATIO * range as u64 * frequency && range < RANGE_GROW_LIMIT {
            pseudo_scale += 1;
            range *= 2;
            trace!("pwm scale up: pseudo={} range={}", pseudo_scale, range);
        }

        // clock / (range * f) < 1
        while clock < range as u64 * frequency && range >= RANGE_SHRINK_LIMIT {
            slow_scale += 1;
            range /= 2;
            trace!("pwm scale down: slow={} range={}", slow_scale, range);
        }

        // 8.4 fixed point, truncated like the hardware register
        let bits = (clock * 16 / (range as u64 * frequency)).clamp(16, 0xFFF);

        Self {
            pseudo_scale,
            slow_scale,
            range,
            divider: ClockDivider::from_bits(bits as u16),
        }
    }

    /// Counter wrap value (period is `range` ticks)
    pub fn wrap(&self) -> u16 {
        (self.range - 1).min(u16::MAX as u32) as u16
    }

    /// Compare level for a written value
    pub fn level(&self, value: i32) -> u16 {
        let shifted = ((value as i64) << self.pseudo_scale) >> self.slow_scale;
        shifted.clamp(0, self.range.min(u16::MAX as u32) as i64) as u16
    }
}

/// PWM configuration and cached scaling
#[derive(Debug, Clone)]
pub struct PwmScaler {
    frequency: u32,
    range: u32,
    scaling: Option<Scaling>,
    /// Bitmap of slices programmed with the current scaling
    slices: u8,
}

impl Default for PwmScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl PwmScaler {
    /// Create a scaler with the reset defaults (1 kHz, range 255)
    pub const fn new() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY_HZ,
            range: DEFAULT_RANGE,
            scaling: None,
            slices: 0,
        }
    }

    /// Configured frequency in Hz
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Configured range
    pub fn range(&self) -> u32 {
        self.range
    }

    /// Scaling currently cached, if any
    pub fn cached(&self) -> Option<Scaling> {
        self.scaling
    }

    /// Drop the cached scaling so every slice is reprogrammed
    pub fn invalidate(&mut self) {
        self.scaling = None;
        self.slices = 0;
    }

    /// Set the PWM frequency
    ///
    /// Out-of-range values are clamped to 100 Hz - 10 MHz. Returns the
    /// frequency now in effect. A request that clamps to the frequency
    /// already in effect keeps the cached scaling and programmed slices.
    pub fn set_frequency(&mut self, frequency: u32) -> u32 {
        if frequency == self.frequency {
            return self.frequency;
        }

        let clamped = if frequency < MIN_FREQUENCY_HZ {
            warn!("pwm frequency too low ({}), using {}", frequency, MIN_FREQUENCY_HZ);
            MIN_FREQUENCY_HZ
        } else if frequency > MAX_FREQUENCY_HZ {
            warn!("pwm frequency too high ({}), using {}", frequency, MAX_FREQUENCY_HZ);
            MAX_FREQUENCY_HZ
        } else {
            frequency
        };

        if clamped != self.frequency {
            self.frequency = clamped;
            self.invalidate();
        }
        self.frequency
    }

    /// Set the PWM output range
    ///
    /// Accepts 3-65535. Anything else is rejected and the previous range
    /// stays in effect.
    pub fn set_range(&mut self, range: u32) -> Result<(), Error> {
        if range == self.range {
            return Ok(());
        }

        if !(MIN_RANGE..=MAX_RANGE).contains(&range) {
            warn!("pwm range out of bounds ({})", range);
            return Err(Error::RangeOutOfBounds(range));
        }

        self.range = range;
        self.invalidate();
        Ok(())
    }

    /// Set the PWM output range as a bit width (2-16 bits)
    pub fn set_resolution(&mut self, bits: u8) -> Result<(), Error> {
        if !(MIN_RESOLUTION..=MAX_RESOLUTION).contains(&bits) {
            warn!("pwm resolution out of bounds ({})", bits);
            return Err(Error::ResolutionOutOfBounds(bits));
        }
        self.set_range((1u32 << bits) - 1)
    }

    /// Current scaling, computed if the configuration changed
    pub fn scaling(&mut self, clock_hz: u32) -> Scaling {
        match self.scaling {
            Some(scaling) => scaling,
            None => {
                let scaling = Scaling::compute(clock_hz, self.frequency, self.range);
                debug!(
                    "pwm scaling: {} Hz, range {} -> {} (ps={}, ss={})",
                    self.frequency,
                    self.range,
                    scaling.range,
                    scaling.pseudo_scale,
                    scaling.slow_scale
                );
                self.scaling = Some(scaling);
                scaling
            }
        }
    }

    /// Check if a slice has been programmed with the current scaling
    pub fn is_slice_initialized(&self, slice: u8) -> bool {
        slice < SLICE_COUNT && self.slices & (1 << slice) != 0
    }

    /// Record that a slice has been programmed
    pub fn mark_slice_initialized(&mut self, slice: u8) {
        if slice < SLICE_COUNT {
            self.slices |= 1 << slice;
        }
    }
}
