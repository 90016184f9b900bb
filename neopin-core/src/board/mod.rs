//! Pin dispatcher
//!
//! [`Board`] owns the registry, the drivers and the PWM/ADC state, and
//! routes the familiar pin calls to whichever backend owns a pin:
//!
//! | Id            | Backend                                    |
//! |---------------|--------------------------------------------|
//! | `0..32`       | RP2040 GPIO, passed straight through       |
//! | registered    | backend named in the board's pin table     |
//! | anything else | ignored (reads return false / 0)           |
//!
//! Unknown pins and calls a backend cannot honour (writing to an ADC input,
//! writing an expander line that is not an output) are silently skipped.
//! Errors are only returned for lock contention and failed bus transfers.

mod expander;
mod external;
mod native;


use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::delay::DelayNs;
use neopin_hal::{
    GpioExpander, HostAdc, HostGpio, HostPwm, MultiChannelAdc, MultiChannelDac, PinMode,
};

use crate::adc::NativeAdc;
use crate::error::Error;
use crate::pin::{
    BackendKind, PinDescriptor, PinEntry, PinId, Registry, RegistryError, NATIVE_PIN_LIMIT,
};
use crate::pwm::PwmScaler;
use crate::sync::{HardwareLocks, Resource};

/// Drivers a board talks to
///
/// Fields are public so the application can still reach chip features the
/// pin layer does not cover.
pub struct Peripherals<H, X, A, D, Dl> {
    /// RP2040 GPIO, ADC and PWM
    pub host: H,
    /// I2C GPIO expander
    pub expander: X,
    /// External multiplexed ADC
    pub adc: A,
    /// External DAC
    pub dac: D,
    /// Busy-wait delay for settling times
    pub delay: Dl,
}

/// Where a pin id ends up
#[derive(Debug, Clone, Copy)]
enum Route {
    /// RP2040 GPIO
    Native(u8),
    /// Registered logical pin (snapshot of its descriptor)
    Logical(PinDescriptor),
}

/// Board-wide pin context
pub struct Board<'a, M: RawMutex, H, X, A, D, Dl> {
    locks: &'a HardwareLocks<M>,
    registry: Registry,
    io: Peripherals<H, X, A, D, Dl>,
    scaler: PwmScaler,
    native_adc: NativeAdc,
}

impl<'a, M, H, X, A, D, Dl> Board<'a, M, H, X, A, D, Dl>
where
    M: RawMutex,
    H: HostGpio + HostAdc + HostPwm,
    X: GpioExpander,
    A: MultiChannelAdc,
    D: MultiChannelDac,
    Dl: DelayNs,
{
    /// Create a board from its static pin table
    pub fn new(
        locks: &'a HardwareLocks<M>,
        table: &[PinEntry],
        io: Peripherals<H, X, A, D, Dl>,
    ) -> Result<Self, RegistryError> {
        let registry = Registry::from_table(table)?;
        debug!("board registry: {} logical pins", registry.len());
        Ok(Self::with_registry(locks, registry, io))
    }

    /// Create a board around an existing registry
    pub fn with_registry(
        locks: &'a HardwareLocks<M>,
        registry: Registry,
        io: Peripherals<H, X, A, D, Dl>,
    ) -> Self {
        Self {
            locks,
            registry,
            io,
            scaler: PwmScaler::new(),
            native_adc: NativeAdc::new(),
        }
    }

    /// Logical pin registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// PWM configuration and cached scaling
    pub fn scaler(&self) -> &PwmScaler {
        &self.scaler
    }

    /// Native ADC state
    pub fn native_adc(&self) -> &NativeAdc {
        &self.native_adc
    }

    /// Drivers
    pub fn peripherals(&self) -> &Peripherals<H, X, A, D, Dl> {
        &self.io
    }

    /// Drivers, mutably
    pub fn peripherals_mut(&mut self) -> &mut Peripherals<H, X, A, D, Dl> {
        &mut self.io
    }

    /// Tear down the board and hand the drivers back
    pub fn release(self) -> Peripherals<H, X, A, D, Dl> {
        self.io
    }

    fn route(&self, id: PinId) -> Option<Route> {
        if id < NATIVE_PIN_LIMIT {
            return Some(Route::Native(id as u8));
        }
        let route = self.registry.lookup(id).map(|pin| match pin.backend() {
            BackendKind::Native => Route::Native(pin.address()),
            _ => Route::Logical(*pin),
        });
        if route.is_none() {
            trace!("pin {} not registered", id);
        }
        route
    }

    // ---- Pin mode ----

    /// Configure a pin
    ///
    /// Backends that cannot take the requested mode store the closest one
    /// they support; read it back with [`Board::mode`].
    pub fn pin_mode(&mut self, id: PinId, mode: PinMode) -> Result<(), Error> {
        let applied = match self.route(id) {
            None => return Ok(()),
            Some(Route::Native(gpio)) => {
                self.native_pin_mode(gpio, mode);
                mode
            }
            Some(Route::Logical(pin)) => {
                let applied = pin.backend().coerce_mode(mode);
                if pin.backend() == BackendKind::Expander {
                    self.expander_pin_mode(pin.address(), applied)?;
                }
                applied
            }
        };

        if let Some(pin) = self.registry.lookup_mut(id) {
            pin.set_mode(applied);
        }
        Ok(())
    }

    /// Stored mode of a registered pin
    pub fn mode(&self, id: PinId) -> Option<PinMode> {
        self.registry.lookup(id).map(|pin| pin.mode())
    }

    // ---- Digital I/O ----

    /// Read a pin as a digital level
    ///
    /// ADC inputs compare a fresh sample against the pin's digital
    /// threshold. DAC outputs always read low.
    pub fn digital_read(&mut self, id: PinId) -> Result<bool, Error> {
        match self.route(id) {
            None => Ok(false),
            Some(Route::Native(gpio)) => Ok(self.io.host.read_level(gpio)),
            Some(Route::Logical(pin)) => match pin.backend() {
                BackendKind::Expander => self.expander_digital_read(&pin),
                BackendKind::MultiAdc => {
                    let sample = self.external_analog_read(pin.address())?;
                    Ok(pin.sample_is_high(sample))
                }
                BackendKind::MultiDac | BackendKind::Native => Ok(false),
            },
        }
    }

    /// Drive a pin high or low
    pub fn digital_write(&mut self, id: PinId, high: bool) -> Result<(), Error> {
        match self.route(id) {
            None => Ok(()),
            Some(Route::Native(gpio)) => {
                self.io.host.write_level(gpio, high);
                Ok(())
            }
            Some(Route::Logical(pin)) => match pin.backend() {
                BackendKind::Expander => self.expander_digital_write(&pin, high),
                _ => Ok(()),
            },
        }
    }

    // ---- Analog I/O ----

    /// Sample an analog input
    ///
    /// Native pins are scaled to the configured read resolution; external
    /// ADC inputs return the raw conversion.
    pub fn analog_read(&mut self, id: PinId) -> Result<u32, Error> {
        match self.route(id) {
            None => Ok(0),
            Some(Route::Native(gpio)) => self.native_analog_read(gpio),
            Some(Route::Logical(pin)) => match pin.backend() {
                BackendKind::MultiAdc => self.external_analog_read(pin.address()),
                _ => Ok(0),
            },
        }
    }

    /// Write an analog value
    ///
    /// - Native: PWM, scaled to the configured range and frequency
    /// - Expander: 8-bit PWM (255 = steady high)
    /// - DAC: 16-bit output code
    pub fn analog_write(&mut self, id: PinId, value: i32) -> Result<(), Error> {
        match self.route(id) {
            None => Ok(()),
            Some(Route::Native(gpio)) => self.native_analog_write(gpio, value),
            Some(Route::Logical(pin)) => match pin.backend() {
                BackendKind::Expander => self.expander_analog_write(&pin, value),
                BackendKind::MultiDac => self.dac_write(pin.address(), value),
                _ => Ok(()),
            },
        }
    }

    // ---- Digital threshold ----

    /// Set the level at which an analog input reads high
    ///
    /// Stored for any registered pin but only consulted by ADC inputs.
    /// Native and unknown pins ignore it.
    pub fn set_digital_threshold(&mut self, id: PinId, threshold: u32) {
        if let Some(pin) = self.registry.lookup_mut(id) {
            pin.set_threshold(threshold);
        }
    }

    /// Digital threshold of a pin (0 for native and unknown pins)
    pub fn digital_threshold(&self, id: PinId) -> u32 {
        self.registry
            .lookup(id)
            .map(|pin| pin.threshold())
            .unwrap_or(0)
    }

    // ---- Configuration ----

    /// Set the native PWM frequency
    ///
    /// Clamped to 100 Hz - 10 MHz; returns the frequency in effect.
    pub fn analog_write_freq(&mut self, frequency: u32) -> u32 {
        self.scaler.set_frequency(frequency)
    }

    /// Set the native PWM range (value meaning 100% duty)
    pub fn analog_write_range(&mut self, range: u32) -> Result<(), Error> {
        self.scaler.set_range(range)
    }

    /// Set the native PWM range as a bit width
    pub fn analog_write_resolution(&mut self, bits: u8) -> Result<(), Error> {
        self.scaler.set_resolution(bits)
    }

    /// Set the native ADC read resolution (1-31 bits)
    pub fn analog_read_resolution(&mut self, bits: u8) -> Result<(), Error> {
        let locks = self.locks;
        let _guard = locks.try_acquire(Resource::Adc)?;
        if self.native_adc.set_read_bits(bits) {
            Ok(())
        } else {
            warn!("adc read resolution out of bounds ({})", bits);
            Err(Error::ResolutionOutOfBounds(bits))
        }
    }

    /// Read the RP2040's internal temperature sensor in degrees Celsius
    ///
    /// # Arguments
    /// * `vref` - ADC reference voltage in volts (3.3 on these boards)
    pub fn analog_read_temp(&mut self, vref: f32) -> Result<f32, Error> {
        let locks = self.locks;
        let _guard = locks.try_acquire(Resource::Adc)?;
        Ok(self
            .native_adc
            .read_temperature(&mut self.io.host, &mut self.io.delay, vref))
    }
}
