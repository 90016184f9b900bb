//! RP2040 GPIO, ADC and PWM paths

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::delay::DelayNs;
use neopin_hal::gpio::GPIO_COUNT;
use neopin_hal::pwm::gpio_to_slice;
use neopin_hal::{
    GpioExpander, HostAdc, HostGpio, HostPwm, MultiChannelAdc, MultiChannelDac, PinFunction,
    PinMode,
};

use super::Board;
use crate::error::Error;
use crate::sync::Resource;

impl<'a, M, H, X, A, D, Dl> Board<'a, M, H, X, A, D, Dl>
where
    M: RawMutex,
    H: HostGpio + HostAdc + HostPwm,
    X: GpioExpander,
    A: MultiChannelAdc,
    D: MultiChannelDac,
    Dl: DelayNs,
{
    pub(super) fn native_pin_mode(&mut self, gpio: u8, mode: PinMode) {
        // Input hysteresis is always off on these boards
        self.io.host.set_input_hysteresis(gpio, false);
        self.io.host.set_mode(gpio, mode);
    }

    pub(super) fn native_analog_read(&mut self, gpio: u8) -> Result<u32, Error> {
        let locks = self.locks;
        let _guard = locks.try_acquire(Resource::Adc)?;

        match self.native_adc.read(&mut self.io.host, gpio) {
            Some(sample) => Ok(sample),
            None => {
                warn!("illegal analog read pin ({})", gpio);
                Ok(0)
            }
        }
    }

    pub(super) fn native_analog_write(&mut self, gpio: u8, value: i32) -> Result<(), Error> {
        let locks = self.locks;
        let _guard = locks.try_acquire(Resource::Pwm)?;

        if gpio >= GPIO_COUNT {
            warn!("illegal analog write pin ({})", gpio);
            return Ok(());
        }

        // The pad leaves ADC duty; a later read must set it up again
        self.native_adc.release_gpio(gpio);

        let scaling = self.scaler.scaling(self.io.host.sys_clock_hz());

        let slice = gpio_to_slice(gpio);
        if !self.scaler.is_slice_initialized(slice) {
            self.io
                .host
                .configure_slice(slice, scaling.divider, scaling.wrap());
            self.scaler.mark_slice_initialized(slice);
        }

        self.io.host.set_function(gpio, PinFunction::Pwm);
        self.io.host.set_level(gpio, scaling.level(value));
        Ok(())
    }
}
