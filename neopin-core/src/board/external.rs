//! External ADC and DAC paths

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::delay::DelayNs;
use neopin_hal::{GpioExpander, HostAdc, HostGpio, HostPwm, MultiChannelAdc, MultiChannelDac};

use super::Board;
use crate::adc::mux::{mux_code, MUX_SETTLE_US};
use crate::error::{BusResultExt, Error};
use crate::pin::BackendKind;
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
    /// Select the channel, let the filter settle, then read
    pub(super) fn external_analog_read(&mut self, channel: u8) -> Result<u32, Error> {
        let locks = self.locks;
        let _guard = locks.try_acquire(Resource::Adc)?;

        self.io
            .adc
            .select_mux(mux_code(channel))
            .bus(BackendKind::MultiAdc)?;
        self.io.delay.delay_us(MUX_SETTLE_US);
        self.io.adc.read_raw().bus(BackendKind::MultiAdc)
    }

    /// Load the input register, then latch it to the output
    pub(super) fn dac_write(&mut self, channel: u8, value: i32) -> Result<(), Error> {
        let locks = self.locks;
        let _guard = locks.try_acquire(Resource::Pwm)?;

        let code = (value & 0xFFFF) as u16;
        self.io
            .dac
            .write_input_register(channel, code)
            .bus(BackendKind::MultiDac)?;
        self.io
            .dac
            .update_dac_register(channel)
            .bus(BackendKind::MultiDac)
    }
}
