//! GPIO expander path
//!
//! Output lines are parked as pulled-down inputs and only switched to
//! strong drive when written high, so a line configured as output stays
//! passive until the application actually drives it.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::delay::DelayNs;
use neopin_hal::expander::{Direction, DriveMode};
use neopin_hal::{
    GpioExpander, HostAdc, HostGpio, HostPwm, MultiChannelAdc, MultiChannelDac, PinMode,
};

use super::Board;
use crate::error::{BusResultExt, Error};
use crate::pin::{BackendKind, PinDescriptor};
use crate::pwm::expander_pwm_config;
use crate::sync::Resource;

const KIND: BackendKind = BackendKind::Expander;

/// Pulse width that means "steady high" rather than PWM
const FULL_PULSE: u8 = 0xFF;

impl<'a, M, H, X, A, D, Dl> Board<'a, M, H, X, A, D, Dl>
where
    M: RawMutex,
    H: HostGpio + HostAdc + HostPwm,
    X: GpioExpander,
    A: MultiChannelAdc,
    D: MultiChannelDac,
    Dl: DelayNs,
{
    /// Apply an already coerced mode to a line
    pub(super) fn expander_pin_mode(&mut self, line: u8, mode: PinMode) -> Result<(), Error> {
        let drive = match mode {
            PinMode::InputPullUp => DriveMode::PullUp,
            _ => DriveMode::PullDown,
        };

        let expander = &mut self.io.expander;
        expander.disable_pwm(line).bus(KIND)?;
        expander
            .set_pin_mode(line, Direction::Input, drive)
            .bus(KIND)
    }

    pub(super) fn expander_digital_read(&mut self, pin: &PinDescriptor) -> Result<bool, Error> {
        let expander = &mut self.io.expander;
        if pin.mode().is_output() {
            expander.read_output_level(pin.address()).bus(KIND)
        } else {
            expander.read_pin(pin.address()).bus(KIND)
        }
    }

    pub(super) fn expander_digital_write(
        &mut self,
        pin: &PinDescriptor,
        high: bool,
    ) -> Result<(), Error> {
        if pin.mode() != PinMode::Output {
            trace!("expander pin {} not an output, write ignored", pin.id());
            return Ok(());
        }

        let line = pin.address();
        let expander = &mut self.io.expander;
        if high {
            expander
                .set_pin_mode(line, Direction::Output, DriveMode::Strong)
                .bus(KIND)?;
        } else {
            expander
                .set_pin_mode(line, Direction::Input, DriveMode::PullDown)
                .bus(KIND)?;
        }
        expander.write_pin(line, high).bus(KIND)?;
        expander.disable_pwm(line).bus(KIND)
    }

    pub(super) fn expander_analog_write(
        &mut self,
        pin: &PinDescriptor,
        value: i32,
    ) -> Result<(), Error> {
        if pin.mode() != PinMode::Output {
            trace!("expander pin {} not an output, write ignored", pin.id());
            return Ok(());
        }

        let locks = self.locks;
        let _guard = locks.try_acquire(Resource::Pwm)?;

        let line = pin.address();
        let pulse_width = (value & 0xFF) as u8;
        let expander = &mut self.io.expander;

        if pulse_width < FULL_PULSE {
            // A line without a channel cannot show partial duty; leave it alone
            let Some(config) = expander_pwm_config(line, pulse_width) else {
                warn!("expander line {} has no pwm channel, write ignored", line);
                return Ok(());
            };
            expander.configure_pwm(&config).bus(KIND)?;
            expander.enable_pwm(line).bus(KIND)?;
        } else {
            expander.disable_pwm(line).bus(KIND)?;
        }

        expander.write_pin(line, true).bus(KIND)
    }
}
