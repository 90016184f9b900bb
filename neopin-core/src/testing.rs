//! Mock drivers for host tests
//!
//! Every mock appends to one shared call log so tests can check the exact
//! order of hardware transactions across drivers.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embedded_hal::delay::DelayNs;
use neopin_hal::expander::{Direction, DriveMode, ExpanderPwmConfig};
use neopin_hal::{
    ClockDivider, GpioExpander, HostAdc, HostGpio, HostPwm, MultiChannelAdc, MultiChannelDac,
    PinFunction, PinMode,
};

use crate::board::{Board, Peripherals};
use crate::boards;
use crate::sync::HardwareLocks;

pub const CLOCK_HZ: u32 = 125_000_000;

/// One recorded hardware transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    // Host GPIO
    SetMode(u8, PinMode),
    Hysteresis(u8, bool),
    Function(u8, PinFunction),
    ReadLevel(u8),
    WriteLevel(u8, bool),
    // Host ADC
    AdcInit,
    AdcInitGpio(u8),
    AdcSelect(u8),
    AdcRead,
    TempSensor(bool),
    // Host PWM
    ConfigureSlice(u8, ClockDivider, u16),
    SetLevel(u8, u16),
    // Expander
    ExpMode(u8, Direction, DriveMode),
    ExpRead(u8),
    ExpReadOutput(u8),
    ExpWrite(u8, bool),
    ExpEnablePwm(u8),
    ExpDisablePwm(u8),
    ExpConfigurePwm(ExpanderPwmConfig),
    // External ADC
    MuxSelect(u8),
    MuxRead,
    // DAC
    DacInput(u8, u16),
    DacUpdate(u8),
    // Delay
    DelayNs(u32),
}

pub type CallLog = RefCell<Vec<Call>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

pub struct MockHost<'l> {
    log: &'l CallLog,
    /// Input level bitmap
    pub levels: u32,
    /// Next ADC conversion result
    pub adc_raw: u16,
}

impl HostGpio for MockHost<'_> {
    fn set_mode(&mut self, gpio: u8, mode: PinMode) {
        self.log.borrow_mut().push(Call::SetMode(gpio, mode));
    }

    fn set_input_hysteresis(&mut self, gpio: u8, enabled: bool) {
        self.log.borrow_mut().push(Call::Hysteresis(gpio, enabled));
    }

    fn set_function(&mut self, gpio: u8, function: PinFunction) {
        self.log.borrow_mut().push(Call::Function(gpio, function));
    }

    fn read_level(&mut self, gpio: u8) -> bool {
        self.log.borrow_mut().push(Call::ReadLevel(gpio));
        self.levels & (1 << gpio) != 0
    }

    fn write_level(&mut self, gpio: u8, high: bool) {
        self.log.borrow_mut().push(Call::WriteLevel(gpio, high));
    }
}

impl HostAdc for MockHost<'_> {
    fn init(&mut self) {
        self.log.borrow_mut().push(Call::AdcInit);
    }

    fn init_gpio(&mut self, gpio: u8) {
        self.log.borrow_mut().push(Call::AdcInitGpio(gpio));
    }

    fn select_input(&mut self, channel: u8) {
        self.log.borrow_mut().push(Call::AdcSelect(channel));
    }

    fn read_raw(&mut self) -> u16 {
        self.log.borrow_mut().push(Call::AdcRead);
        self.adc_raw
    }

    fn set_temperature_sensor(&mut self, enabled: bool) {
        self.log.borrow_mut().push(Call::TempSensor(enabled));
    }
}

impl HostPwm for MockHost<'_> {
    fn sys_clock_hz(&self) -> u32 {
        CLOCK_HZ
    }

    fn configure_slice(&mut self, slice: u8, divider: ClockDivider, wrap: u16) {
        self.log
            .borrow_mut()
            .push(Call::ConfigureSlice(slice, divider, wrap));
    }

    fn set_level(&mut self, gpio: u8, level: u16) {
        self.log.borrow_mut().push(Call::SetLevel(gpio, level));
    }
}

pub struct MockExpander<'l> {
    log: &'l CallLog,
    /// Sensed input bitmap
    pub inputs: u32,
    /// Output register bitmap
    pub outputs: u32,
    /// Fail every transaction
    pub fail: bool,
}

impl MockExpander<'_> {
    fn record(&mut self, call: Call) -> Result<(), MockError> {
        if self.fail {
            return Err(MockError);
        }
        self.log.borrow_mut().push(call);
        Ok(())
    }
}

impl GpioExpander for MockExpander<'_> {
    type Error = MockError;

    fn set_pin_mode(
        &mut self,
        line: u8,
        direction: Direction,
        drive: DriveMode,
    ) -> Result<(), MockError> {
        self.record(Call::ExpMode(line, direction, drive))
    }

    fn read_pin(&mut self, line: u8) -> Result<bool, MockError> {
        self.record(Call::ExpRead(line))?;
        Ok(self.inputs & (1 << line) != 0)
    }

    fn read_output_level(&mut self, line: u8) -> Result<bool, MockError> {
        self.record(Call::ExpReadOutput(line))?;
        Ok(self.outputs & (1 << line) != 0)
    }

    fn write_pin(&mut self, line: u8, high: bool) -> Result<(), MockError> {
        self.record(Call::ExpWrite(line, high))?;
        if high {
            self.outputs |= 1 << line;
        } else {
            self.outputs &= !(1 << line);
        }
        Ok(())
    }

    fn enable_pwm(&mut self, line: u8) -> Result<(), MockError> {
        self.record(Call::ExpEnablePwm(line))
    }

    fn disable_pwm(&mut self, line: u8) -> Result<(), MockError> {
        self.record(Call::ExpDisablePwm(line))
    }

    fn configure_pwm(&mut self, config: &ExpanderPwmConfig) -> Result<(), MockError> {
        self.record(Call::ExpConfigurePwm(*config))
    }
}

pub struct MockAdc<'l> {
    log: &'l CallLog,
    /// Next conversion result
    pub raw: u32,
}

impl MultiChannelAdc for MockAdc<'_> {
    type Error = MockError;

    fn select_mux(&mut self, code: u8) -> Result<(), MockError> {
        self.log.borrow_mut().push(Call::MuxSelect(code));
        Ok(())
    }

    fn read_raw(&mut self) -> Result<u32, MockError> {
        self.log.borrow_mut().push(Call::MuxRead);
        Ok(self.raw)
    }
}

pub struct MockDac<'l> {
    log: &'l CallLog,
}

impl MultiChannelDac for MockDac<'_> {
    type Error = MockError;

    fn write_input_register(&mut self, channel: u8, code: u16) -> Result<(), MockError> {
        self.log.borrow_mut().push(Call::DacInput(channel, code));
        Ok(())
    }

    fn update_dac_register(&mut self, channel: u8) -> Result<(), MockError> {
        self.log.borrow_mut().push(Call::DacUpdate(channel));
        Ok(())
    }
}

pub struct MockDelay<'l> {
    log: &'l CallLog,
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Call::DelayNs(ns));
    }
}

pub type MockBoard<'a> = Board<
    'a,
    NoopRawMutex,
    MockHost<'a>,
    MockExpander<'a>,
    MockAdc<'a>,
    MockDac<'a>,
    MockDelay<'a>,
>;

pub fn peripherals(
    log: &CallLog,
) -> Peripherals<MockHost<'_>, MockExpander<'_>, MockAdc<'_>, MockDac<'_>, MockDelay<'_>> {
    Peripherals {
        host: MockHost {
            log,
            levels: 0,
            adc_raw: 0,
        },
        expander: MockExpander {
            log,
            inputs: 0,
            outputs: 0,
            fail: false,
        },
        adc: MockAdc { log, raw: 0 },
        dac: MockDac { log },
        delay: MockDelay { log },
    }
}

/// Neo board wired to mocks
pub fn neo_board<'a>(locks: &'a HardwareLocks<NoopRawMutex>, log: &'a CallLog) -> MockBoard<'a> {
    Board::new(locks, boards::neo::PINS, peripherals(log)).unwrap()
}

/// Take and clear the recorded calls
pub fn take(log: &CallLog) -> Vec<Call> {
    core::mem::take(&mut *log.borrow_mut())
}
