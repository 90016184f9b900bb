//! Expander PWM routing
//!
//! Each expander line can only be driven by one of the four PWM channels,
//! fixed by the chip. Channels are programmed with a constant period so
//! the pulse width is the 8-bit duty directly.

use neopin_hal::expander::{ExpanderPwmConfig, PwmChannel, PwmClockSource};

/// Number of expander lines
pub const LINE_COUNT: u8 = 20;

/// Clock source used for every expander PWM channel
pub const PWM_CLOCK: PwmClockSource = PwmClockSource::Hz367_6;

/// Expander PWM clock divider
pub const PWM_DIVIDER: u8 = 1;

/// Expander PWM period (full 8-bit duty range)
pub const PWM_PERIOD: u8 = 0xFF;

/// PWM channel wired to each line (from the expander datasheet)
const LINE_CHANNEL: [PwmChannel; LINE_COUNT as usize] = [
    PwmChannel::Pwm3, // 0
    PwmChannel::Pwm1, // 1
    PwmChannel::Pwm3, // 2
    PwmChannel::Pwm1, // 3
    PwmChannel::Pwm3, // 4
    PwmChannel::Pwm1, // 5
    PwmChannel::Pwm3, // 6
    PwmChannel::Pwm1, // 7
    PwmChannel::Pwm2, // 8
    PwmChannel::Pwm0, // 9
    PwmChannel::Pwm2, // 10
    PwmChannel::Pwm0, // 11
    PwmChannel::Pwm2, // 12
    PwmChannel::Pwm0, // 13
    PwmChannel::Pwm2, // 14
    PwmChannel::Pwm0, // 15
    PwmChannel::Pwm2, // 16
    PwmChannel::Pwm0, // 17
    PwmChannel::Pwm0, // 18
    PwmChannel::Pwm3, // 19
];

/// PWM channel driving an expander line
pub fn expander_pwm_channel(line: u8) -> Option<PwmChannel> {
    LINE_CHANNEL.get(line as usize).copied()
}

/// Channel configuration producing `pulse_width` on an expander line
pub fn expander_pwm_config(line: u8, pulse_width: u8) -> Option<ExpanderPwmConfig> {
    expander_pwm_channel(line).map(|channel| ExpanderPwmConfig {
        channel,
        clock: PWM_CLOCK,
        divider: PWM_DIVIDER,
        period: PWM_PERIOD,
        pulse_width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_on(channel: PwmChannel) -> usize {
        (0..LINE_COUNT)
            .filter(|line| expander_pwm_channel(*line) == Some(channel))
            .count()
    }

    #[test]
    fn test_known_lines() {
        assert_eq!(expander_pwm_channel(0), Some(PwmChannel::Pwm3));
        assert_eq!(expander_pwm_channel(19), Some(PwmChannel::Pwm3));
        assert_eq!(expander_pwm_channel(7), Some(PwmChannel::Pwm1));
        assert_eq!(expander_pwm_channel(16), Some(PwmChannel::Pwm2));
        assert_eq!(expander_pwm_channel(18), Some(PwmChannel::Pwm0));
    }

    #[test]
    fn test_every_line_routed() {
        for line in 0..LINE_COUNT {
            assert!(expander_pwm_channel(line).is_some());
        }
        assert_eq!(
            lines_on(PwmChannel::Pwm0)
                + lines_on(PwmChannel::Pwm1)
                + lines_on(PwmChannel::Pwm2)
                + lines_on(PwmChannel::Pwm3),
            LINE_COUNT as usize
        );
        assert_eq!(lines_on(PwmChannel::Pwm0), 6);
        assert_eq!(lines_on(PwmChannel::Pwm1), 4);
        assert_eq!(lines_on(PwmChannel::Pwm2), 5);
        assert_eq!(lines_on(PwmChannel::Pwm3), 5);
    }

    #[test]
    fn test_unknown_line() {
        assert_eq!(expander_pwm_channel(LINE_COUNT), None);
        assert_eq!(expander_pwm_config(200, 10), None);
    }

    #[test]
    fn test_config_fields() {
        let config = expander_pwm_config(2, 128).unwrap();
        assert_eq!(config.channel, PwmChannel::Pwm3);
        assert_eq!(config.clock, PWM_CLOCK);
        assert_eq!(config.divider, 1);
        assert_eq!(config.period, 255);
        assert_eq!(config.pulse_width, 128);
    }
}
