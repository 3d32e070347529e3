//! RP2040/RP235x implementation of the PWM capability on one slice channel.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config, Pwm};
use embedded_hal::pwm::{ErrorType, SetDutyCycle};

use super::PwmOutput;

/// Which output of the slice the servo is wired to.
#[derive(Debug, Clone, Copy)]
enum OutputChannel {
    A,
    B,
}

/// A servo PWM channel on an RP2040/RP235x PWM slice.
///
/// Build the underlying [`Pwm`] with `Pwm::new_output_a`/`new_output_b` on
/// the pin's slice (`slice = pin / 2`, even pins are output A, odd pins
/// output B), then wrap it here. The wrapper keeps its own [`Config`] and
/// reapplies it on every write so the divider is never reset to default.
pub struct RpServoPwm<'d> {
    pwm: Pwm<'d>,
    cfg: Config,
    channel: OutputChannel,
}

impl<'d> RpServoPwm<'d> {
    /// Wrap a slice driven on its A output (even GPIO).
    #[must_use]
    pub fn new_output_a(pwm: Pwm<'d>) -> Self {
        Self {
            pwm,
            cfg: Config::default(),
            channel: OutputChannel::A,
        }
    }

    /// Wrap a slice driven on its B output (odd GPIO).
    #[must_use]
    pub fn new_output_b(pwm: Pwm<'d>) -> Self {
        Self {
            pwm,
            cfg: Config::default(),
            channel: OutputChannel::B,
        }
    }
}

impl PwmOutput for RpServoPwm<'_> {
    fn configure(&mut self, period_ticks: u16, tick_hz: u32) {
        // clk_sys is a whole multiple of the tick rate on the stock clock
        // tree, so an integer divider lands exactly on the tick.
        let clk = clk_sys_freq();
        let div = (clk / tick_hz).clamp(1, 255) as u8;

        self.cfg.top = period_ticks.saturating_sub(1);
        self.cfg.phase_correct = false; // edge-aligned => exact tick steps
        self.cfg.divider = div.into();
        match self.channel {
            OutputChannel::A => self.cfg.compare_a = 0,
            OutputChannel::B => self.cfg.compare_b = 0,
        }
        self.cfg.enable = false;
        self.pwm.set_config(&self.cfg);

        info!("servo pwm clk={}Hz div={} top={}", clk, div, self.cfg.top);
    }

    fn enable(&mut self) {
        self.cfg.enable = true;
        self.pwm.set_config(&self.cfg);
    }

    fn disable(&mut self) {
        self.cfg.enable = false;
        self.pwm.set_config(&self.cfg);
    }

    fn set_compare(&mut self, ticks: u16) {
        match self.channel {
            OutputChannel::A => self.cfg.compare_a = ticks,
            OutputChannel::B => self.cfg.compare_b = ticks,
        }
        self.pwm.set_config(&self.cfg);
    }
}

impl ErrorType for RpServoPwm<'_> {
    type Error = core::convert::Infallible;
}

impl SetDutyCycle for RpServoPwm<'_> {
    fn max_duty_cycle(&self) -> u16 {
        self.cfg.top
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        PwmOutput::set_compare(self, duty);
        Ok(())
    }
}
