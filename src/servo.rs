//! The servo expansion deck: center-relative angle control over one PWM
//! channel.
//!
//! [`ServoDeck`] owns the one-shot bring-up latch, the saturation and
//! angle-to-duty conversion, and the host-facing parameter bindings. The
//! hardware behind it is any [`PwmOutput`], so the controller's math runs
//! unchanged against the simulation in host tests.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use portable_atomic::{AtomicU8, Ordering};

use crate::Result;
use crate::deck::{DeckDriver, DeckInfo};
use crate::param::{Access, ParamCell, ParamEntry, ParamGroup, ParamHandler};
use crate::pwm::{self, PwmOutput};

/// Widest usable offset from center, in degrees either way.
pub const ANGLE_LIMIT_DEG: i8 = 90;

/// Absolute angle of the center position. Equal to the limit, because the
/// usable range is symmetric around center.
pub const ANGLE_CENTER_DEG: u8 = 90;

/// Pulse width commanding 0 degrees.
const PULSE_MIN_MS: f32 = 0.5;

/// Pulse width commanding 180 degrees.
const PULSE_MAX_MS: f32 = 2.5;

// Lifecycle latch values.
const UNINITIALIZED: u8 = 0;
const BRING_UP: u8 = 1;
const READY: u8 = 2;

/// Descriptor the servo deck registers under. The deck claims no shared
/// peripherals or pins, so both masks stay zero.
static SERVO_DECK_INFO: DeckInfo = DeckInfo {
    vid: 0,
    pid: 0,
    name: "servo",
    used_periph: 0,
    used_gpio: 0,
};

/// Translate a signed, center-relative angle into the absolute `[0, 2*limit]`
/// range the PWM layer expects.
///
/// Zero maps to center (`limit`); anything past the limit pins to the nearer
/// end stop.
#[must_use]
pub fn saturate(angle: i8, limit: i8) -> u8 {
    let limit = i16::from(limit);
    let clamped = i16::from(angle).clamp(-limit, limit);
    (clamped + limit) as u8
}

/// Compare-register value for an absolute angle in `[0, 180]`.
///
/// Linear between the 0.5 ms and 2.5 ms end stops; with the 1 µs tick the
/// result is the pulse width in microseconds.
#[must_use]
pub fn duty_for_angle(degrees: u8) -> u16 {
    let pulse_ms = f32::from(degrees) / 180.0 * (PULSE_MAX_MS - PULSE_MIN_MS) + PULSE_MIN_MS;
    let pulse_s = pulse_ms / 1000.0;
    let duty = pulse_s * f32::from(pwm::PWM_PERIOD_TICKS) * pwm::PWM_FREQUENCY_HZ as f32;
    (duty + 0.5) as u16
}

/// A positional servo on an expansion deck header.
///
/// Entry points take `&self` and every operation is a short critical
/// section, so one instance can sit in a `static` and be shared between the
/// deck registry, the parameter transport, and application code.
///
/// # Examples
///
/// ```rust
/// use servo_deck::pwm::PwmOutput;
/// use servo_deck::servo::{ANGLE_LIMIT_DEG, ServoDeck, saturate};
///
/// struct NullPwm;
/// impl PwmOutput for NullPwm {
///     fn configure(&mut self, _period_ticks: u16, _tick_hz: u32) {}
///     fn enable(&mut self) {}
///     fn disable(&mut self) {}
///     fn set_compare(&mut self, _ticks: u16) {}
/// }
///
/// let deck = ServoDeck::new(NullPwm);
/// deck.init(); // one-time bring-up, moves the horn to center
/// deck.set_angle(saturate(30, ANGLE_LIMIT_DEG)); // 30 degrees right of center
/// deck.relax(); // drop the pulse so the horn moves freely
/// ```
///
/// On hardware, `NullPwm` is an [`RpServoPwm`](crate::pwm::rp::RpServoPwm)
/// wrapping the pin's PWM slice, and angle updates normally arrive through
/// the `angle` parameter of [`param_group`](Self::param_group) rather than
/// direct calls.
pub struct ServoDeck<P: PwmOutput> {
    state: AtomicU8,
    pwm: Mutex<CriticalSectionRawMutex, RefCell<P>>,
    angle: ParamCell<i8>,
    initialized: ParamCell<u8>,
}

impl<P: PwmOutput> ServoDeck<P> {
    /// Wrap a constructed-but-idle PWM channel. No hardware is touched until
    /// [`init`](Self::init).
    pub const fn new(pwm: P) -> Self {
        Self {
            state: AtomicU8::new(UNINITIALIZED),
            pwm: Mutex::new(RefCell::new(pwm)),
            angle: ParamCell::new(0),
            initialized: ParamCell::new(0),
        }
    }

    /// One-time bring-up: configure the PWM channel, move the horn to
    /// center, mark the deck ready.
    ///
    /// Exactly one caller wins the latch and runs the hardware sequence;
    /// every other call, including a concurrent first call, returns
    /// immediately with no side effect.
    pub fn init(&self) {
        if self
            .state
            .compare_exchange(UNINITIALIZED, BRING_UP, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }
        self.with_pwm(pwm::bring_up);
        info!("servo deck init [OK]");
        self.write_angle(ANGLE_CENTER_DEG);
        self.initialized.store(1);
        self.state.store(READY, Ordering::Release);
    }

    /// `true` once [`init`](Self::init) has completed.
    pub fn is_ready(&self) -> bool {
        self.state.load(Ordering::Acquire) == READY
    }

    /// Move to an absolute angle in `[0, 180]`.
    ///
    /// Callers pre-saturate: the value is not range-checked here, and an
    /// out-of-domain angle produces an out-of-range pulse. Before
    /// [`init`](Self::init) completes this is a no-op.
    pub fn set_angle(&self, degrees: u8) {
        if !self.is_ready() {
            warn!("servo not initialized, dropping angle {}", degrees);
            return;
        }
        self.write_angle(degrees);
    }

    /// Last host-commanded relative angle.
    pub fn commanded_angle(&self) -> i8 {
        self.angle.get()
    }

    /// Recompute the saturated angle from the commanded value and apply it.
    ///
    /// Sole production trigger for hardware updates after init; wired as the
    /// change handler of the `angle` parameter.
    pub fn on_angle_changed(&self) {
        self.set_angle(saturate(self.angle.get(), ANGLE_LIMIT_DEG));
    }

    /// Stop the control pulse so the servo can move freely. No-op before
    /// init.
    pub fn relax(&self) {
        if !self.is_ready() {
            return;
        }
        self.with_pwm(|pwm| pwm.disable());
    }

    /// Resume the control pulse at the last written position. No-op before
    /// init.
    pub fn hold(&self) {
        if !self.is_ready() {
            return;
        }
        self.with_pwm(|pwm| pwm.enable());
    }

    fn write_angle(&self, degrees: u8) {
        let duty = duty_for_angle(degrees);
        self.with_pwm(|pwm| pwm.set_compare(duty));
        info!("servo angle {} -> compare {}", degrees, duty);
    }

    fn with_pwm(&self, f: impl FnOnce(&mut P)) {
        self.pwm.lock(|pwm| {
            let mut pwm = pwm.borrow_mut();
            f(&mut *pwm);
        });
    }
}

impl<P: PwmOutput + Send> ServoDeck<P> {
    /// Build the deck's host-facing parameter group: a read-only
    /// `initialized` flag and a read-write `angle` wired to
    /// [`on_angle_changed`](Self::on_angle_changed).
    ///
    /// # Errors
    ///
    /// The fixed two-entry layout always fits; the `Result` is the
    /// group-building contract.
    pub fn param_group(&self) -> Result<ParamGroup<'_, 2>> {
        let mut group = ParamGroup::new("servo");
        group.add(ParamEntry::u8(
            "initialized",
            Access::ReadOnly,
            &self.initialized,
        ))?;
        group.add(ParamEntry::i8("angle", Access::ReadWrite, &self.angle).with_handler(self))?;
        Ok(group)
    }
}

impl<P: PwmOutput + Send> ParamHandler for ServoDeck<P> {
    fn on_update(&self) {
        self.on_angle_changed();
    }
}

impl<P: PwmOutput + Send> DeckDriver for ServoDeck<P> {
    fn info(&self) -> &DeckInfo {
        &SERVO_DECK_INFO
    }

    fn init(&self) {
        ServoDeck::init(self);
    }
}
