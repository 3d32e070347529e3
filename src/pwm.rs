//! PWM bring-up and duty writes for a single servo output channel.
//!
//! The hardware surface is the [`PwmOutput`] capability: a write-only,
//! fire-and-forget set of register operations with no read-back and no
//! failure returns. [`bring_up`] runs the one-time configuration sequence;
//! the angle controller in [`crate::servo`] guards that it runs exactly
//! once.

#[cfg(not(feature = "host"))]
pub mod rp;
#[cfg(feature = "host")]
pub mod sim;

/// Ticks per PWM frame: 20 000 ticks of 1 µs make the 20 ms servo frame.
pub const PWM_PERIOD_TICKS: u16 = 20_000;

/// Timer tick rate the capability implementations must configure.
pub const PWM_TICK_HZ: u32 = 1_000_000;

/// Servo PWM frame rate.
pub const PWM_FREQUENCY_HZ: u32 = 50;

/// One PWM output channel, as the servo driver sees it.
///
/// Implemented per hardware family ([`rp::RpServoPwm`]) plus a recording
/// simulation for host tests ([`sim::SimPwm`]). Every operation is a bounded
/// sequence of register writes: nothing blocks, suspends, or fails.
pub trait PwmOutput {
    /// One-time channel setup: clock enable, pin function, timer base for
    /// `period_ticks` ticks at `tick_hz`, and the output-compare channel in
    /// PWM mode with preload on and compare zero. The output stays disabled.
    ///
    /// Families where a step is implicit in HAL construction fold it into
    /// this call. Not idempotent on its own; the caller runs it exactly
    /// once.
    fn configure(&mut self, period_ticks: u16, tick_hz: u32);

    /// Ungate the PWM output and start the counter.
    fn enable(&mut self);

    /// Gate the PWM output, releasing the servo to move freely.
    fn disable(&mut self);

    /// Write a raw compare value, in ticks.
    ///
    /// No bounds check: a value above the configured period makes the
    /// hardware clip or pin the output, an accepted hardware edge case
    /// rather than a software error.
    fn set_compare(&mut self, ticks: u16);
}

/// Run the one-time bring-up sequence on a freshly constructed channel.
///
/// Compare starts at zero, so no pulse is emitted until the first angle
/// write lands.
pub fn bring_up<P: PwmOutput>(out: &mut P) {
    out.configure(PWM_PERIOD_TICKS, PWM_TICK_HZ);
    out.set_compare(0);
    out.enable();
}
