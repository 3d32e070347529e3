//! Simulated PWM output for host-side tests.
//!
//! Records every capability operation so tests can assert on the exact
//! hardware sequence the controller produced; the production interface
//! itself stays write-only.

use std::sync::{Arc, Mutex};

use super::PwmOutput;

/// One recorded capability operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimOp {
    /// Channel setup call.
    Configure {
        /// Ticks per PWM frame.
        period_ticks: u16,
        /// Timer tick rate.
        tick_hz: u32,
    },
    /// Output enabled.
    Enable,
    /// Output disabled.
    Disable,
    /// Compare register write.
    SetCompare(u16),
}

/// Simulated PWM channel; every operation lands in a shared log.
#[derive(Debug, Default)]
pub struct SimPwm {
    log: Arc<Mutex<Vec<SimOp>>>,
}

impl SimPwm {
    /// An idle simulated channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A probe sharing this channel's operation log; take it before handing
    /// the channel to the controller.
    #[must_use]
    pub fn probe(&self) -> SimProbe {
        SimProbe {
            log: Arc::clone(&self.log),
        }
    }

    fn record(&self, op: SimOp) {
        self.log.lock().expect("sim log poisoned").push(op);
    }
}

impl PwmOutput for SimPwm {
    fn configure(&mut self, period_ticks: u16, tick_hz: u32) {
        self.record(SimOp::Configure {
            period_ticks,
            tick_hz,
        });
    }

    fn enable(&mut self) {
        self.record(SimOp::Enable);
    }

    fn disable(&mut self) {
        self.record(SimOp::Disable);
    }

    fn set_compare(&mut self, ticks: u16) {
        self.record(SimOp::SetCompare(ticks));
    }
}

/// Read-side view of a [`SimPwm`] operation log.
#[derive(Debug, Clone)]
pub struct SimProbe {
    log: Arc<Mutex<Vec<SimOp>>>,
}

impl SimProbe {
    /// Everything recorded so far, in order.
    #[must_use]
    pub fn ops(&self) -> Vec<SimOp> {
        self.log.lock().expect("sim log poisoned").clone()
    }

    /// The most recent compare write, if any.
    #[must_use]
    pub fn compare(&self) -> Option<u16> {
        self.ops().iter().rev().find_map(|op| match op {
            SimOp::SetCompare(ticks) => Some(*ticks),
            _ => None,
        })
    }

    /// Whether the output is currently enabled.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.ops()
            .iter()
            .rev()
            .find_map(|op| match op {
                SimOp::Enable => Some(true),
                SimOp::Disable => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}
