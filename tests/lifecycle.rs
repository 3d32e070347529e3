#![allow(missing_docs)]
//! Host-level tests for the one-shot bring-up and the hardware write path.

use servo_deck::Error;
use servo_deck::deck::DeckRegistry;
use servo_deck::pwm::sim::{SimOp, SimPwm};
use servo_deck::pwm::{PWM_PERIOD_TICKS, PWM_TICK_HZ};
use servo_deck::servo::ServoDeck;

/// Exactly one configuration sequence and one center move.
const BRING_UP: [SimOp; 4] = [
    SimOp::Configure {
        period_ticks: PWM_PERIOD_TICKS,
        tick_hz: PWM_TICK_HZ,
    },
    SimOp::SetCompare(0),
    SimOp::Enable,
    SimOp::SetCompare(1500),
];

#[test]
fn init_runs_the_bring_up_sequence_and_centers() {
    let pwm = SimPwm::new();
    let probe = pwm.probe();
    let deck = ServoDeck::new(pwm);

    assert!(!deck.is_ready());
    deck.init();
    assert!(deck.is_ready());
    assert_eq!(probe.ops(), BRING_UP);
    assert!(probe.enabled());
}

#[test]
fn second_init_is_a_no_op() {
    let pwm = SimPwm::new();
    let probe = pwm.probe();
    let deck = ServoDeck::new(pwm);

    deck.init();
    deck.init();
    assert_eq!(probe.ops(), BRING_UP);
}

#[test]
fn angle_updates_before_init_are_dropped() {
    let pwm = SimPwm::new();
    let probe = pwm.probe();
    let deck = ServoDeck::new(pwm);

    deck.set_angle(45);
    deck.relax();
    deck.hold();
    assert!(probe.ops().is_empty());
    assert!(!deck.is_ready());
}

#[test]
fn angle_updates_write_one_compare_value() {
    let pwm = SimPwm::new();
    let probe = pwm.probe();
    let deck = ServoDeck::new(pwm);

    deck.init();
    deck.set_angle(45); // 1.0 ms pulse
    assert_eq!(probe.compare(), Some(1000));
    assert_eq!(probe.ops().len(), BRING_UP.len() + 1);
}

#[test]
fn relax_and_hold_gate_the_output() {
    let pwm = SimPwm::new();
    let probe = pwm.probe();
    let deck = ServoDeck::new(pwm);

    deck.init();
    assert!(probe.enabled());
    deck.relax();
    assert!(!probe.enabled());
    deck.hold();
    assert!(probe.enabled());
}

#[test]
fn registry_initializes_registered_decks() {
    let pwm = SimPwm::new();
    let probe = pwm.probe();
    let deck: &'static ServoDeck<SimPwm> = Box::leak(Box::new(ServoDeck::new(pwm)));

    let mut registry: DeckRegistry<2> = DeckRegistry::new();
    registry.register(deck).unwrap();
    assert_eq!(registry.len(), 1);
    assert!(registry.find("servo").is_some());
    assert_eq!(
        registry.register(deck),
        Err(Error::DeckAlreadyRegistered { name: "servo" })
    );

    registry.init_all();
    assert_eq!(probe.ops(), BRING_UP);
    assert!(registry.test_all());

    let info = registry.find("servo").map(|driver| *driver.info());
    assert_eq!(info.map(|info| (info.used_periph, info.used_gpio)), Some((0, 0)));
}
