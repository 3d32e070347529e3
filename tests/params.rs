#![allow(missing_docs)]
//! Host-level tests for the parameter group binding.

use servo_deck::Error;
use servo_deck::param::{Access, ParamCell, ParamEntry, ParamGroup, ParamValue};
use servo_deck::pwm::sim::SimPwm;
use servo_deck::servo::ServoDeck;

#[test]
fn initialized_flag_reflects_the_lifecycle() {
    let deck = ServoDeck::new(SimPwm::new());
    let group = deck.param_group().unwrap();

    assert_eq!(group.name(), "servo");
    assert_eq!(group.len(), 2);
    assert_eq!(group.read("initialized"), Ok(ParamValue::U8(0)));
    deck.init();
    assert_eq!(group.read("initialized"), Ok(ParamValue::U8(1)));
}

#[test]
fn angle_write_saturates_and_drives_the_servo() {
    let pwm = SimPwm::new();
    let probe = pwm.probe();
    let deck = ServoDeck::new(pwm);
    deck.init();
    let group = deck.param_group().unwrap();

    group.write("angle", ParamValue::I8(30)).unwrap();
    assert_eq!(deck.commanded_angle(), 30);
    assert_eq!(probe.compare(), Some(1833)); // 1.8333 ms

    group.write("angle", ParamValue::I8(i8::MAX)).unwrap();
    assert_eq!(probe.compare(), Some(2500));

    group.write("angle", ParamValue::I8(i8::MIN)).unwrap();
    assert_eq!(probe.compare(), Some(500));

    assert_eq!(group.read("angle"), Ok(ParamValue::I8(i8::MIN)));
}

#[test]
fn angle_write_before_init_is_stored_but_not_applied() {
    let pwm = SimPwm::new();
    let probe = pwm.probe();
    let deck = ServoDeck::new(pwm);
    let group = deck.param_group().unwrap();

    group.write("angle", ParamValue::I8(30)).unwrap();
    assert_eq!(deck.commanded_angle(), 30);
    assert!(probe.ops().is_empty());

    // Bring-up still centers; the stored command applies on the next change.
    deck.init();
    assert_eq!(probe.compare(), Some(1500));
}

#[test]
fn host_side_misuse_is_rejected() {
    let deck = ServoDeck::new(SimPwm::new());
    let group = deck.param_group().unwrap();

    assert_eq!(
        group.write("initialized", ParamValue::U8(1)),
        Err(Error::ParamReadOnly)
    );
    assert_eq!(
        group.write("angle", ParamValue::U8(3)),
        Err(Error::ParamTypeMismatch)
    );
    assert_eq!(group.read("gain"), Err(Error::UnknownParam));
    assert_eq!(
        group.write("gain", ParamValue::U8(0)),
        Err(Error::UnknownParam)
    );
}

#[test]
fn groups_reject_duplicates_and_overflow() {
    let flag = ParamCell::new(0u8);
    let other = ParamCell::new(0u8);
    let mut group: ParamGroup<'_, 1> = ParamGroup::new("test");

    group
        .add(ParamEntry::u8("flag", Access::ReadWrite, &flag))
        .unwrap();
    assert_eq!(
        group.add(ParamEntry::u8("flag", Access::ReadWrite, &flag)),
        Err(Error::ParamAlreadyDeclared { name: "flag" })
    );
    assert_eq!(
        group.add(ParamEntry::u8("other", Access::ReadWrite, &other)),
        Err(Error::ParamGroupFull)
    );
    assert_eq!(group.len(), 1);
}

#[test]
fn wider_cells_round_trip() {
    let period = ParamCell::new(20_000u16);
    let mut group: ParamGroup<'_, 1> = ParamGroup::new("pwm");
    group
        .add(ParamEntry::u16("period", Access::ReadWrite, &period))
        .unwrap();

    assert_eq!(group.read("period"), Ok(ParamValue::U16(20_000)));
    group.write("period", ParamValue::U16(40_000)).unwrap();
    assert_eq!(period.get(), 40_000);
}
