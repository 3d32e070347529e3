//! Direct driver control: bring-up, a few center-relative moves, then
//! release the horn.

#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, future};

use embassy_executor::Spawner;
use embassy_rp::pwm::{Config, Pwm};
use embassy_time::Timer;
use servo_deck::Result;
use servo_deck::pwm::rp::RpServoPwm;
use servo_deck::servo::{ANGLE_CENTER_DEG, ANGLE_LIMIT_DEG, ServoDeck, saturate};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    // Servo signal on GPIO 11 (odd pin => slice 5, output B).
    let pwm = RpServoPwm::new_output_b(Pwm::new_output_b(
        p.PWM_SLICE5,
        p.PIN_11,
        Config::default(),
    ));
    let deck = ServoDeck::new(pwm);
    deck.init();

    // 30 degrees either side of center, then back to center.
    deck.set_angle(saturate(30, ANGLE_LIMIT_DEG));
    Timer::after_millis(800).await;
    deck.set_angle(saturate(-30, ANGLE_LIMIT_DEG));
    Timer::after_millis(800).await;
    deck.set_angle(ANGLE_CENTER_DEG);
    Timer::after_millis(800).await;

    // Drop the pulse so the horn can be moved by hand.
    deck.relax();

    future::pending().await
}
