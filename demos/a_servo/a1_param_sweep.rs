//! Sweep the servo by writing the host-visible `angle` parameter, the same
//! path a ground station uses.

#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::convert::Infallible;

use embassy_executor::Spawner;
use embassy_rp::pwm::{Config, Pwm};
use embassy_time::Timer;
use servo_deck::Result;
use servo_deck::deck::DeckRegistry;
use servo_deck::param::ParamValue;
use servo_deck::pwm::rp::RpServoPwm;
use servo_deck::servo::ServoDeck;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    // Servo signal on GPIO 11 (odd pin => slice 5, output B).
    static DECK: StaticCell<ServoDeck<RpServoPwm<'static>>> = StaticCell::new();
    let pwm = RpServoPwm::new_output_b(Pwm::new_output_b(
        p.PWM_SLICE5,
        p.PIN_11,
        Config::default(),
    ));
    let deck: &'static ServoDeck<RpServoPwm<'static>> = DECK.init(ServoDeck::new(pwm));

    let mut registry: DeckRegistry<4> = DeckRegistry::new();
    registry.register(deck)?;
    registry.init_all();

    let group = deck.param_group()?;
    loop {
        for angle in [-90i8, -45, 0, 45, 90, 45, 0, -45] {
            group.write("angle", ParamValue::I8(angle))?;
            Timer::after_millis(600).await;
        }
    }
}
