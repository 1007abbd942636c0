//! Simple rotary example
//!
//! Demonstrates basic usage of the rotary-driver crate on the Raspberry Pi
//! Pico 2. Polls a GPIO rotary encoder once per millisecond, keeps a
//! position counter, and logs rotation and button events via defmt.
//!
//! # Wiring
//!
//! | Signal   | Pico 2 Pin | Notes                                |
//! |----------|------------|--------------------------------------|
//! | ENC A    | GP2        | Common to GND, pull-up enabled       |
//! | ENC B    | GP3        | Common to GND, pull-up enabled       |
//! | ENC SW   | GP4        | To GND when pressed, pull-up enabled |

#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Flex, Pull};
use embassy_time::{Duration, Timer};
use embedded_hal::digital::{ErrorType, InputPin};
use {defmt_rtt as _, panic_probe as _};

use rotary_driver::{Direction, EmbassyClock, EncoderInput, PinMode, PressType, RotaryEncoder};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

/// Hold time that turns a press into a long press.
const LONG_PRESS: Duration = Duration::from_millis(800);

/// RP2350 GPIO usable as an encoder input.
///
/// `Flex` lets the pull resistor follow the driver's trigger level.
struct EncoderPin(Flex<'static>);

impl ErrorType for EncoderPin {
    type Error = Infallible;
}

impl InputPin for EncoderPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.is_high())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.is_low())
    }
}

impl EncoderInput for EncoderPin {
    fn configure(&mut self, mode: PinMode) -> Result<(), Infallible> {
        self.0.set_as_input();
        self.0.set_pull(match mode {
            PinMode::Input => Pull::None,
            PinMode::InputPullUp => Pull::Up,
        });
        Ok(())
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- Encoder pins (GP2 = A, GP3 = B, GP4 = switch) ---
    let pin_a = EncoderPin(Flex::new(p.PIN_2));
    let pin_b = EncoderPin(Flex::new(p.PIN_3));
    let pin_s = EncoderPin(Flex::new(p.PIN_4));

    // --- Encoder (default windows: 2ms rotation, 200ms button, 100ms hold) ---
    let mut encoder = RotaryEncoder::new(pin_a, pin_b, pin_s, EmbassyClock)
        .expect("Failed to configure encoder pins");

    info!("Rotary example started, turn and press the knob");

    let mut position: i32 = 0;

    // Main loop: poll, log, sleep 1ms, repeat.
    loop {
        match encoder.poll_rotation() {
            Ok(Direction::Clockwise) => {
                position = position.wrapping_add(1);
                info!("Clockwise, position {}", position);
            }
            Ok(Direction::CounterClockwise) => {
                position = position.wrapping_sub(1);
                info!("Counter-clockwise, position {}", position);
            }
            Ok(Direction::None) => {}
            Err(_) => warn!("Rotation read failed"),
        }

        match encoder.poll_press_type(LONG_PRESS) {
            Ok(PressType::ReleasedShort) => info!("Short press"),
            Ok(PressType::HeldLong) => {
                info!("Long press, resetting position");
                position = 0;
            }
            Ok(PressType::None) => {}
            Err(_) => warn!("Button read failed"),
        }

        Timer::after_millis(1).await;
    }
}
