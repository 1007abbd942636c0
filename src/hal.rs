//! Platform seams consumed by the driver.
//!
//! The driver never touches hardware directly. It needs exactly two things
//! from the platform: pins that can be configured and read, and a monotonic
//! clock.

use embassy_time::Instant;
use embedded_hal::digital::{ErrorType, InputPin};

use crate::config::PinMode;

/// A GPIO input that can be switched between [`PinMode`]s.
///
/// Reading goes through [`InputPin`]; this trait only adds the mode switch
/// that [`RotaryEncoder`](crate::RotaryEncoder) issues at construction and on
/// every trigger-level change.
pub trait EncoderInput: InputPin {
    /// Put the pin into `mode`.
    fn configure(&mut self, mode: PinMode) -> Result<(), Self::Error>;
}

/// Monotonic millisecond clock.
///
/// Successive calls must never go backwards during the lifetime of one
/// encoder.
pub trait Clock {
    /// Current time.
    fn now(&self) -> Instant;
}

/// [`Clock`] backed by the Embassy time driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Adapter for pins whose pull resistor is fixed when the HAL creates them.
///
/// Many HALs take the pull setting as a constructor argument (e.g.
/// `Input::new(pin, Pull::Up)`). Wrapping such a pin makes it usable with
/// the driver; [`EncoderInput::configure`] becomes a no-op, so the caller is
/// responsible for choosing the pull that matches the trigger level.
#[derive(Debug)]
pub struct Preconfigured<P>(pub P);

impl<P> Preconfigured<P> {
    /// Return the wrapped pin.
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P: ErrorType> ErrorType for Preconfigured<P> {
    type Error = P::Error;
}

impl<P: InputPin> InputPin for Preconfigured<P> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.0.is_high()
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.0.is_low()
    }
}

impl<P: InputPin> EncoderInput for Preconfigured<P> {
    fn configure(&mut self, _mode: PinMode) -> Result<(), Self::Error> {
        Ok(())
    }
}
