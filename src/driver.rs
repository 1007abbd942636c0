//! Low-level pin access.
//!
//! Owns the three encoder pins, applies the pin mode that matches the
//! trigger level, and turns raw levels into "active" booleans.
//!
//! This module is crate-private; consumers interact with [`RotaryEncoder`]
//! in `rotary.rs` instead.
//!
//! [`RotaryEncoder`]: crate::RotaryEncoder

use embedded_hal::digital::InputPin;

use crate::config::TriggerLevel;
use crate::hal::EncoderInput;

/// Low-level pin driver.
///
/// Holds pin A, pin B and the switch pin for exclusive access.
pub(crate) struct InputDriver<A, B, S> {
    pin_a: A,
    pin_b: B,
    pin_s: S,
    trigger: TriggerLevel,
}

impl<A, B, S, E> InputDriver<A, B, S>
where
    A: EncoderInput<Error = E>,
    B: EncoderInput<Error = E>,
    S: EncoderInput<Error = E>,
{
    /// Take ownership of the pins and configure them for `trigger`.
    pub fn new(pin_a: A, pin_b: B, pin_s: S, trigger: TriggerLevel) -> Result<Self, E> {
        let mut driver = Self {
            pin_a,
            pin_b,
            pin_s,
            trigger,
        };
        driver.configure(trigger)?;
        Ok(driver)
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Apply the pin mode for `trigger` to all three pins.
    fn configure(&mut self, trigger: TriggerLevel) -> Result<(), E> {
        let mode = trigger.pin_mode();
        self.pin_a.configure(mode)?;
        self.pin_b.configure(mode)?;
        self.pin_s.configure(mode)?;
        Ok(())
    }

    /// Reconfigure the pins, then switch trigger level.
    ///
    /// The level only changes once every pin accepted the new mode.
    pub fn set_trigger(&mut self, trigger: TriggerLevel) -> Result<(), E> {
        self.configure(trigger)?;
        self.trigger = trigger;
        Ok(())
    }

    pub fn trigger(&self) -> TriggerLevel {
        self.trigger
    }

    // -----------------------------------------------------------------------
    // Sampling
    // -----------------------------------------------------------------------

    /// Active state of pins A and B, in that order.
    pub fn read_rotation(&mut self) -> Result<(bool, bool), E> {
        let a = is_active(&mut self.pin_a, self.trigger)?;
        let b = is_active(&mut self.pin_b, self.trigger)?;
        Ok((a, b))
    }

    /// Active state of the switch pin.
    pub fn read_button(&mut self) -> Result<bool, E> {
        is_active(&mut self.pin_s, self.trigger)
    }

    pub fn release(self) -> (A, B, S) {
        (self.pin_a, self.pin_b, self.pin_s)
    }
}

fn is_active<P: InputPin>(pin: &mut P, trigger: TriggerLevel) -> Result<bool, P::Error> {
    match trigger {
        TriggerLevel::ActiveHigh => pin.is_high(),
        TriggerLevel::ActiveLow => pin.is_low(),
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
