//! High-level interface for a GPIO rotary encoder with pushbutton.
//!
//! [`RotaryEncoder`] wraps the low-level pin driver and the two state
//! machines behind one poll-driven API. Each call reads the clock once,
//! samples only the pins it needs (and only when their debounce gate is
//! open), and returns immediately.

use embassy_time::Duration;

use crate::button::{ButtonTracker, PressType};
use crate::config::{RotaryConfig, TriggerLevel};
use crate::driver::InputDriver;
use crate::error::RotaryError;
use crate::hal::{Clock, EncoderInput};
use crate::quadrature::{Direction, QuadratureDecoder};

/// Debounced rotary encoder: quadrature pins A/B plus the switch pin S.
///
/// Intended to be polled from a control loop at least as often as the
/// shortest configured debounce window.
///
/// # Example
///
/// ```ignore
/// use embassy_time::Duration;
/// use rotary_driver::{Direction, EmbassyClock, PressType, RotaryEncoder};
///
/// // `a`, `b` and `s` implement `EncoderInput`
/// let mut encoder = RotaryEncoder::new(a, b, s, EmbassyClock)?;
///
/// loop {
///     match encoder.poll_rotation()? {
///         Direction::Clockwise => volume += 1,
///         Direction::CounterClockwise => volume -= 1,
///         Direction::None => {}
///     }
///     if encoder.poll_press_type(Duration::from_millis(800))? == PressType::HeldLong {
///         mute();
///     }
/// }
/// ```
pub struct RotaryEncoder<A, B, S, C> {
    driver: InputDriver<A, B, S>,
    clock: C,
    decoder: QuadratureDecoder,
    button: ButtonTracker,
}

impl<A, B, S, C, E> RotaryEncoder<A, B, S, C>
where
    A: EncoderInput<Error = E>,
    B: EncoderInput<Error = E>,
    S: EncoderInput<Error = E>,
    C: Clock,
{
    /// Create an encoder with the default [`RotaryConfig`].
    ///
    /// # Arguments
    /// * `pin_a`, `pin_b`: quadrature outputs
    /// * `pin_s`: pushbutton
    /// * `clock`: monotonic time source
    ///
    /// # Errors
    /// * [`RotaryError::Pin`] if a pin cannot be configured
    pub fn new(pin_a: A, pin_b: B, pin_s: S, clock: C) -> Result<Self, RotaryError<E>> {
        Self::with_config(pin_a, pin_b, pin_s, clock, RotaryConfig::default())
    }

    /// Create an encoder with an explicit configuration.
    ///
    /// All three pins are configured for `config.trigger` before this
    /// returns. Debounce and error-hold windows start at the current time.
    ///
    /// # Errors
    /// * [`RotaryError::Pin`] if a pin cannot be configured
    pub fn with_config(
        pin_a: A,
        pin_b: B,
        pin_s: S,
        clock: C,
        config: RotaryConfig,
    ) -> Result<Self, RotaryError<E>> {
        let driver = InputDriver::new(pin_a, pin_b, pin_s, config.trigger)?;
        let now = clock.now();

        Ok(Self {
            driver,
            clock,
            decoder: QuadratureDecoder::new(now, config.rotation_debounce, config.error_hold),
            button: ButtonTracker::new(now, config.button_debounce),
        })
    }

    // -----------------------------------------------------------------------
    // Rotation
    // -----------------------------------------------------------------------

    /// Poll the quadrature pins for one step.
    ///
    /// Returns [`Direction::None`] without touching the pins while the
    /// rotation debounce window is still running.
    ///
    /// # Errors
    /// * [`RotaryError::Pin`] on a failed pin read
    pub fn poll_rotation(&mut self) -> Result<Direction, RotaryError<E>> {
        let now = self.clock.now();
        let driver = &mut self.driver;
        Ok(self.decoder.poll(now, || driver.read_rotation())?)
    }

    // -----------------------------------------------------------------------
    // Button
    // -----------------------------------------------------------------------

    /// `true` exactly once per debounced button press.
    ///
    /// # Errors
    /// * [`RotaryError::Pin`] on a failed pin read
    pub fn poll_press(&mut self) -> Result<bool, RotaryError<E>> {
        let now = self.clock.now();
        let driver = &mut self.driver;
        Ok(self.button.poll_press(now, || driver.read_button())?)
    }

    /// How long the button has been held, zero when it is not mid-press.
    ///
    /// # Errors
    /// * [`RotaryError::Pin`] on a failed pin read
    pub fn hold_duration(&mut self) -> Result<Duration, RotaryError<E>> {
        let now = self.clock.now();
        let driver = &mut self.driver;
        Ok(self.button.hold_duration(now, || driver.read_button())?)
    }

    /// `true` once per press, as soon as it has been held for longer than
    /// `threshold`.
    ///
    /// # Errors
    /// * [`RotaryError::Pin`] on a failed pin read
    pub fn poll_long_press(&mut self, threshold: Duration) -> Result<bool, RotaryError<E>> {
        let now = self.clock.now();
        let driver = &mut self.driver;
        Ok(self
            .button
            .poll_long_press(now, threshold, || driver.read_button())?)
    }

    /// Classify presses as short (reported on release) or long (reported
    /// while still held). Each press yields at most one of the two.
    ///
    /// Use this when the same call site needs both short and long presses.
    ///
    /// # Errors
    /// * [`RotaryError::Pin`] on a failed pin read
    pub fn poll_press_type(&mut self, threshold: Duration) -> Result<PressType, RotaryError<E>> {
        let now = self.clock.now();
        let driver = &mut self.driver;
        Ok(self
            .button
            .poll_press_type(now, threshold, || driver.read_button())?)
    }

    /// Restart the hold timer of the current press.
    ///
    /// # Example
    /// ```ignore
    /// // Fire every second while the button stays down.
    /// if encoder.hold_duration()? > Duration::from_secs(1) {
    ///     encoder.reset_hold_timer();
    ///     step();
    /// }
    /// ```
    pub fn reset_hold_timer(&mut self) {
        let now = self.clock.now();
        self.button.reset_hold_timer(now);
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Change the trigger level and reconfigure all three pins.
    ///
    /// # Errors
    /// * [`RotaryError::Pin`] if a pin cannot be configured. The trigger level
    ///   stays unchanged, but pins configured before the failing one keep the
    ///   new mode.
    pub fn set_trigger(&mut self, trigger: TriggerLevel) -> Result<(), RotaryError<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("trigger level -> {}", trigger);
        self.driver.set_trigger(trigger)?;
        Ok(())
    }

    /// Set the rotation debounce window. Zero disables rotation debouncing.
    pub fn set_rotation_debounce(&mut self, window: Duration) {
        self.decoder.set_debounce(window);
    }

    /// Set the button debounce window. Zero disables button debouncing.
    pub fn set_button_debounce(&mut self, window: Duration) {
        self.button.set_debounce(window);
    }

    /// Set the error-hold window. Zero accepts every direction reversal.
    pub fn set_error_hold(&mut self, window: Duration) {
        self.decoder.set_error_hold(window);
    }

    /// Current configuration.
    pub fn config(&self) -> RotaryConfig {
        RotaryConfig {
            trigger: self.driver.trigger(),
            rotation_debounce: self.decoder.debounce(),
            button_debounce: self.button.debounce(),
            error_hold: self.decoder.error_hold(),
        }
    }

    /// Give back the pins and the clock.
    pub fn release(self) -> (A, B, S, C) {
        let (a, b, s) = self.driver.release();
        (a, b, s, self.clock)
    }
}
