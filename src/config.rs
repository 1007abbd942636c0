//! Wiring and timing configuration for a rotary encoder.
//!
//! All windows are minimum times between accepted events. A window of zero
//! disables the protection it provides.

use embassy_time::Duration;

// ---------------------------------------------------------------------------
// Default windows
// ---------------------------------------------------------------------------

/// Minimum time between accepted rotation samples.
///
/// Keep this as small as the encoder allows; larger values miss pulses
/// during fast rotation.
pub const DEFAULT_ROTATION_DEBOUNCE_MS: u64 = 2;

/// Minimum time between accepted button samples.
pub const DEFAULT_BUTTON_DEBOUNCE_MS: u64 = 200;

/// Minimum time a decoded direction is held before a reversal is accepted.
pub const DEFAULT_ERROR_HOLD_MS: u64 = 100;

// ---------------------------------------------------------------------------
// Wiring
// ---------------------------------------------------------------------------

/// Electrical level treated as "active" on all three encoder pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriggerLevel {
    /// High level is active. Pins are configured with internal pull-ups.
    #[default]
    ActiveHigh,
    /// Low level is active. Pins are configured as plain inputs.
    ActiveLow,
}

impl TriggerLevel {
    /// Pin mode that matches this trigger level.
    pub const fn pin_mode(self) -> PinMode {
        match self {
            TriggerLevel::ActiveHigh => PinMode::InputPullUp,
            TriggerLevel::ActiveLow => PinMode::Input,
        }
    }
}

/// Input mode requested from the platform when configuring a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Floating input.
    Input,
    /// Input with the internal pull-up resistor enabled.
    InputPullUp,
}

// ---------------------------------------------------------------------------
// Complete configuration
// ---------------------------------------------------------------------------

/// Complete configuration of a [`RotaryEncoder`](crate::RotaryEncoder).
///
/// # Example
///
/// ```
/// use embassy_time::Duration;
/// use rotary_driver::{RotaryConfig, TriggerLevel};
///
/// let config = RotaryConfig::default()
///     .with_trigger(TriggerLevel::ActiveLow)
///     .with_button_debounce(Duration::from_millis(50));
///
/// assert_eq!(config.error_hold, Duration::from_millis(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotaryConfig {
    /// Which level counts as active on A, B and the switch.
    pub trigger: TriggerLevel,
    /// Minimum time between accepted rotation samples.
    pub rotation_debounce: Duration,
    /// Minimum time between accepted button samples.
    pub button_debounce: Duration,
    /// Minimum time between accepted direction reversals.
    pub error_hold: Duration,
}

impl Default for RotaryConfig {
    fn default() -> Self {
        Self {
            trigger: TriggerLevel::ActiveHigh,
            rotation_debounce: Duration::from_millis(DEFAULT_ROTATION_DEBOUNCE_MS),
            button_debounce: Duration::from_millis(DEFAULT_BUTTON_DEBOUNCE_MS),
            error_hold: Duration::from_millis(DEFAULT_ERROR_HOLD_MS),
        }
    }
}

impl RotaryConfig {
    /// Set the trigger level.
    pub const fn with_trigger(mut self, trigger: TriggerLevel) -> Self {
        self.trigger = trigger;
        self
    }

    /// Set the rotation debounce window.
    pub const fn with_rotation_debounce(mut self, window: Duration) -> Self {
        self.rotation_debounce = window;
        self
    }

    /// Set the button debounce window.
    pub const fn with_button_debounce(mut self, window: Duration) -> Self {
        self.button_debounce = window;
        self
    }

    /// Set the error-hold window.
    pub const fn with_error_hold(mut self, window: Duration) -> Self {
        self.error_hold = window;
        self
    }
}
