//! Debounced quadrature decoding with direction error correction.
//!
//! The decoder looks for the moment pin A leaves its active state. At that
//! instant the phase of pin B gives the direction: B still active means
//! clockwise, B already inactive means counter-clockwise.
//!
//! Two windows condition the signal:
//!
//! - the **debounce window** limits how often the pins are sampled at all, so
//!   contact chatter is never read;
//! - the **error-hold window** limits how often the direction may *reverse*.
//!   Same-direction pulses pass at full speed, but a reversal within the
//!   window is treated as a ghost reading and reported as the held direction.
//!   The window also runs from construction, so edges in the first window
//!   report [`Direction::None`].

use embassy_time::{Duration, Instant};

/// Rotation reported by a single poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// No step detected.
    #[default]
    None,
    /// One step clockwise.
    Clockwise,
    /// One step counter-clockwise.
    CounterClockwise,
}

/// Quadrature state machine for pins A and B.
///
/// Pure state: pin levels are supplied by the caller through a closure that
/// is only invoked when the debounce gate is open.
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    debounce: Duration,
    error_hold: Duration,
    last_sample: Instant,
    last_direction_change: Instant,
    /// Active state of A at the last accepted sample.
    prev_a: bool,
    last_direction: Direction,
}

impl QuadratureDecoder {
    /// Create a decoder whose windows start at `now`.
    pub fn new(now: Instant, debounce: Duration, error_hold: Duration) -> Self {
        Self {
            debounce,
            error_hold,
            last_sample: now,
            last_direction_change: now,
            prev_a: false,
            last_direction: Direction::None,
        }
    }

    /// Sample the pins if the debounce gate is open and decode one step.
    ///
    /// `read` returns the active state of A and B. It is not called while the
    /// gate is closed. If it fails, the decoder state is left untouched.
    pub fn poll<E>(
        &mut self,
        now: Instant,
        read: impl FnOnce() -> Result<(bool, bool), E>,
    ) -> Result<Direction, E> {
        if now.saturating_duration_since(self.last_sample) < self.debounce {
            return Ok(Direction::None);
        }

        let (active_a, active_b) = read()?;

        let mut direction = Direction::None;
        if !active_a && self.prev_a {
            let candidate = if active_b != active_a {
                Direction::Clockwise
            } else {
                Direction::CounterClockwise
            };
            direction = self.correct(now, candidate);
        }

        self.prev_a = active_a;
        self.last_sample = now;
        Ok(direction)
    }

    /// Apply the error-hold window to a freshly decoded direction.
    fn correct(&mut self, now: Instant, candidate: Direction) -> Direction {
        if now.saturating_duration_since(self.last_direction_change) < self.error_hold {
            if candidate != self.last_direction {
                #[cfg(feature = "defmt")]
                defmt::trace!(
                    "reversal to {} suppressed, holding {}",
                    candidate,
                    self.last_direction
                );
            }
            return self.last_direction;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("direction {}", candidate);
        self.last_direction = candidate;
        self.last_direction_change = now;
        candidate
    }

    /// Direction currently held by the error-correction window.
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn set_debounce(&mut self, window: Duration) {
        self.debounce = window;
    }

    pub fn error_hold(&self) -> Duration {
        self.error_hold
    }

    pub fn set_error_hold(&mut self, window: Duration) {
        self.error_hold = window;
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
