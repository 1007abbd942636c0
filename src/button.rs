//! Debounced pushbutton tracking.
//!
//! Every button query goes through one primitive, [`ButtonTracker::sample`],
//! which turns a debounced pin sample into a [`ButtonEdge`]. The public views
//! (press pulse, hold duration, long-press pulse, press-type classification)
//! are derived from that single event stream, so they share one debounce
//! clock and one set of press bookkeeping.
//!
//! A press is the transition of the switch pin *out of* its active level;
//! the button counts as held while the pin stays inactive after such an
//! edge.

use embassy_time::{Duration, Instant};

/// Debounced button event produced by one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEdge {
    /// Released and steady.
    Idle,
    /// Press edge seen on this sample.
    Pressed,
    /// Still pressed since an earlier press edge.
    Held,
    /// Release edge seen on this sample.
    Released,
}

/// Short/long classification reported by [`ButtonTracker::poll_press_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressType {
    /// Nothing to report.
    #[default]
    None,
    /// Released before the long-press threshold was exceeded.
    ReleasedShort,
    /// Still held after the long-press threshold was exceeded.
    HeldLong,
}

/// Button state machine for the switch pin.
#[derive(Debug, Clone)]
pub struct ButtonTracker {
    debounce: Duration,
    last_sample: Instant,
    press_start: Instant,
    /// Active state of the switch at the last accepted sample.
    prev_active: bool,
    /// A press edge was seen and no release since.
    pressed: bool,
    /// The long-press pulse already fired for the current press.
    long_press_fired: bool,
    /// The current press still awaits a short/long classification.
    press_tracked: bool,
}

impl ButtonTracker {
    /// Create a tracker whose debounce window starts at `now`.
    pub fn new(now: Instant, debounce: Duration) -> Self {
        Self {
            debounce,
            last_sample: now,
            press_start: now,
            prev_active: false,
            pressed: false,
            long_press_fired: false,
            press_tracked: false,
        }
    }

    // -----------------------------------------------------------------------
    // Event primitive
    // -----------------------------------------------------------------------

    /// Take one debounced sample of the switch.
    ///
    /// `read` returns the active state of the switch pin and is only invoked
    /// when the debounce gate is open. While the gate is closed the last
    /// accepted state is reported: [`ButtonEdge::Held`] during a press,
    /// [`ButtonEdge::Idle`] otherwise. Edges are only ever reported on an
    /// accepted sample.
    pub fn sample<E>(
        &mut self,
        now: Instant,
        read: impl FnOnce() -> Result<bool, E>,
    ) -> Result<ButtonEdge, E> {
        match self.accept(now, read)? {
            Some(edge) => Ok(edge),
            None => Ok(self.steady()),
        }
    }

    /// Read and classify the switch if the debounce gate is open.
    ///
    /// Returns `None` without calling `read` while the gate is closed.
    fn accept<E>(
        &mut self,
        now: Instant,
        read: impl FnOnce() -> Result<bool, E>,
    ) -> Result<Option<ButtonEdge>, E> {
        if now.saturating_duration_since(self.last_sample) < self.debounce {
            return Ok(None);
        }

        let active = read()?;

        let edge = match (self.prev_active, active) {
            (true, false) => ButtonEdge::Pressed,
            // Releases only count after an observed press, so an idle switch
            // seen for the first time is not a release.
            (false, true) if self.pressed => ButtonEdge::Released,
            (false, true) => ButtonEdge::Idle,
            (false, false) => self.steady(),
            (true, true) => ButtonEdge::Idle,
        };

        match edge {
            ButtonEdge::Pressed => {
                #[cfg(feature = "defmt")]
                defmt::debug!("button pressed");
                self.pressed = true;
                self.press_start = now;
                self.long_press_fired = false;
                self.press_tracked = true;
            }
            ButtonEdge::Released => {
                #[cfg(feature = "defmt")]
                defmt::debug!("button released");
                self.pressed = false;
            }
            ButtonEdge::Held | ButtonEdge::Idle => {}
        }

        self.prev_active = active;
        self.last_sample = now;
        Ok(Some(edge))
    }

    fn steady(&self) -> ButtonEdge {
        if self.pressed {
            ButtonEdge::Held
        } else {
            ButtonEdge::Idle
        }
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    /// `true` exactly on the debounced press edge.
    pub fn poll_press<E>(
        &mut self,
        now: Instant,
        read: impl FnOnce() -> Result<bool, E>,
    ) -> Result<bool, E> {
        Ok(self.sample(now, read)? == ButtonEdge::Pressed)
    }

    /// Time the button has been held, or zero when it is not mid-press.
    ///
    /// The sample that detects the press edge itself reports zero.
    pub fn hold_duration<E>(
        &mut self,
        now: Instant,
        read: impl FnOnce() -> Result<bool, E>,
    ) -> Result<Duration, E> {
        let edge = self.sample(now, read)?;
        Ok(self.held_for(edge, now))
    }

    /// `true` once per press, on the first call at which the hold duration
    /// exceeds `threshold`.
    ///
    /// Releasing and pressing again re-arms the pulse.
    pub fn poll_long_press<E>(
        &mut self,
        now: Instant,
        threshold: Duration,
        read: impl FnOnce() -> Result<bool, E>,
    ) -> Result<bool, E> {
        let held = self.hold_duration(now, read)?;
        if held > threshold && !self.long_press_fired {
            #[cfg(feature = "defmt")]
            defmt::debug!("long press after {} ms", held.as_millis());
            self.long_press_fired = true;
            return Ok(true);
        }
        Ok(false)
    }

    /// Classify the current press as short or long.
    ///
    /// A press reports exactly one of [`PressType::ReleasedShort`] (on
    /// release) or [`PressType::HeldLong`] (once the hold exceeds
    /// `threshold`). After a long classification the eventual release
    /// reports [`PressType::None`].
    ///
    /// Both classifications are only made on an accepted sample, so a
    /// release inside the debounce window is never mistaken for a hold.
    pub fn poll_press_type<E>(
        &mut self,
        now: Instant,
        threshold: Duration,
        read: impl FnOnce() -> Result<bool, E>,
    ) -> Result<PressType, E> {
        let Some(edge) = self.accept(now, read)? else {
            return Ok(PressType::None);
        };
        if !self.press_tracked {
            return Ok(PressType::None);
        }

        let press_type = match edge {
            ButtonEdge::Released => PressType::ReleasedShort,
            ButtonEdge::Held if self.held_for(edge, now) > threshold => PressType::HeldLong,
            _ => PressType::None,
        };

        if press_type != PressType::None {
            #[cfg(feature = "defmt")]
            defmt::debug!("press classified as {}", press_type);
            self.press_tracked = false;
        }
        Ok(press_type)
    }

    /// Restart the hold timer of the current press at `now`.
    ///
    /// Combined with [`hold_duration`](Self::hold_duration) this produces a
    /// repeating pulse while the button stays down.
    pub fn reset_hold_timer(&mut self, now: Instant) {
        self.press_start = now;
    }

    fn held_for(&self, edge: ButtonEdge, now: Instant) -> Duration {
        match edge {
            ButtonEdge::Held => now.saturating_duration_since(self.press_start),
            _ => Duration::from_ticks(0),
        }
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn set_debounce(&mut self, window: Duration) {
        self.debounce = window;
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
