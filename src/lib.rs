//! Debounced driver for mechanical rotary encoders with a pushbutton.
//!
//! This crate turns the raw, bouncing GPIO levels of a two-phase
//! quadrature encoder and its switch into clean events: rotation direction,
//! press pulses, hold duration, long presses and short/long
//! classification. It is a synchronous, poll-driven state machine with no
//! interrupts, no buffering and no allocation.
//!
//! # Architecture
//!
//! The crate is split into layers:
//!
//! - **[`hal`]**: platform seams, [`EncoderInput`] pins and a
//!   [`Clock`].
//! - **`driver`** (crate-private): owns the pins, applies the pin mode for
//!   the [`TriggerLevel`] and converts levels to active states.
//! - **[`QuadratureDecoder`]** and **[`ButtonTracker`]**: pure state
//!   machines fed with timestamps and samples.
//! - **[`RotaryEncoder`]** (public): the component that ties them together.
//!
//! # Quick start
//!
//! ```ignore
//! use rotary_driver::{Direction, EmbassyClock, RotaryEncoder};
//!
//! // `a`, `b` and `s` are any `EncoderInput` pins
//! let mut encoder = RotaryEncoder::new(a, b, s, EmbassyClock)?;
//!
//! loop {
//!     if encoder.poll_rotation()? == Direction::Clockwise {
//!         // ...
//!     }
//!     if encoder.poll_press()? {
//!         // ...
//!     }
//! }
//! ```
//!
//! # Features
//!
//! - **`defmt`**: Enable [`defmt::Format`] on public types and trace/debug
//!   logging of decoded events.

#![cfg_attr(not(test), no_std)]

pub use button::{ButtonEdge, ButtonTracker, PressType};
pub use config::{
    PinMode, RotaryConfig, TriggerLevel, DEFAULT_BUTTON_DEBOUNCE_MS, DEFAULT_ERROR_HOLD_MS,
    DEFAULT_ROTATION_DEBOUNCE_MS,
};
pub use error::RotaryError;
pub use hal::{Clock, EmbassyClock, EncoderInput, Preconfigured};
pub use quadrature::{Direction, QuadratureDecoder};
pub use rotary::RotaryEncoder;

mod button;
mod config;
mod driver;
mod error;
pub mod hal;
mod quadrature;
mod rotary;
