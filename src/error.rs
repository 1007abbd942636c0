//! Error types for the rotary driver.

use core::fmt;

/// Errors that can occur when talking to the encoder's GPIO pins.
///
/// Signal noise is never reported here; debouncing and the error-hold window
/// absorb it. Only failures of the underlying pin layer surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotaryError<E> {
    /// Underlying GPIO read or configuration error.
    Pin(E),
}

// Allow ergonomic `?` propagation from raw pin errors.
impl<E> From<E> for RotaryError<E> {
    fn from(error: E) -> Self {
        RotaryError::Pin(error)
    }
}

impl<E: fmt::Debug> fmt::Display for RotaryError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RotaryError::Pin(e) => write!(f, "GPIO error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for RotaryError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            RotaryError::Pin(e) => defmt::write!(f, "GPIO error: {}", e),
        }
    }
}
