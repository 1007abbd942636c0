//! Simulated pins and clock shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use embassy_time::Instant;
use embedded_hal::digital::{ErrorType, InputPin};
use rotary_driver::{Clock, EncoderInput, PinMode, RotaryConfig, RotaryEncoder};

/// Pin whose level is driven by the test through a shared handle.
#[derive(Clone, Default)]
pub struct SimPin {
    high: Rc<Cell<bool>>,
    mode: Rc<Cell<Option<PinMode>>>,
    configured: Rc<Cell<usize>>,
    reads: Rc<Cell<usize>>,
}

impl SimPin {
    pub fn set_high(&self, high: bool) {
        self.high.set(high);
    }

    pub fn mode(&self) -> Option<PinMode> {
        self.mode.get()
    }

    pub fn configured(&self) -> usize {
        self.configured.get()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.reads.set(self.reads.get() + 1);
        Ok(!self.high.get())
    }
}

impl EncoderInput for SimPin {
    fn configure(&mut self, mode: PinMode) -> Result<(), Self::Error> {
        self.mode.set(Some(mode));
        self.configured.set(self.configured.get() + 1);
        Ok(())
    }
}

/// Millisecond clock advanced by hand.
#[derive(Clone, Default)]
pub struct SimClock {
    ms: Rc<Cell<u64>>,
}

impl SimClock {
    pub fn set(&self, ms: u64) {
        self.ms.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.ms.set(self.ms.get() + ms);
    }

    pub fn ms(&self) -> u64 {
        self.ms.get()
    }
}

impl Clock for SimClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.ms.get())
    }
}

/// Handles to everything an encoder under test is wired to.
pub struct Rig {
    pub a: SimPin,
    pub b: SimPin,
    pub s: SimPin,
    pub clock: SimClock,
}

pub type SimEncoder = RotaryEncoder<SimPin, SimPin, SimPin, SimClock>;

impl Rig {
    /// All pins idle at the active-high level, clock at zero.
    pub fn new() -> Self {
        let rig = Self {
            a: SimPin::default(),
            b: SimPin::default(),
            s: SimPin::default(),
            clock: SimClock::default(),
        };
        rig.a.set_high(true);
        rig.b.set_high(true);
        rig.s.set_high(true);
        rig
    }

    pub fn encoder(&self, config: RotaryConfig) -> SimEncoder {
        RotaryEncoder::with_config(
            self.a.clone(),
            self.b.clone(),
            self.s.clone(),
            self.clock.clone(),
            config,
        )
        .unwrap()
    }
}
