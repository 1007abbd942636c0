//! Property tests over arbitrary pin/time sequences.

mod common;

use embassy_time::Duration;
use proptest::prelude::*;
use rotary_driver::{Direction, PressType, RotaryConfig};

use common::Rig;

/// (milliseconds to advance, pin A high, pin B high)
fn rotation_samples() -> impl Strategy<Value = Vec<(u64, bool, bool)>> {
    proptest::collection::vec((0u64..6, any::<bool>(), any::<bool>()), 0..300)
}

/// (milliseconds to advance, switch high)
fn button_samples() -> impl Strategy<Value = Vec<(u64, bool)>> {
    proptest::collection::vec((0u64..120, any::<bool>()), 0..300)
}

proptest! {
    /// A direction is only ever reported on an accepted sample where A has
    /// just left its active level.
    #[test]
    fn direction_only_on_accepted_falling_edge(samples in rotation_samples()) {
        let rig = Rig::new();
        let mut encoder = rig.encoder(RotaryConfig::default());
        let mut prev_accepted_a = false;

        for (dt, a, b) in samples {
            rig.clock.advance(dt);
            rig.a.set_high(a);
            rig.b.set_high(b);

            let reads_before = rig.a.reads();
            let direction = encoder.poll_rotation().unwrap();
            let accepted = rig.a.reads() > reads_before;

            if direction != Direction::None {
                prop_assert!(accepted, "direction from a closed gate");
                prop_assert!(prev_accepted_a && !a, "direction without a falling edge on A");
            }
            if accepted {
                prev_accepted_a = a;
            }
        }
    }

    /// With every window at zero, each falling edge of A yields the
    /// direction given by B at that instant.
    #[test]
    fn zero_windows_decode_every_edge(samples in rotation_samples()) {
        let rig = Rig::new();
        let mut encoder = rig.encoder(
            RotaryConfig::default()
                .with_rotation_debounce(Duration::from_millis(0))
                .with_error_hold(Duration::from_millis(0)),
        );
        let mut prev_a = false;

        for (dt, a, b) in samples {
            rig.clock.advance(dt);
            rig.a.set_high(a);
            rig.b.set_high(b);

            let expected = match (prev_a && !a, b) {
                (false, _) => Direction::None,
                (true, true) => Direction::Clockwise,
                (true, false) => Direction::CounterClockwise,
            };
            prop_assert_eq!(encoder.poll_rotation().unwrap(), expected);
            prev_a = a;
        }
    }

    /// Press pulses match accepted active-to-inactive transitions of the
    /// switch one for one.
    #[test]
    fn press_pulse_matches_accepted_transitions(samples in button_samples()) {
        let rig = Rig::new();
        let mut encoder = rig.encoder(RotaryConfig::default());
        let mut prev_accepted_s = false;

        for (dt, s) in samples {
            rig.clock.advance(dt);
            rig.s.set_high(s);

            let reads_before = rig.s.reads();
            let pressed = encoder.poll_press().unwrap();
            let accepted = rig.s.reads() > reads_before;

            prop_assert_eq!(pressed, accepted && prev_accepted_s && !s);
            if accepted {
                prev_accepted_s = s;
            }
        }
    }

    /// Each press is classified at most once, as either short or long, and
    /// only on an accepted sample.
    #[test]
    fn press_type_is_exclusive_per_press(
        samples in button_samples(),
        threshold in 0u64..600,
    ) {
        let rig = Rig::new();
        let mut encoder = rig.encoder(RotaryConfig::default());
        let threshold = Duration::from_millis(threshold);
        let mut prev_accepted_s = false;
        let mut classified_since_press = true;

        for (dt, s) in samples {
            rig.clock.advance(dt);
            rig.s.set_high(s);

            let reads_before = rig.s.reads();
            let press_type = encoder.poll_press_type(threshold).unwrap();
            let accepted = rig.s.reads() > reads_before;

            if accepted && prev_accepted_s && !s {
                classified_since_press = false;
            }
            if press_type != PressType::None {
                prop_assert!(accepted, "classification from a closed gate");
                prop_assert!(!classified_since_press, "second classification for one press");
                classified_since_press = true;
            }
            if accepted {
                prev_accepted_s = s;
            }
        }
    }
}
