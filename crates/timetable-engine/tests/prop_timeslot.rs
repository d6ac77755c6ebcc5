//! Property-based tests for time-of-day parsing and range overlap.
//!
//! These verify invariants that must hold for *any* wall-clock input, not
//! just the examples in the scenario suites.

use proptest::prelude::*;
use timetable_engine::timeslot::{duration_minutes, ranges_overlap};
use timetable_engine::TimeOfDay;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_time() -> impl Strategy<Value = TimeOfDay> {
    (0u16..1440).prop_map(|m| TimeOfDay::new((m / 60) as u8, (m % 60) as u8).unwrap())
}

/// An ordered pair `start < end` within one day.
fn arb_range() -> impl Strategy<Value = (TimeOfDay, TimeOfDay)> {
    (0u16..1439, 1u16..=1439)
        .prop_filter("start must precede end", |(s, e)| s < e)
        .prop_map(|(s, e)| {
            (
                TimeOfDay::new((s / 60) as u8, (s % 60) as u8).unwrap(),
                TimeOfDay::new((e / 60) as u8, (e % 60) as u8).unwrap(),
            )
        })
}

// ---------------------------------------------------------------------------
// Property 1: overlap is symmetric
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn overlap_is_symmetric(
        a in arb_time(),
        b in arb_time(),
        c in arb_time(),
        d in arb_time(),
    ) {
        prop_assert_eq!(
            ranges_overlap(a, b, c, d),
            ranges_overlap(c, d, a, b),
            "overlap({}, {}, {}, {}) must equal overlap({}, {}, {}, {})",
            a, b, c, d, c, d, a, b
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: touching ranges never overlap (half-open semantics)
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn touching_ranges_never_overlap(
        (start, mid) in arb_range(),
        later in arb_time(),
    ) {
        // Build [start, mid) and [mid, end) with end > mid.
        prop_assume!(later > mid);
        prop_assert!(
            !ranges_overlap(start, mid, mid, later),
            "[{start}, {mid}) and [{mid}, {later}) must not overlap"
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3: a range always overlaps itself, and overlap implies a
// positive shared duration
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn a_range_overlaps_itself((start, end) in arb_range()) {
        prop_assert!(ranges_overlap(start, end, start, end));
        prop_assert!(duration_minutes(start, end) > 0);
    }
}

// ---------------------------------------------------------------------------
// Property 4: display/parse round-trip
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn display_then_parse_round_trips(t in arb_time()) {
        let rendered = t.to_string();
        let back = TimeOfDay::parse(&rendered).unwrap();
        prop_assert_eq!(back, t);
    }
}

// ---------------------------------------------------------------------------
// Property 5: parsing never panics, and never accepts out-of-range parts
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn parse_never_panics(s in "\\PC{0,8}") {
        // An Err result is acceptable; a panic is not.
        let _ = TimeOfDay::parse(&s);
    }
}

proptest! {
    #[test]
    fn out_of_range_components_are_rejected(h in 24u8..=99, m in 60u8..=99) {
        let hour_input = format!("{h:02}:30");
        let minute_input = format!("12:{m:02}");
        prop_assert!(TimeOfDay::parse(&hour_input).is_err());
        prop_assert!(TimeOfDay::parse(&minute_input).is_err());
    }
}

#[test]
fn empty_and_malformed_inputs_are_rejected() {
    for bad in ["", ":", "8", "08:", ":30", "8:5", "ab:cd", "08:30:00", "-1:00"] {
        assert!(TimeOfDay::parse(bad).is_err(), "{bad:?} must not parse");
    }
}
