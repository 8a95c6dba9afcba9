//! Proptest generators and a reference slicing model
//!
//! The model walks indices one by one with plain loops, so it shares no
//! arithmetic with the range normalization and composition under test.

#![allow(dead_code)]

use proptest::collection::vec;
use proptest::prelude::*;
use subseq::Slice;

// ============================================================================
// Reference model
// ============================================================================

/// Standard `data[start:stop:step]` semantics, computed element by element.
pub fn reference_slice<T: Clone>(data: &[T], slice: Slice) -> Vec<T> {
    let len = data.len() as isize;
    let step = slice.step.unwrap_or(1);
    assert_ne!(step, 0, "reference model needs a non-zero step");

    let resolve = |bound: isize| if bound < 0 { bound + len } else { bound };

    let mut out = Vec::new();
    if step > 0 {
        let start = slice.start.map_or(0, resolve).clamp(0, len);
        let stop = slice.stop.map_or(len, resolve).clamp(0, len);
        let mut i = start;
        while i < stop {
            out.push(data[i as usize].clone());
            i += step;
        }
    } else {
        let start = slice.start.map_or(len - 1, resolve).clamp(-1, len - 1);
        let stop = slice.stop.map_or(-1, resolve).clamp(-1, len - 1);
        let mut i = start;
        while i > stop {
            out.push(data[i as usize].clone());
            i += step;
        }
    }
    out
}

// ============================================================================
// Strategies
// ============================================================================

/// Backing data: distinct values, so a wrong position cannot go unnoticed.
pub fn arb_data() -> impl Strategy<Value = Vec<i32>> {
    (0usize..24).prop_map(|len| (0..len as i32).map(|i| i * 10 + 7).collect())
}

/// A bound that is sometimes omitted, often negative, often out of range.
pub fn arb_bound() -> impl Strategy<Value = Option<isize>> {
    prop_oneof![
        1 => Just(None),
        4 => (-30isize..30).prop_map(Some),
    ]
}

/// A step that is sometimes omitted and never zero.
pub fn arb_step() -> impl Strategy<Value = Option<isize>> {
    prop_oneof![
        1 => Just(None),
        4 => (1isize..6).prop_map(Some),
        4 => (-6isize..0).prop_map(Some),
    ]
}

pub fn arb_slice() -> impl Strategy<Value = Slice> {
    (arb_bound(), arb_bound(), arb_step()).prop_map(|(start, stop, step)| Slice::new(start, stop, step))
}

pub fn arb_slices(max: usize) -> impl Strategy<Value = Vec<Slice>> {
    vec(arb_slice(), 1..=max)
}

#[test]
fn reference_model_sanity() {
    let data: Vec<i32> = (0..10).collect();
    assert_eq!(reference_slice(&data, Slice::new(Some(3), Some(8), None)), [3, 4, 5, 6, 7]);
    assert_eq!(reference_slice(&data, Slice::new(None, None, Some(-3))), [9, 6, 3, 0]);
    assert_eq!(reference_slice(&data, Slice::new(Some(3), Some(-1), None)), [3, 4, 5, 6, 7, 8]);
    assert!(reference_slice(&data, Slice::new(Some(2), Some(8), Some(-1))).is_empty());
}
