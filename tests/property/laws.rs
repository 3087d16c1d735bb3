//! Property-based tests for the windowing laws
//!
//! Written in the runner style: each law gets its own test with an explicit
//! proptest strategy over inputs and extents.

use contextual::quantify::{existential, universal};
use contextual::{contextual_filter, contextual_map, frame};
use proptest::prelude::*;
use std::cell::Cell;

/// Frame count law: `max(0, n + before + after - size + 1)` frames for any
/// finite input, and zero for any non-positive size.
#[test]
fn test_frame_count_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(any::<Vec<u8>>(), -4..12i64, 0..6i64, 0..6i64),
            |(input, size, before, after)| {
                let n = input.len() as i64;
                let count = frame(input, size, 0u8, before, after)
                    .map(|result| result.unwrap())
                    .count() as i64;

                if size <= 0 {
                    assert_eq!(count, 0);
                } else {
                    assert_eq!(count, (n + before + after - size + 1).max(0));
                }
                Ok(())
            },
        )
        .unwrap();
}

/// Every emitted frame has exactly `size` slots.
#[test]
fn test_frame_width_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(any::<Vec<u8>>(), 1..10i64, 0..6i64, 0..6i64),
            |(input, size, before, after)| {
                for result in frame(input, size, 0u8, before, after) {
                    assert_eq!(result.unwrap().len() as i64, size);
                }
                Ok(())
            },
        )
        .unwrap();
}

/// Filter output is an order-preserving subsequence of the input; map output
/// has exactly the input's length.
#[test]
fn test_filter_subsequence_map_total_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(any::<Vec<u8>>(), 0..5i64, 0..5i64),
            |(input, before, after)| {
                let even = |x: &u8| x % 2 == 0;

                let kept: Vec<u8> =
                    contextual_filter(input.clone(), even, before, after, existential)
                        .map(|result| result.unwrap())
                        .collect();
                assert!(kept.len() <= input.len());
                // Order-preserving subsequence check.
                let mut rest = input.as_slice();
                for item in &kept {
                    let position = rest
                        .iter()
                        .position(|x| x == item)
                        .expect("filter yielded an element not in the input");
                    rest = &rest[position + 1..];
                }

                let mapped: Vec<u8> = contextual_map(
                    input.clone(),
                    |x| x.wrapping_add(1),
                    even,
                    before,
                    after,
                    universal,
                )
                .map(|result| result.unwrap())
                .collect();
                assert_eq!(mapped.len(), input.len());
                Ok(())
            },
        )
        .unwrap();
}

/// The predicate runs exactly once per element, for any extents, including
/// windows wider than the input.
#[test]
fn test_predicate_once_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(any::<Vec<u8>>(), 0..8i64, 0..8i64),
            |(input, before, after)| {
                let calls = Cell::new(0usize);
                let counting = |x: &u8| {
                    calls.set(calls.get() + 1);
                    x % 2 == 0
                };
                let n = input.len();
                contextual_filter(input, counting, before, after, universal).count();
                assert_eq!(calls.get(), n);
                Ok(())
            },
        )
        .unwrap();
}

/// Vacuous-context law: with no context at all, a universal quantifier keeps
/// everything and an existential quantifier keeps nothing.
#[test]
fn test_vacuous_context_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<Vec<u8>>(), |input| {
            let even = |x: &u8| x % 2 == 0;

            let all_kept: Vec<u8> = contextual_filter(input.clone(), even, 0, 0, universal)
                .map(|result| result.unwrap())
                .collect();
            assert_eq!(all_kept, input);

            let none_kept = contextual_filter(input.clone(), even, 0, 0, existential).count();
            assert_eq!(none_kept, 0);
            Ok(())
        })
        .unwrap();
}

/// Framing a finite input agrees with the naive materialized computation.
#[test]
fn test_frames_match_naive_windows_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec(any::<i32>(), 0..40), 1..8usize, 0..4usize, 0..4usize),
            |(input, size, before, after)| {
                let pad = i32::MIN;
                let mut augmented = vec![pad; before];
                augmented.extend_from_slice(&input);
                augmented.extend(std::iter::repeat(pad).take(after));

                let expected: Vec<Vec<i32>> =
                    augmented.windows(size).map(|w| w.to_vec()).collect();
                let actual: Vec<Vec<i32>> = frame(input, size, pad, before, after)
                    .map(|result| result.unwrap().slots().to_vec())
                    .collect();
                assert_eq!(actual, expected);
                Ok(())
            },
        )
        .unwrap();
}
