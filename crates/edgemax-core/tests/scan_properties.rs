// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use edgemax_core::{find_max, Field, Record, ScanKey, Scanner, SeedPolicy};

// Weights drawn from a small grid so ties and exact sentinels show up often.
fn weight() -> impl Strategy<Value = f64> {
    (0u32..=16).prop_map(|n| f64::from(n) * 0.25)
}

fn table(max_len: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((0i64..8, 0i64..8, weight()), 1..max_len).prop_map(|rows| {
        rows.into_iter()
            .map(|(src, dst, w)| Record::from((src, dst, 0, 0.5, w)))
            .collect()
    })
}

/// Reference answer: first index holding the greatest non-sentinel weight.
fn expected_index(rows: &[Record]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, rec) in rows.iter().enumerate() {
        if rec.weight().is_sentinel() {
            continue;
        }
        match best {
            Some(b) if rows[b].weight() >= rec.weight() => {}
            _ => best = Some(idx),
        }
    }
    best
}

/// Reference answer for faithful seeding: start at row 0 whatever its weight,
/// then move only to a later non-sentinel weight that is strictly greater.
fn expected_faithful_index(rows: &[Record]) -> usize {
    let mut best = 0;
    for (idx, rec) in rows.iter().enumerate().skip(1) {
        if !rec.weight().is_sentinel() && rec.weight() > rows[best].weight() {
            best = idx;
        }
    }
    best
}

proptest! {
    #[test]
    fn faithful_matches_reference(rows in table(32)) {
        let idx = expected_faithful_index(&rows);
        prop_assert!(std::ptr::eq(find_max(&rows).unwrap(), &rows[idx]));
    }

    #[test]
    fn faithful_with_sentinel_seed_matches_reference(
        mut rows in table(32),
        heavy in 5u32..=16,
    ) {
        // Force the seed to the sentinel and plant a weight above it.
        rows[0] = Record::from((0i64, 0i64, 0, 0.5, 1));
        let at = rows.len() / 2;
        rows.insert(at.max(1), Record::from((9i64, 9i64, 0, 0.5, f64::from(heavy) * 0.25)));
        let idx = expected_faithful_index(&rows);
        prop_assert!(idx != 0);
        prop_assert!(std::ptr::eq(find_max(&rows).unwrap(), &rows[idx]));
    }


    #[test]
    fn result_is_always_a_member(rows in table(32)) {
        let best = find_max(&rows).unwrap();
        prop_assert!(rows.iter().any(|r| std::ptr::eq(r, best)));
    }

    #[test]
    fn strict_matches_reference(rows in table(32)) {
        let strict = Scanner { seed: SeedPolicy::Strict, ..Scanner::default() };
        match expected_index(&rows) {
            Some(idx) => prop_assert!(std::ptr::eq(strict.scan(&rows).unwrap(), &rows[idx])),
            None => prop_assert!(strict.scan(&rows).is_err()),
        }
    }

    #[test]
    fn all_sentinel_tables_yield_first_row(len in 1usize..16) {
        let rows: Vec<Record> = (0..len)
            .map(|i| Record::from((i64::try_from(i).unwrap(), 0, 0, 0.0, 1)))
            .collect();
        prop_assert!(std::ptr::eq(find_max(&rows).unwrap(), &rows[0]));
    }
}

#[test]
fn faithful_agrees_with_strict_when_seed_is_eligible() {
    const SEED_BYTES: [u8; 32] = [
        0x17, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0,
    ];

    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    let mut runner = TestRunner::new_with_rng(PropConfig::default(), rng);

    runner
        .run(&table(24), |rows| {
            let faithful = find_max(&rows).unwrap();
            if rows[0].weight().is_sentinel() {
                // Nothing can beat a seed of exactly 1 except weights above it.
                let any_above = rows
                    .iter()
                    .any(|r| !r.weight().is_sentinel() && *r.weight() > Field::Int(1));
                if !any_above {
                    prop_assert!(std::ptr::eq(faithful, &rows[0]));
                }
            } else {
                let strict = Scanner {
                    seed: SeedPolicy::Strict,
                    ..Scanner::default()
                };
                prop_assert!(std::ptr::eq(faithful, strict.scan(&rows).unwrap()));
            }
            Ok(())
        })
        .expect("property holds under pinned seed");
}
