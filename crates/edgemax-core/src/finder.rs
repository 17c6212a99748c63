// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Single-pass maximum finder with sentinel exclusion.
//!
//! Keys equal to `1` are never promoted to the running maximum. Updates use a
//! strict `>`, so the earliest of several equal maxima wins. Keys that do not
//! compare (text against numbers, NaN) are never promoted either.

use crate::key::{KeySelector, ScanKey};
use crate::record::Record;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

/// Error type for scans.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The sequence had no elements.
    #[error("empty input: cannot take the maximum of an empty sequence")]
    EmptyInput,
    /// The key selector addresses a field a record does not have.
    #[error("key field {index} is out of range for a record with {arity} fields")]
    FieldOutOfRange {
        /// Requested field index.
        index: usize,
        /// Arity of the first offending record.
        arity: usize,
    },
    /// Strict seeding found only sentinel keys.
    #[error("no eligible record: every key equals the sentinel")]
    NoEligibleRecord,
}

/// How the running maximum is seeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// Seed with the first element even when its key is the sentinel.
    #[default]
    Faithful,
    /// Seed with the first element whose key is not the sentinel.
    Strict,
}

/// Return the element of `sequence` with the greatest key, skipping sentinel keys.
///
/// ```
/// use edgemax_core::{find_max_by, SeedPolicy};
///
/// let weights = [1.0_f64, 0.25, 0.75, 0.5];
/// let best = find_max_by(&weights, |w| *w, SeedPolicy::Faithful).unwrap();
/// assert_eq!(*best, 1.0); // the seed is kept; 0.75 never beats it
///
/// let best = find_max_by(&weights, |w| *w, SeedPolicy::Strict).unwrap();
/// assert_eq!(*best, 0.75);
/// ```
pub fn find_max_by<'a, T, K, F>(
    sequence: &'a [T],
    key: F,
    seed: SeedPolicy,
) -> Result<&'a T, ScanError>
where
    F: Fn(&'a T) -> K,
    K: ScanKey,
{
    if sequence.is_empty() {
        return Err(ScanError::EmptyInput);
    }

    let (start, mut best, mut best_key) = match seed {
        SeedPolicy::Faithful => (0, &sequence[0], key(&sequence[0])),
        SeedPolicy::Strict => sequence
            .iter()
            .enumerate()
            .find_map(|(idx, item)| {
                let k = key(item);
                (!k.is_sentinel()).then_some((idx, item, k))
            })
            .ok_or(ScanError::NoEligibleRecord)?,
    };
    trace!(seed_index = start, ?seed, "seeded running maximum");

    for (idx, item) in sequence.iter().enumerate().skip(start + 1) {
        let k = key(item);
        if k.is_sentinel() {
            continue;
        }
        if k > best_key {
            debug!(index = idx, "promoted record");
            best = item;
            best_key = k;
        }
    }

    Ok(best)
}

/// Maximum by the default key (field 4), seeding faithfully.
pub fn find_max(sequence: &[Record]) -> Result<&Record, ScanError> {
    Scanner::default().scan(sequence)
}

/// Maximum by `key`; `None` compares whole records.
pub fn find_max_with(
    sequence: &[Record],
    key: Option<KeySelector>,
) -> Result<&Record, ScanError> {
    Scanner {
        key: key.unwrap_or(KeySelector::Identity),
        ..Scanner::default()
    }
    .scan(sequence)
}

/// Scan options bundled for callers that take them from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scanner {
    /// Key to compare.
    pub key: KeySelector,
    /// Seeding policy.
    pub seed: SeedPolicy,
}

impl Scanner {
    /// Run the scan over `sequence`.
    pub fn scan<'a>(&self, sequence: &'a [Record]) -> Result<&'a Record, ScanError> {
        if sequence.is_empty() {
            return Err(ScanError::EmptyInput);
        }
        match self.key {
            KeySelector::Field(index) => {
                if let Some(short) = sequence.iter().find(|r| r.arity() <= index) {
                    return Err(ScanError::FieldOutOfRange {
                        index,
                        arity: short.arity(),
                    });
                }
                find_max_by(sequence, |r| &r.fields()[index], self.seed)
            }
            KeySelector::Identity => find_max_by(sequence, |r| r, self.seed),
        }
    }
}
