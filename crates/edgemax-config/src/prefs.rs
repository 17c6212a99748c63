// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted scan preferences.

use edgemax_core::record::WEIGHT_FIELD;
use edgemax_core::{KeySelector, Scanner, SeedPolicy};
use serde::{Deserialize, Serialize};

/// Store key under which [`ScanPrefs`] are saved.
pub const SCAN_PREFS_KEY: &str = "scan";

/// Saved defaults for a scan. Missing JSON fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanPrefs {
    /// Key field index; `None` compares whole records.
    pub key_field: Option<usize>,
    /// Seed with the first non-sentinel record instead of the first record.
    pub strict: bool,
}

impl Default for ScanPrefs {
    fn default() -> Self {
        Self {
            key_field: Some(WEIGHT_FIELD),
            strict: false,
        }
    }
}

impl ScanPrefs {
    /// Scanner configured from these prefs.
    pub fn scanner(&self) -> Scanner {
        Scanner {
            key: KeySelector::from_field(self.key_field),
            seed: if self.strict {
                SeedPolicy::Strict
            } else {
                SeedPolicy::Faithful
            },
        }
    }
}

impl From<Scanner> for ScanPrefs {
    fn from(scanner: Scanner) -> Self {
        Self {
            key_field: scanner.key.field_index(),
            strict: scanner.seed == SeedPolicy::Strict,
        }
    }
}
