// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Key selection for the maximum finder.

use crate::field::Field;
use crate::record::{Record, WEIGHT_FIELD};
use serde::{Deserialize, Serialize};

/// A comparable key that can tell whether it is the exclusion sentinel (`1`).
pub trait ScanKey: PartialOrd {
    /// True when the key equals the sentinel value `1`.
    fn is_sentinel(&self) -> bool;
}

impl ScanKey for Field {
    fn is_sentinel(&self) -> bool {
        *self == Field::Int(1)
    }
}

impl ScanKey for i64 {
    fn is_sentinel(&self) -> bool {
        *self == 1
    }
}

impl ScanKey for f64 {
    #[allow(clippy::float_cmp)]
    fn is_sentinel(&self) -> bool {
        *self == 1.0
    }
}

/// A whole record is never equal to the scalar sentinel.
impl ScanKey for Record {
    fn is_sentinel(&self) -> bool {
        false
    }
}

impl<T: ScanKey + ?Sized> ScanKey for &T {
    fn is_sentinel(&self) -> bool {
        (**self).is_sentinel()
    }
}

/// Which value of a record the finder compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeySelector {
    /// Compare the field at this index.
    Field(usize),
    /// Compare whole records lexicographically.
    Identity,
}

impl KeySelector {
    /// Field 4, the default key.
    pub const WEIGHT: Self = Self::Field(WEIGHT_FIELD);

    /// Map an optional field index to a selector; `None` selects [`KeySelector::Identity`].
    pub fn from_field(index: Option<usize>) -> Self {
        index.map_or(Self::Identity, Self::Field)
    }

    /// Inverse of [`KeySelector::from_field`].
    pub fn field_index(self) -> Option<usize> {
        match self {
            Self::Field(index) => Some(index),
            Self::Identity => None,
        }
    }
}

impl Default for KeySelector {
    fn default() -> Self {
        Self::WEIGHT
    }
}
