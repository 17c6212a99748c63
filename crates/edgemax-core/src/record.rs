// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-arity record rows.

use crate::field::Field;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest arity a record may have: four display fields plus the weight.
pub const MIN_ARITY: usize = 5;

/// Number of leading fields rendered in `edge(...)` output.
pub const DISPLAY_FIELDS: usize = 4;

/// Index of the default sort key.
pub const WEIGHT_FIELD: usize = 4;

/// Error type for record construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The row is shorter than [`MIN_ARITY`].
    #[error("record has {arity} fields, need at least {MIN_ARITY}")]
    TooFewFields {
        /// Number of fields supplied.
        arity: usize,
    },
}

/// One candidate edge: display fields `0..4`, then the weight at index 4.
///
/// Equality is positional. Ordering is lexicographic over the fields, which is
/// what the identity key compares.
#[derive(Debug, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Vec<Field>", into = "Vec<Field>")]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    /// Build a record, rejecting rows shorter than [`MIN_ARITY`].
    pub fn new(fields: Vec<Field>) -> Result<Self, RecordError> {
        if fields.len() < MIN_ARITY {
            return Err(RecordError::TooFewFields {
                arity: fields.len(),
            });
        }
        Ok(Self { fields })
    }

    /// All fields in positional order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Field at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Number of fields (always at least [`MIN_ARITY`]).
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// The default sort key (field 4).
    pub fn weight(&self) -> &Field {
        &self.fields[WEIGHT_FIELD]
    }

    /// The leading fields shown in `edge(...)` output.
    pub fn display_fields(&self) -> &[Field] {
        &self.fields[..DISPLAY_FIELDS]
    }
}

impl TryFrom<Vec<Field>> for Record {
    type Error = RecordError;

    fn try_from(fields: Vec<Field>) -> Result<Self, Self::Error> {
        Self::new(fields)
    }
}

impl From<Record> for Vec<Field> {
    fn from(record: Record) -> Self {
        record.fields
    }
}

impl<A, B, C, D, E> From<(A, B, C, D, E)> for Record
where
    A: Into<Field>,
    B: Into<Field>,
    C: Into<Field>,
    D: Into<Field>,
    E: Into<Field>,
{
    fn from((a, b, c, d, e): (A, B, C, D, E)) -> Self {
        Self {
            fields: vec![a.into(), b.into(), c.into(), d.into(), e.into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rows_are_rejected() {
        let err = Record::new(vec![Field::Int(0); 4]).unwrap_err();
        assert_eq!(err, RecordError::TooFewFields { arity: 4 });
        assert_eq!(err.to_string(), "record has 4 fields, need at least 5");
    }

    #[test]
    fn wide_rows_are_accepted() {
        let rec = Record::new(vec![Field::Int(7); 6]).unwrap();
        assert_eq!(rec.arity(), 6);
        assert_eq!(rec.get(5), Some(&Field::Int(7)));
        assert_eq!(rec.get(6), None);
    }

    #[test]
    fn tuple_conversion_places_weight_last() {
        let rec = Record::from((0, 1, "knows", 0.5, 9.0));
        assert_eq!(rec.weight(), &Field::Float(9.0));
        assert_eq!(rec.display_fields().len(), DISPLAY_FIELDS);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let lo = Record::from((0, 9, 9, 9, 9));
        let hi = Record::from((1, 0, 0, 0, 0));
        assert!(hi > lo);
    }

    #[test]
    fn deserialize_enforces_arity() {
        let ok: Record = serde_json::from_str("[0, 1, 2, 0.5, 9.0]").unwrap();
        assert_eq!(ok, Record::from((0, 1, 2, 0.5, 9.0)));
        assert!(serde_json::from_str::<Record>("[0, 1, 2]").is_err());
    }
}
