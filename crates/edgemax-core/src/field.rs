// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar values stored in a [`Record`](crate::Record).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single record field.
///
/// Integers and floats compare numerically across variants, so `Int(1)` equals
/// `Float(1.0)`. Text compares with text only; comparing text with a number
/// yields no ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    /// Whole number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Opaque text label.
    Text(String),
}

/// 2^63 as an `f64`; the first float above every `i64`.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Exact ordering of an integer against a float, without rounding the integer.
#[allow(clippy::cast_possible_truncation)]
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I64_UPPER {
        return Some(Ordering::Less);
    }
    if float < -I64_UPPER {
        return Some(Ordering::Greater);
    }
    // In range, so the truncated value converts to i64 exactly.
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)),
        ord => Some(ord),
    }
}

impl PartialEq for Field {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => {
                cmp_int_float(*a, *b) == Some(Ordering::Equal)
            }
            _ => false,
        }
    }
}

impl PartialOrd for Field {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(*a, *b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            // Floats always keep a fractional part: `9.0`, not `9`.
            Self::Float(v) if v.is_nan() => f.write_str("nan"),
            Self::Float(v) if v.is_infinite() => {
                f.write_str(if v.is_sign_negative() { "-inf" } else { "inf" })
            }
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for Field {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Field {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for Field {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Field {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Field {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Field {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}
