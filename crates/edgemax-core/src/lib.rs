// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Edge records and the sentinel-aware maximum finder.
//!
//! A [`Record`] is a fixed-arity row of at least five [`Field`]s: four display
//! values (edge endpoints and attributes) followed by a weight. The finder
//! scans a slice of records once and returns the record with the greatest key,
//! never promoting a record whose key equals the sentinel `1`.
//!
//! # Seeding
//!
//! The running maximum starts at the first record whether or not its key is the
//! sentinel ([`SeedPolicy::Faithful`]). A table where every key is `1` therefore
//! yields its first row. [`SeedPolicy::Strict`] seeds with the first
//! non-sentinel record instead and reports [`ScanError::NoEligibleRecord`] when
//! there is none.
//!
//! # Modules
//!
//! - [`field`] - dynamically typed scalar values and their display rules
//! - [`record`] - the record row type
//! - [`key`] - key selection and the [`ScanKey`] sentinel test
//! - [`finder`] - the linear scan
//! - [`render`] - `edge(f0, f1, f2, f3).` output
//! - [`table`] - built-in and JSON record tables
#![forbid(unsafe_code)]

pub mod field;
pub mod finder;
pub mod key;
pub mod record;
pub mod render;
pub mod table;

pub use field::Field;
pub use finder::{find_max, find_max_by, find_max_with, ScanError, Scanner, SeedPolicy};
pub use key::{KeySelector, ScanKey};
pub use record::{Record, RecordError, MIN_ARITY};
pub use table::TableError;
