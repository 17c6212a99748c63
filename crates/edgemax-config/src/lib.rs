// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stored scan preferences for edgemax, behind a small storage port.
//!
//! [`ConfigStore`] is the port; [`FsConfigStore`] and [`MemoryConfigStore`] are
//! the adapters. [`ConfigService`] handles JSON encoding on top of any store.
#![forbid(unsafe_code)]

pub mod config;
pub mod fs;
pub mod memory;
pub mod prefs;

pub use config::{ConfigError, ConfigService, ConfigStore};
pub use fs::FsConfigStore;
pub use memory::MemoryConfigStore;
pub use prefs::{ScanPrefs, SCAN_PREFS_KEY};
