// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `edge(f0, f1, f2, f3).` output for a selected record.

use crate::record::Record;
use std::io;

/// Render the display fields of `record` as an `edge(...)` fact.
pub fn edge_line(record: &Record) -> String {
    let args: Vec<String> = record
        .display_fields()
        .iter()
        .map(ToString::to_string)
        .collect();
    format!("edge({}).", args.join(", "))
}

/// Write [`edge_line`] followed by a newline.
pub fn write_edge<W: io::Write>(out: &mut W, record: &Record) -> io::Result<()> {
    writeln!(out, "{}", edge_line(record))
}
