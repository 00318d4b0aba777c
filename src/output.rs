//! Terminal rendering for command results
//!
//! Human output keeps the fixed-width layout of the original tool:
//! a banner, one line per record, and a trailing blank line for `list`.

use std::io::Write;
use serde::Serialize;
use crate::inventory::NamespaceQuery;
use crate::record::Record;

pub const BANNER: &str = "
-------------------------------------------
-       Denko Inventory Management        -
-------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json { OutputMode::Json } else { OutputMode::Human }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, OutputMode::Human)
    }
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    ok: bool,
    command: &'a str,
    data: T,
}

/// Write a JSON success envelope for `command`
pub fn emit_success<W: Write, T: Serialize>(out: &mut W, command: &str, data: T) -> anyhow::Result<()> {
    let envelope = Envelope { ok: true, command, data };
    serde_json::to_writer(&mut *out, &envelope)?;
    writeln!(out)?;
    Ok(())
}

/// Banner, one line per record, then a blank line
pub fn render_list<W: Write>(out: &mut W, records: &[Record]) -> std::io::Result<()> {
    writeln!(out, "{}", BANNER)?;
    for record in records {
        write!(out, "{}", record.output())?;
    }
    writeln!(out)
}

pub fn render_entries<W: Write>(out: &mut W, count: usize) -> std::io::Result<()> {
    writeln!(out, "Total entries tracked {:<3}", count)
}

/// Namespace name followed by its records, tab-indented
pub fn render_namespace<W: Write>(out: &mut W, query: &NamespaceQuery) -> std::io::Result<()> {
    match query {
        NamespaceQuery::NoNamespace => writeln!(out, "No namespace given"),
        NamespaceQuery::Found { namespace, records } => {
            writeln!(out, "{}", namespace)?;
            for record in records {
                write!(out, "\t{}", record.output())?;
            }
            Ok(())
        }
    }
}
