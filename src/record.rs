//! Record types - the single tracked entity
//!
//! A record is one inventory line: an item name (the key), a signed
//! amount, and a namespace used for grouped listing.

use serde::{Deserialize, Serialize};

/// Namespace assigned when `create` is given none.
pub const DEFAULT_NAMESPACE: &str = "Misc";

/// Width the item column is padded to in listings.
pub const ITEM_WIDTH: usize = 20;

/// Width the amount column is padded to in listings.
pub const AMOUNT_WIDTH: usize = 4;

/// One tracked inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Title-cased item name, unique across the table
    pub item: String,
    /// Current count. May go negative.
    pub amount: i64,
    /// Grouping tag
    pub namespace: String,
}

impl Record {
    /// Build a record, normalizing the item and namespace.
    ///
    /// An empty namespace falls back to [`DEFAULT_NAMESPACE`].
    pub fn new(item: &str, amount: i64, namespace: Option<&str>) -> Self {
        let namespace = match namespace {
            Some(ns) if !ns.is_empty() => title_case(ns),
            _ => DEFAULT_NAMESPACE.to_string(),
        };

        Self {
            item: title_case(item),
            amount,
            namespace,
        }
    }

    /// Fixed-width listing line, newline included.
    pub fn output(&self) -> String {
        format!("{}\n", self)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "- {:<iw$}| {:<aw$} -| {}",
            self.item,
            self.amount,
            self.namespace,
            iw = ITEM_WIDTH,
            aw = AMOUNT_WIDTH,
        )
    }
}

/// Title-case every word of `input`.
///
/// A word starts at the beginning of the string or after a separator
/// (whitespace or ASCII punctuation other than `_`). Its first letter is
/// upper-cased and the rest lower-cased, so `"WIDGET"`, `"widget"` and
/// `"Widget"` all map to the same key.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        at_word_start = is_separator(c);
    }

    out
}

fn is_separator(c: char) -> bool {
    if c == '_' {
        return false;
    }
    c.is_whitespace() || c.is_ascii_punctuation()
}
