//! Alias tables translating the names people type into the API's field names.
//!
//! Output fields and sort orders are resolved through separate tables. Names
//! without an alias pass through unchanged.

use std::collections::HashMap;

/// Output field aliases: what users try mapped to the card JSON path.
pub const FIELD_ALIASES: &[(&str, &str)] = &[
    ("flavor", "flavor_text"),
    ("type", "type_line"),
    ("mana", "mana_cost"),
    ("o", "oracle_text"),
    ("oracle", "oracle_text"),
    ("color", "color_identity"),
    ("colors", "color_identity"),
    ("price", "prices.usd"),
    ("uri", "scryfall_uri"),
    ("url", "scryfall_uri"),
];

/// Sort order aliases: output-style price names mapped to the API's sort keys.
pub const SORT_ALIASES: &[(&str, &str)] = &[
    ("price", "usd"),
    ("prices.eur", "eur"),
    ("prices.usd", "usd"),
];

/// Field requested when the caller names none.
pub const DEFAULT_FIELD: &str = "name";

/// Ordered list of resolved field paths. Order determines output column order.
pub type FieldList = Vec<String>;

/// An immutable name-to-name lookup table.
#[derive(Debug, Clone)]
pub struct AliasTable {
    map: HashMap<&'static str, &'static str>,
}

impl AliasTable {
    pub fn new(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            map: entries.iter().copied().collect(),
        }
    }

    /// Returns the aliased name, or `name` itself when it has no alias.
    pub fn resolve(&self, name: &str) -> String {
        self.map
            .get(name)
            .map(|s| s.to_string())
            .unwrap_or_else(|| name.to_string())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Splits a field string on any run of whitespace or commas.
pub fn split_fields(input: &str) -> Vec<String> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
