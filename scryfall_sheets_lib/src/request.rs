//! Query Builder: turns raw function arguments into a [`SearchRequest`].

use scryfall_api::{SearchQuery, SortDirection, UniqueMode};

use crate::error::ScryfallError;
use crate::fields::{
    split_fields, AliasTable, FieldList, DEFAULT_FIELD, FIELD_ALIASES, SORT_ALIASES,
};

/// Hard ceiling on the number of rows a single search may return.
pub const MAX_RESULTS: usize = 700;
pub const DEFAULT_NUM_RESULTS: usize = 150;
pub const DEFAULT_ORDER: &str = "name";

/// The raw arguments of one invocation, as supplied by the caller.
/// Everything but `query` may be omitted.
#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    pub query: Option<String>,
    pub fields: Option<String>,
    pub num_results: Option<i64>,
    pub order: Option<String>,
    pub dir: Option<String>,
    pub unique: Option<String>,
}

impl SearchArgs {
    pub fn new(query: &str) -> Self {
        Self {
            query: Some(query.to_string()),
            ..Default::default()
        }
    }

    pub fn with_fields(mut self, fields: &str) -> Self {
        self.fields = Some(fields.to_string());
        self
    }

    pub fn with_num_results(mut self, num_results: i64) -> Self {
        self.num_results = Some(num_results);
        self
    }

    pub fn with_order(mut self, order: &str) -> Self {
        self.order = Some(order.to_string());
        self
    }

    pub fn with_dir(mut self, dir: &str) -> Self {
        self.dir = Some(dir.to_string());
        self
    }

    pub fn with_unique(mut self, unique: &str) -> Self {
        self.unique = Some(unique.to_string());
        self
    }
}

/// A normalized search: the API query, the resolved output fields, and the
/// clamped number of rows wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: SearchQuery,
    pub fields: FieldList,
    pub num_results: usize,
}

/// Builds [`SearchRequest`]s using a pair of alias tables.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    field_aliases: AliasTable,
    sort_aliases: AliasTable,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new(AliasTable::new(FIELD_ALIASES), AliasTable::new(SORT_ALIASES))
    }
}

impl QueryBuilder {
    pub fn new(field_aliases: AliasTable, sort_aliases: AliasTable) -> Self {
        Self {
            field_aliases,
            sort_aliases,
        }
    }

    /// Resolves each requested field through the field alias table, keeping order.
    pub fn resolve_fields(&self, fields: &str) -> FieldList {
        let mut resolved: FieldList = split_fields(fields)
            .iter()
            .map(|f| self.field_aliases.resolve(f))
            .collect();
        if resolved.is_empty() {
            resolved.push(DEFAULT_FIELD.to_string());
        }
        resolved
    }

    pub fn resolve_order(&self, order: &str) -> String {
        self.sort_aliases.resolve(order.trim())
    }

    /// Validates and normalizes the arguments. Performs no I/O.
    pub fn build(&self, args: &SearchArgs) -> Result<SearchRequest, ScryfallError> {
        let q = match args.query.as_deref() {
            Some(q) if !q.trim().is_empty() => q,
            _ => return Err(ScryfallError::MissingQuery),
        };

        let dir = match args.dir.as_deref() {
            Some(dir) => dir.parse::<SortDirection>().map_err(|_| {
                ScryfallError::InvalidInput(format!(
                    "unknown direction '{}'. Valid: auto, asc, desc",
                    dir
                ))
            })?,
            None => SortDirection::default(),
        };

        let unique = match args.unique.as_deref() {
            Some(unique) => unique.parse::<UniqueMode>().map_err(|_| {
                ScryfallError::InvalidInput(format!(
                    "unknown unique mode '{}'. Valid: cards, art, prints",
                    unique
                ))
            })?,
            None => UniqueMode::default(),
        };

        let order = match args.order.as_deref().map(str::trim) {
            Some(order) if !order.is_empty() => self.resolve_order(order),
            _ => DEFAULT_ORDER.to_string(),
        };

        let fields = self.resolve_fields(args.fields.as_deref().unwrap_or(DEFAULT_FIELD));
        let num_results = clamp_num_results(args.num_results);

        Ok(SearchRequest {
            query: SearchQuery::new(q)
                .with_order(&order)
                .with_direction(dir)
                .with_unique(unique),
            fields,
            num_results,
        })
    }
}

/// Applies the default and clamps to `0..=MAX_RESULTS`.
pub fn clamp_num_results(requested: Option<i64>) -> usize {
    match requested {
        None => DEFAULT_NUM_RESULTS,
        Some(n) if n <= 0 => 0,
        Some(n) => (n as u64).min(MAX_RESULTS as u64) as usize,
    }
}
