//! Library layer for Scryfall sheets: turns a spreadsheet-style search call
//! into a matrix of cell values.
//!
//! The pipeline is [`request::QueryBuilder`] → [`fetch::fetch_cards`] →
//! [`project::project_rows`], composed by [`scryfall`].

pub mod error;
pub mod fetch;
pub mod fields;
pub mod project;
pub mod request;

pub use scryfall_api;
pub use scryfall_api::types;
pub use scryfall_api::{Client, SearchQuery, SortDirection, UniqueMode};

pub use error::ScryfallError;
pub use fetch::{fetch_cards, PageSource};
pub use fields::FieldList;
pub use project::{Cell, Row};
pub use request::{QueryBuilder, SearchArgs, SearchRequest, MAX_RESULTS};

use serde::Serialize;

/// The output of one search: the resolved field names (one per column)
/// and one row per card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultMatrix {
    pub fields: FieldList,
    pub rows: Vec<Row>,
}

/// Runs a complete search with the default alias tables.
pub async fn scryfall<S>(source: &S, args: &SearchArgs) -> Result<ResultMatrix, ScryfallError>
where
    S: PageSource + Sync + ?Sized,
{
    run_search(&QueryBuilder::default(), source, args).await
}

/// Runs a complete search: build, fetch every needed page, truncate, project.
pub async fn run_search<S>(
    builder: &QueryBuilder,
    source: &S,
    args: &SearchArgs,
) -> Result<ResultMatrix, ScryfallError>
where
    S: PageSource + Sync + ?Sized,
{
    let request = builder.build(args)?;
    tracing::debug!(
        "Searching {:?} for {} result(s), fields {:?}",
        request.query.q,
        request.num_results,
        request.fields
    );

    let mut cards = fetch_cards(source, &request.query, request.num_results).await?;
    cards.truncate(request.num_results);

    let rows = project::project_rows(&cards, &request.fields);
    Ok(ResultMatrix {
        fields: request.fields,
        rows,
    })
}
