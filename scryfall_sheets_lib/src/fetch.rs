//! Paginated Fetcher: walks `/cards/search` page by page until enough cards
//! are collected or the API reports no further pages.

use async_trait::async_trait;
use scryfall_api::types::{Card, SearchPage};
use scryfall_api::{Client, Query, SearchQuery};

use crate::error::ScryfallError;

/// Source of search result pages. Implemented by the HTTP client; tests
/// substitute scripted pages.
#[async_trait]
pub trait PageSource {
    async fn fetch_page(&self, query: &SearchQuery) -> Result<SearchPage, scryfall_api::Error>;
}

#[async_trait]
impl PageSource for Client {
    async fn fetch_page(&self, query: &SearchQuery) -> Result<SearchPage, scryfall_api::Error> {
        self.search(query).await
    }
}

/// Fetches pages strictly in order, starting at page 1, until `has_more` is
/// false or more than `target` cards have been accumulated.
///
/// Any failure discards everything fetched so far. On success the result may
/// hold more than `target` cards; truncation is up to the caller.
pub async fn fetch_cards<S>(
    source: &S,
    query: &SearchQuery,
    target: usize,
) -> Result<Vec<Card>, ScryfallError>
where
    S: PageSource + Sync + ?Sized,
{
    let mut cards: Vec<Card> = Vec::new();
    let mut page = 1u32;

    loop {
        let page_query = query.clone().with_page(page);
        let resp = source.fetch_page(&page_query).await?;

        for warning in &resp.warnings {
            tracing::warn!("Scryfall: {}", warning);
        }

        let has_more = resp.has_more;
        let data = match resp.data {
            Some(data) if !data.is_empty() => data,
            _ => return Err(ScryfallError::NoResults),
        };

        tracing::debug!(
            "Page {}: {} cards (total reported: {:?})",
            page,
            data.len(),
            resp.total_cards
        );
        cards.extend(data);

        if !has_more || cards.len() > target {
            break;
        }
        page += 1;
    }

    tracing::info!("Fetched {} cards over {} page(s)", cards.len(), page);
    Ok(cards)
}
