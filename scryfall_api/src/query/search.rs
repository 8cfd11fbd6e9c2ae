use url::Url;

use super::common::{Query, SortDirection, UniqueMode};

/// Parameters for `GET /cards/search`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: String,
    pub order: String,
    pub dir: SortDirection,
    pub unique: UniqueMode,
    pub page: u32,
}

impl SearchQuery {
    /// Creates a query for the given search string with the API defaults:
    /// sorted by name, automatic direction, unique cards, first page.
    pub fn new(q: &str) -> Self {
        Self {
            q: q.to_string(),
            order: "name".to_string(),
            dir: SortDirection::default(),
            unique: UniqueMode::default(),
            page: 1,
        }
    }

    pub fn with_order(mut self, order: &str) -> Self {
        self.order = order.to_string();
        self
    }

    pub fn with_direction(mut self, dir: SortDirection) -> Self {
        self.dir = dir;
        self
    }

    pub fn with_unique(mut self, unique: UniqueMode) -> Self {
        self.unique = unique;
        self
    }
}

impl Query for SearchQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("q", &self.q)
            .append_pair("order", &self.order)
            .append_pair("dir", &self.dir.to_string())
            .append_pair("unique", &self.unique.to_string())
            .append_pair("page", &self.page.to_string());
        url
    }

    fn page(&self) -> u32 {
        self.page
    }

    fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}
