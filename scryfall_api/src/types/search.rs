use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single card as returned by the API. Cards are kept as an open JSON
/// mapping so callers can look up arbitrary, possibly absent, fields.
pub type Card = Map<String, Value>;

/// One page of `GET /cards/search`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SearchPage {
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub total_cards: Option<u64>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<Card>>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl SearchPage {
    /// Number of cards on this page, zero when `data` is absent.
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The error object the API returns alongside non-success statuses.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub object: Option<String>,
    pub code: String,
    pub status: u16,
    pub details: String,
    #[serde(default)]
    pub warnings: Vec<String>,
}
