//! Wire types for the Scryfall search API.

mod search;

pub use self::search::{ApiErrorBody, Card, SearchPage};
