//! Error types for the library layer.

use thiserror::Error;

/// Errors surfaced to the caller of a search. Any of them aborts the whole
/// invocation; no partial rows are returned.
#[derive(Error, Debug)]
pub enum ScryfallError {
    /// The query argument was absent or blank. Raised before any network call.
    #[error("Must include a query")]
    MissingQuery,
    /// A page came back without any cards.
    #[error("No results from Scryfall")]
    NoResults,
    /// A page could not be fetched or parsed.
    #[error("Unable to retrieve results from Scryfall: {0}")]
    Fetch(#[source] scryfall_api::Error),
    /// An argument failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<scryfall_api::Error> for ScryfallError {
    fn from(e: scryfall_api::Error) -> Self {
        if e.is_not_found() {
            Self::NoResults
        } else {
            Self::Fetch(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(ScryfallError::MissingQuery.to_string(), "Must include a query");
        assert_eq!(ScryfallError::NoResults.to_string(), "No results from Scryfall");

        let err = ScryfallError::Fetch(scryfall_api::Error::RequestFailed);
        assert_eq!(
            err.to_string(),
            "Unable to retrieve results from Scryfall: Request failed"
        );

        let err = ScryfallError::InvalidInput("bad dir".to_string());
        assert!(err.to_string().contains("bad dir"));
    }

    #[test]
    fn not_found_maps_to_no_results() {
        let api = scryfall_api::Error::HttpStatus {
            status: 404,
            code: Some("not_found".to_string()),
            details: None,
        };
        assert!(matches!(ScryfallError::from(api), ScryfallError::NoResults));

        let api = scryfall_api::Error::Parse {
            message: "expected value".to_string(),
        };
        assert!(matches!(ScryfallError::from(api), ScryfallError::Fetch(_)));
    }
}
