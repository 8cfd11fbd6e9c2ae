//! Shared query infrastructure: the [`Query`] trait plus the [`SortDirection`]
//! and [`UniqueMode`] enumerations accepted by the search endpoint.

use std::str::FromStr;

use url::Url;

/// Trait implemented by query builders that serialize themselves onto a URL.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns the 1-indexed page this query targets.
    fn page(&self) -> u32;

    /// Sets the page number (1-indexed).
    fn with_page(self, page: u32) -> Self
    where
        Self: Sized;
}

/// Direction the API sorts results in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Let the API pick the natural direction for the sort field. This is the default.
    #[default]
    Auto,
    Asc,
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Auto => "auto",
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            }
        )
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(SortDirection::Auto),
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// How the API collapses duplicate printings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UniqueMode {
    /// One result per card. This is the default.
    #[default]
    Cards,
    /// One result per unique artwork.
    Art,
    /// Every printing.
    Prints,
}

impl std::fmt::Display for UniqueMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                UniqueMode::Cards => "cards",
                UniqueMode::Art => "art",
                UniqueMode::Prints => "prints",
            }
        )
    }
}

impl FromStr for UniqueMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cards" => Ok(UniqueMode::Cards),
            "art" => Ok(UniqueMode::Art),
            "prints" => Ok(UniqueMode::Prints),
            _ => Err(()),
        }
    }
}
