mod common;
pub use self::common::{Query, SortDirection, UniqueMode};

mod search;
pub use self::search::SearchQuery;
