pub mod query;

pub use query::{LimitOffsetQuery, SortOrder};
