//! Routed pages.

mod catalog;
mod detail;
mod search;
mod stats;

pub use catalog::CatalogPage;
pub use detail::DetailPage;
pub use search::SearchPage;
pub use stats::StatsPage;
