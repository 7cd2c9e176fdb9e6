//! Wire data models and client-side filter state.

mod product;
mod query;
mod response;

pub use product::{format_price, Product, ProductImage};
pub use query::{page_from_url, FilterDraft, ProductQuery, Sort, SortField};
pub use response::{
    ChartData, DiscountPoint, DiscountStats, HistogramBucket, ParseRequest, ParseStarted,
    PriceRange, PriceStats, ProductDetail, ProductList, RatingStats, StatsSummary,
};
