//! Reusable view sections composed by the pages.

mod charts;
mod gallery;
mod pagination;
mod product_card;
mod range_slider;
mod rating;

pub use charts::{DiscountVsRating, PriceHistogram};
pub use gallery::GalleryView;
pub use pagination::{Pager, DEFAULT_PAGE_SIZE};
pub use product_card::ProductCard;
pub use range_slider::{clamp_max, clamp_min, RangeSlider};
pub use rating::Stars;
