//! Response envelopes and request bodies for the backend endpoints.

use serde::{Deserialize, Serialize};

use super::product::{de_opt_decimal, Product};

/// Paginated listing envelope from `GET /api/products/`.
///
/// `next`/`previous` are opaque page URLs; the client only extracts the
/// embedded page number from them. `categories` and `price_range` are facet
/// data for the filter controls.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductList {
    pub results: Vec<Product>,
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
}

/// Global price bounds driving the price slider.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        // Matches the backend fallback for an empty catalog.
        PriceRange {
            min: 0.0,
            max: 100_000.0,
        }
    }
}

/// `GET /api/products/{id}/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductDetail {
    pub product: Product,
    #[serde(default)]
    pub similar_products: Vec<Product>,
}

/// Generic chart payload: both chart endpoints wrap their series in `data`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartData<T> {
    pub data: Vec<T>,
}

/// One price histogram bucket, ordered server-side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistogramBucket {
    pub range: String,
    pub count: u32,
}

/// Average discount per rating band.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiscountPoint {
    pub rating_range: String,
    pub average_discount: f64,
}

/// `GET /api/products/statistics/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsSummary {
    pub total_products: u32,
    pub total_categories: u32,
    pub total_queries: u32,
    pub price_stats: PriceStats,
    pub rating_stats: RatingStats,
    pub discount_stats: DiscountStats,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceStats {
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub average: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub min: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RatingStats {
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub average: Option<f64>,
    #[serde(default)]
    pub products_with_rating: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiscountStats {
    #[serde(default)]
    pub products_with_discount: u32,
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub average_discount_percent: Option<f64>,
}

/// Body for `POST /api/start-parsing/`. Constructed on form submit, sent
/// once, discarded after the response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseRequest {
    pub search_query: String,
    pub category: String,
    pub limit: u32,
}

/// Success body for a scrape trigger.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParseStarted {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_listing_envelope_with_facets() {
        let list: ProductList = serde_json::from_value(json!({
            "results": [
                {"id": 1, "name": "A", "price": "100.00"},
                {"id": 2, "name": "B", "price": 250, "discount_price": 200}
            ],
            "count": 42,
            "next": "http://localhost:8000/api/products/?page=2",
            "previous": null,
            "categories": ["обувь", "одежда"],
            "price_range": {"min": 100, "max": 9900}
        }))
        .unwrap();
        assert_eq!(list.results.len(), 2);
        assert_eq!(list.count, 42);
        assert_eq!(list.previous, None);
        assert_eq!(list.categories.len(), 2);
        assert_eq!(list.price_range, Some(PriceRange { min: 100.0, max: 9900.0 }));
    }

    #[test]
    fn parses_chart_payloads() {
        let histogram: ChartData<HistogramBucket> = serde_json::from_value(json!({
            "data": [
                {"range": "0-1000₽", "count": 12},
                {"range": "1000-5000₽", "count": 5}
            ]
        }))
        .unwrap();
        assert_eq!(histogram.data[1].count, 5);

        let discount: ChartData<DiscountPoint> = serde_json::from_value(json!({
            "data": [{"rating_range": "4-5", "average_discount": 17.25}]
        }))
        .unwrap();
        assert_eq!(discount.data[0].average_discount, 17.25);
    }

    #[test]
    fn parses_stats_with_missing_aggregates() {
        let stats: StatsSummary = serde_json::from_value(json!({
            "total_products": 0,
            "total_categories": 0,
            "total_queries": 0,
            "price_stats": {"average": 0, "min": null, "max": null},
            "rating_stats": {"average": 0, "products_with_rating": 0},
            "discount_stats": {"products_with_discount": 0, "average_discount_percent": 0}
        }))
        .unwrap();
        assert_eq!(stats.price_stats.min, None);
        assert_eq!(stats.price_stats.average, Some(0.0));
    }

    #[test]
    fn detail_envelope_defaults_similar_to_empty() {
        let detail: ProductDetail = serde_json::from_value(json!({
            "product": {"id": 9, "name": "Solo", "price": 1}
        }))
        .unwrap();
        assert!(detail.similar_products.is_empty());
    }
}
