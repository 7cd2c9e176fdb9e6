//! Product wire model and derived presentation rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A scraped marketplace item as returned by the backend.
///
/// Immutable from the client's perspective: the app only displays products,
/// it never mutates or writes them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(deserialize_with = "de_decimal")]
    pub price: f64,
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub discount_price: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews_count: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub product_url: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub search_query: Option<String>,
}

/// One gallery image reference. Several may describe the same product; the
/// gallery dedups by URL when assembling candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    /// Size tag reported by the scraper ("big", "original", ...).
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub is_main: bool,
}

impl Product {
    /// Whether a real discount applies: a discount price exists and is
    /// strictly below the list price.
    pub fn has_discount(&self) -> bool {
        matches!(self.discount_price, Some(d) if d < self.price)
    }

    /// The price to show on cards and the detail page.
    pub fn display_price(&self) -> f64 {
        if self.has_discount() {
            self.discount_price.unwrap_or(self.price)
        } else {
            self.price
        }
    }

    /// Discount badge value, rounded to the nearest integer percent.
    /// `None` when no discount applies.
    pub fn discount_percentage(&self) -> Option<u32> {
        if !self.has_discount() {
            return None;
        }
        let discount = self.discount_price?;
        Some((((self.price - discount) / self.price) * 100.0).round() as u32)
    }

    pub fn price_label(&self) -> String {
        format_price(self.display_price())
    }

    /// Struck-through original price, only when a discount is shown.
    pub fn old_price_label(&self) -> Option<String> {
        self.has_discount().then(|| format_price(self.price))
    }

    pub fn availability_status(&self) -> &'static str {
        match self.quantity {
            None => "Availability unknown",
            Some(0) => "Out of stock",
            Some(1..=5) => "Low stock",
            Some(_) => "In stock",
        }
    }

    pub fn availability_class(&self) -> &'static str {
        match self.quantity {
            None => "stock-unknown",
            Some(0) => "stock-out",
            Some(1..=5) => "stock-low",
            Some(_) => "stock-available",
        }
    }

    pub fn created_label(&self) -> Option<String> {
        self.created_at
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
    }
}

/// Format a price in rubles, dropping the cents when they are zero.
pub fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0} ₽")
    } else {
        format!("{value:.2} ₽")
    }
}

/// Decimal fields arrive either as JSON numbers or as quoted decimal
/// strings ("1234.00"), depending on the backend's serializer settings.
#[derive(Deserialize)]
#[serde(untagged)]
enum Decimal {
    Num(f64),
    Text(String),
}

impl Decimal {
    fn value(self) -> Option<f64> {
        match self {
            Decimal::Num(n) => Some(n),
            Decimal::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse().ok()
                }
            }
        }
    }
}

fn de_decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = Decimal::deserialize(deserializer)?;
    raw.value()
        .ok_or_else(|| serde::de::Error::custom("invalid decimal value"))
}

pub(crate) fn de_opt_decimal<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    let raw = Option::<Decimal>::deserialize(deserializer)?;
    Ok(raw.and_then(Decimal::value))
}

/// Timestamps are informational only, so a format the backend changes under
/// us degrades to "no date" instead of failing the whole product.
fn de_opt_datetime<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(price: f64, discount: Option<f64>) -> Product {
        Product {
            id: 1,
            name: "Test".into(),
            category: "shoes".into(),
            price,
            discount_price: discount,
            rating: None,
            reviews_count: None,
            created_at: None,
            image_url: None,
            images: Vec::new(),
            product_url: None,
            quantity: None,
            search_query: None,
        }
    }

    #[test]
    fn discount_requires_strictly_lower_price() {
        assert!(product(100.0, Some(80.0)).has_discount());
        assert!(!product(100.0, Some(100.0)).has_discount());
        assert!(!product(100.0, Some(120.0)).has_discount());
        assert!(!product(100.0, None).has_discount());
    }

    #[test]
    fn display_price_prefers_valid_discount() {
        assert_eq!(product(100.0, Some(80.0)).display_price(), 80.0);
        assert_eq!(product(100.0, Some(120.0)).display_price(), 100.0);
        assert_eq!(product(100.0, None).display_price(), 100.0);
    }

    #[test]
    fn discount_percentage_rounds_to_nearest_integer() {
        assert_eq!(product(100.0, Some(80.0)).discount_percentage(), Some(20));
        // 1/3 off -> 33.33..% -> 33
        assert_eq!(product(300.0, Some(200.0)).discount_percentage(), Some(33));
        // 2/3 off -> 66.66..% -> 67
        assert_eq!(product(300.0, Some(100.0)).discount_percentage(), Some(67));
        assert_eq!(product(100.0, None).discount_percentage(), None);
    }

    #[test]
    fn price_labels() {
        let p = product(1290.0, Some(999.5));
        assert_eq!(p.price_label(), "999.50 ₽");
        assert_eq!(p.old_price_label().as_deref(), Some("1290 ₽"));
        assert_eq!(product(500.0, None).old_price_label(), None);
    }

    #[test]
    fn decimal_fields_accept_strings_and_numbers() {
        let from_strings: Product = serde_json::from_value(json!({
            "id": 7,
            "name": "Sneakers",
            "price": "4999.00",
            "discount_price": "3499.50",
            "rating": "4.50"
        }))
        .unwrap();
        assert_eq!(from_strings.price, 4999.0);
        assert_eq!(from_strings.discount_price, Some(3499.5));
        assert_eq!(from_strings.rating, Some(4.5));

        let from_numbers: Product = serde_json::from_value(json!({
            "id": 7,
            "name": "Sneakers",
            "price": 4999,
            "discount_price": null
        }))
        .unwrap();
        assert_eq!(from_numbers.price, 4999.0);
        assert_eq!(from_numbers.discount_price, None);
    }

    #[test]
    fn unparseable_created_at_degrades_to_none() {
        let p: Product = serde_json::from_value(json!({
            "id": 1,
            "name": "x",
            "price": 10,
            "created_at": "not a date"
        }))
        .unwrap();
        assert_eq!(p.created_at, None);

        let p: Product = serde_json::from_value(json!({
            "id": 1,
            "name": "x",
            "price": 10,
            "created_at": "2024-03-01T12:30:00+03:00"
        }))
        .unwrap();
        assert_eq!(p.created_label().as_deref(), Some("2024-03-01 09:30"));
    }

    #[test]
    fn availability_from_quantity() {
        let mut p = product(10.0, None);
        assert_eq!(p.availability_class(), "stock-unknown");
        p.quantity = Some(0);
        assert_eq!(p.availability_status(), "Out of stock");
        p.quantity = Some(3);
        assert_eq!(p.availability_class(), "stock-low");
        p.quantity = Some(40);
        assert_eq!(p.availability_status(), "In stock");
    }

    #[test]
    fn image_type_field_is_renamed() {
        let img: ProductImage = serde_json::from_value(json!({
            "url": "https://img.example/1.webp",
            "size": "big",
            "type": "webp",
            "is_main": true
        }))
        .unwrap();
        assert_eq!(img.kind.as_deref(), Some("webp"));
        assert!(img.is_main);
    }
}
