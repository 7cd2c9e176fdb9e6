//! Catalog filter state: the applied query sent to the backend, plus the
//! draft record bound to the filter form.

/// Field a product listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Name,
    Price,
    Rating,
    Reviews,
}

impl SortField {
    pub fn key(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::Name => "name",
            SortField::Price => "price",
            SortField::Rating => "rating",
            SortField::Reviews => "reviews",
        }
    }
}

/// Single active sort key, encoded on the wire as the field name with a
/// leading `-` for descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub descending: bool,
}

impl Default for Sort {
    fn default() -> Self {
        // Backend default: newest first.
        Sort {
            field: SortField::CreatedAt,
            descending: true,
        }
    }
}

impl Sort {
    pub const fn new(field: SortField, descending: bool) -> Self {
        Sort { field, descending }
    }

    pub fn as_param(&self) -> String {
        if self.descending {
            format!("-{}", self.field.key())
        } else {
            self.field.key().to_owned()
        }
    }

    pub fn parse(s: &str) -> Sort {
        let (descending, key) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let field = match key {
            "name" => SortField::Name,
            "price" => SortField::Price,
            "rating" => SortField::Rating,
            "reviews" => SortField::Reviews,
            _ => SortField::CreatedAt,
        };
        Sort { field, descending }
    }

    /// Sort options offered by the catalog header, in display order.
    pub const OPTIONS: &'static [(&'static str, Sort)] = &[
        ("Newest first", Sort::new(SortField::CreatedAt, true)),
        ("Name A-Z", Sort::new(SortField::Name, false)),
        ("Name Z-A", Sort::new(SortField::Name, true)),
        ("Price: low to high", Sort::new(SortField::Price, false)),
        ("Price: high to low", Sort::new(SortField::Price, true)),
        ("Rating: high to low", Sort::new(SortField::Rating, true)),
        ("Rating: low to high", Sort::new(SortField::Rating, false)),
        ("Most reviewed", Sort::new(SortField::Reviews, true)),
        ("Least reviewed", Sort::new(SortField::Reviews, false)),
    ];
}

/// The applied filter state: the exact query the last/next listing fetch
/// carries. Draft edits never reach the backend until they are copied here.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub search: String,
    pub category: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub min_reviews: Option<u32>,
    pub max_reviews: Option<u32>,
    pub sort: Sort,
    /// 1-based page number.
    pub page: u32,
    pub limit: Option<u32>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        ProductQuery {
            search: String::new(),
            category: String::new(),
            min_price: None,
            max_price: None,
            min_rating: None,
            max_rating: None,
            min_reviews: None,
            max_reviews: None,
            sort: Sort::default(),
            page: 1,
            limit: None,
        }
    }
}

impl ProductQuery {
    /// True when any filter field is set. Sort, page and limit are not
    /// filters: facet data (categories, global price range) is only taken
    /// from responses to unfiltered requests, so the visible slider range
    /// does not shrink as filters narrow the result set.
    pub fn has_active_filters(&self) -> bool {
        !self.search.trim().is_empty()
            || !self.category.trim().is_empty()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.min_rating.is_some()
            || self.max_rating.is_some()
            || self.min_reviews.is_some()
            || self.max_reviews.is_some()
    }

    /// Query parameters for `GET /api/products/`. Defaults are omitted so a
    /// cleared filter state produces a request with no parameters at all.
    pub fn list_params(&self) -> Vec<(&'static str, String)> {
        let mut params = self.filter_params();
        if self.sort != Sort::default() {
            params.push(("sort", self.sort.as_param()));
        }
        if self.page > 1 {
            params.push(("page", self.page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }

    /// Filter parameters only, shared by the chart endpoints which take the
    /// same filters minus sort/page/limit.
    pub fn filter_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_owned()));
        }
        let category = self.category.trim();
        if !category.is_empty() {
            params.push(("category", category.to_owned()));
        }
        if let Some(v) = self.min_price {
            params.push(("min_price", format_number(v)));
        }
        if let Some(v) = self.max_price {
            params.push(("max_price", format_number(v)));
        }
        if let Some(v) = self.min_rating {
            params.push(("min_rating", format_number(v)));
        }
        if let Some(v) = self.max_rating {
            params.push(("max_rating", format_number(v)));
        }
        if let Some(v) = self.min_reviews {
            params.push(("min_reviews", v.to_string()));
        }
        if let Some(v) = self.max_reviews {
            params.push(("max_reviews", v.to_string()));
        }
        params
    }
}

/// Extract the 1-based page number embedded in an opaque pagination URL the
/// backend returns. The backend omits `page=1`, so a URL without the
/// parameter means the first page. The client never synthesizes such URLs.
pub fn page_from_url(url: &str) -> u32 {
    url.split_once('?')
        .map(|(_, query)| query)
        .unwrap_or("")
        .split('&')
        .find_map(|pair| pair.strip_prefix("page="))
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
}

fn format_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

/// In-progress form values on the catalog page. Bound to the filter
/// controls and copied into the applied [`ProductQuery`] on apply.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterDraft {
    pub search: String,
    pub category: String,
    /// `None` means "full known range": the sliders sit at the facet bounds
    /// and no price parameters are sent.
    pub price: Option<(f64, f64)>,
    pub rating: (f64, f64),
    pub min_reviews: String,
    pub max_reviews: String,
}

impl FilterDraft {
    pub const RATING_BOUNDS: (f64, f64) = (0.0, 5.0);

    pub fn reset() -> Self {
        FilterDraft {
            rating: Self::RATING_BOUNDS,
            ..FilterDraft::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_sends_no_parameters() {
        let query = ProductQuery::default();
        assert!(!query.has_active_filters());
        assert!(query.list_params().is_empty());
        assert!(query.filter_params().is_empty());
    }

    #[test]
    fn sort_encoding_round_trips() {
        assert_eq!(Sort::default().as_param(), "-created_at");
        let sort = Sort::new(SortField::Price, false);
        assert_eq!(sort.as_param(), "price");
        assert_eq!(Sort::parse("price"), sort);
        assert_eq!(Sort::parse("-rating"), Sort::new(SortField::Rating, true));
        assert_eq!(Sort::parse("garbage"), Sort::new(SortField::CreatedAt, false));
    }

    #[test]
    fn list_params_include_filters_sort_and_page() {
        let query = ProductQuery {
            search: "  кроссовки  ".into(),
            min_price: Some(1000.0),
            max_rating: Some(4.5),
            sort: Sort::new(SortField::Price, true),
            page: 3,
            limit: Some(50),
            ..ProductQuery::default()
        };
        let params = query.list_params();
        assert!(params.contains(&("search", "кроссовки".to_owned())));
        assert!(params.contains(&("min_price", "1000".to_owned())));
        assert!(params.contains(&("max_rating", "4.5".to_owned())));
        assert!(params.contains(&("sort", "-price".to_owned())));
        assert!(params.contains(&("page", "3".to_owned())));
        assert!(params.contains(&("limit", "50".to_owned())));
    }

    #[test]
    fn chart_params_exclude_sort_page_and_limit() {
        let query = ProductQuery {
            category: "shoes".into(),
            sort: Sort::new(SortField::Name, false),
            page: 7,
            limit: Some(10),
            ..ProductQuery::default()
        };
        let params = query.filter_params();
        assert_eq!(params, vec![("category", "shoes".to_owned())]);
    }

    #[test]
    fn whitespace_only_search_is_not_a_filter() {
        let query = ProductQuery {
            search: "   ".into(),
            ..ProductQuery::default()
        };
        assert!(!query.has_active_filters());
        assert!(query.list_params().is_empty());
    }

    #[test]
    fn page_number_extraction() {
        assert_eq!(
            page_from_url("http://localhost:8000/api/products/?search=x&page=4"),
            4
        );
        // Backend omits page=1 in the "previous" link for page 2.
        assert_eq!(page_from_url("http://localhost:8000/api/products/?search=x"), 1);
        assert_eq!(page_from_url("/api/products/"), 1);
        assert_eq!(page_from_url("/api/products/?page=abc"), 1);
    }

    #[test]
    fn page_one_is_omitted_from_params() {
        let query = ProductQuery {
            page: 1,
            ..ProductQuery::default()
        };
        assert!(query.list_params().is_empty());
        let query = ProductQuery { page: 2, ..query };
        assert_eq!(query.list_params(), vec![("page", "2".to_owned())]);
    }
}
