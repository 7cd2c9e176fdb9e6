//! Catalog page: filterable, sortable, paginated product listing with
//! server-derived charts.
//!
//! Filter state is two-tier: the draft record is bound to the form
//! controls, the applied [`ProductQuery`] is what fetches actually carry.
//! The free-text search applies on an explicit action (button or Enter);
//! category, sliders, sort and page apply live. Every applied change is
//! debounced and then fans out into two concurrent requests (listing +
//! chart datasets). Overlapping responses are not cancelled; the later
//! completion wins.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::api::ApiClient;
use crate::data::{
    ChartData, DiscountPoint, FilterDraft, HistogramBucket, PriceRange, ProductList,
    ProductQuery, Sort,
};
use crate::sections::{
    DiscountVsRating, Pager, PriceHistogram, ProductCard, RangeSlider, DEFAULT_PAGE_SIZE,
};

/// Collapses rapid successive filter edits into one fetch.
const DEBOUNCE_MS: u32 = 300;

/// Price bounds to send: a bound sitting exactly at the known facet edge is
/// not a filter, so it is omitted and "clear filters" yields a request with
/// no parameters.
pub(crate) fn applied_price_bounds(
    min: f64,
    max: f64,
    range: PriceRange,
) -> (Option<f64>, Option<f64>) {
    (
        (min > range.min).then_some(min),
        (max < range.max).then_some(max),
    )
}

/// Same rule for the fixed 0-5 rating scale.
pub(crate) fn applied_rating_bounds(min: f64, max: f64) -> (Option<f64>, Option<f64>) {
    let (lo, hi) = FilterDraft::RATING_BOUNDS;
    ((min > lo).then_some(min), (max < hi).then_some(max))
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let draft = RwSignal::new(FilterDraft::reset());
    let applied = RwSignal::new(ProductQuery::default());
    let debounced = RwSignal::new(ProductQuery::default());
    let known_range = RwSignal::new(PriceRange::default());
    let categories = RwSignal::new(Vec::<String>::new());
    let debounce_generation = StoredValue::new(0_u64);

    // Applied -> debounced, collapsing bursts of edits. The initial fetch
    // runs immediately off the debounced default below; re-setting an
    // identical query here is skipped so it does not refetch.
    Effect::new(move |_| {
        let query = applied.get();
        let generation = debounce_generation.get_value() + 1;
        debounce_generation.set_value(generation);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DEBOUNCE_MS).await;
            if debounce_generation.get_value() != generation {
                return;
            }
            if debounced.with_untracked(|current| *current != query) {
                debounced.set(query);
            }
        });
    });

    let products = LocalResource::new(move || {
        let query = debounced.get();
        async move {
            let result = ApiClient::new()
                .get::<ProductList>("/products/", &query.list_params())
                .await;
            match &result {
                Ok(list) => {
                    // Facets only from unfiltered responses, so the visible
                    // range does not shrink as filters narrow the results.
                    if !query.has_active_filters() {
                        if let Some(range) = list.price_range {
                            known_range.set(range);
                        }
                        categories.set(list.categories.clone());
                    }
                }
                Err(err) => log::error!("product listing fetch failed: {err}"),
            }
            result
        }
    });

    let histogram = LocalResource::new(move || {
        let params = debounced.get().filter_params();
        async move {
            ApiClient::new()
                .get::<ChartData<HistogramBucket>>("/products/price_histogram/", &params)
                .await
        }
    });

    let discount_chart = LocalResource::new(move || {
        let params = debounced.get().filter_params();
        async move {
            ApiClient::new()
                .get::<ChartData<DiscountPoint>>("/products/discount_vs_rating/", &params)
                .await
        }
    });

    // Explicit apply for the free-text search; re-applying the same text
    // does not refetch.
    let apply_search = move || {
        let text = draft.with_untracked(|d| d.search.trim().to_owned());
        if applied.with_untracked(|q| q.search != text) {
            applied.update(|q| {
                q.search = text;
                q.page = 1;
            });
        }
    };
    let on_search_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        apply_search();
    };

    let on_category = move |ev| {
        let value = event_target_value(&ev);
        draft.update(|d| d.category = value.clone());
        applied.update(|q| {
            q.category = value;
            q.page = 1;
        });
    };

    let on_price = Callback::new(move |(min, max): (f64, f64)| {
        draft.update(|d| d.price = Some((min, max)));
        let (min_price, max_price) = applied_price_bounds(min, max, known_range.get_untracked());
        applied.update(|q| {
            q.min_price = min_price;
            q.max_price = max_price;
            q.page = 1;
        });
    });

    let on_rating = Callback::new(move |(min, max): (f64, f64)| {
        draft.update(|d| d.rating = (min, max));
        let (min_rating, max_rating) = applied_rating_bounds(min, max);
        applied.update(|q| {
            q.min_rating = min_rating;
            q.max_rating = max_rating;
            q.page = 1;
        });
    });

    let on_min_reviews = move |ev| {
        let raw = event_target_value(&ev);
        draft.update(|d| d.min_reviews = raw.clone());
        applied.update(|q| {
            q.min_reviews = raw.trim().parse().ok();
            q.page = 1;
        });
    };
    let on_max_reviews = move |ev| {
        let raw = event_target_value(&ev);
        draft.update(|d| d.max_reviews = raw.clone());
        applied.update(|q| {
            q.max_reviews = raw.trim().parse().ok();
            q.page = 1;
        });
    };

    // Selecting the already-active sort encoding is a no-op.
    let on_sort = move |ev| {
        let index: usize = event_target_value(&ev).parse().unwrap_or(0);
        let sort = Sort::OPTIONS
            .get(index)
            .map(|(_, s)| *s)
            .unwrap_or_default();
        if applied.with_untracked(|q| q.sort == sort) {
            return;
        }
        applied.update(|q| {
            q.sort = sort;
            q.page = 1;
        });
    };

    let on_page = Callback::new(move |page: u32| {
        if applied.with_untracked(|q| q.page != page) {
            applied.update(|q| q.page = page);
        }
    });

    // One atomic reset of both tiers; produces exactly one fetch carrying
    // no filter parameters.
    let clear_filters = move |_| {
        draft.set(FilterDraft::reset());
        let current = applied.get_untracked();
        let cleared = ProductQuery {
            limit: current.limit,
            ..ProductQuery::default()
        };
        if current != cleared {
            applied.set(cleared);
        }
    };

    let price_bounds = Signal::derive(move || {
        let range = known_range.get();
        (range.min, range.max)
    });
    let price_value = Signal::derive(move || {
        draft
            .with(|d| d.price)
            .unwrap_or_else(|| price_bounds.get())
    });
    let rating_bounds = Signal::derive(|| FilterDraft::RATING_BOUNDS);
    let rating_value = Signal::derive(move || draft.with(|d| d.rating));

    let sort_index = move || {
        let current = applied.with(|q| q.sort);
        Sort::OPTIONS
            .iter()
            .position(|(_, s)| *s == current)
            .unwrap_or(0)
            .to_string()
    };

    view! {
        <Title text="Catalog" />
        <section class="catalog-page">
            <aside class="filters">
                <form class="filter-search" on:submit=on_search_submit>
                    <input
                        type="search"
                        placeholder="Search products…"
                        prop:value=move || draft.with(|d| d.search.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.search = value);
                        }
                    />
                    <button type="submit" class="btn">"Search"</button>
                </form>

                <label class="filter-field">
                    "Category"
                    <select
                        on:change=on_category
                        prop:value=move || draft.with(|d| d.category.clone())
                    >
                        <option value="">"All categories"</option>
                        {move || {
                            categories
                                .get()
                                .into_iter()
                                .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>

                <RangeSlider
                    label="Price, ₽"
                    bounds=price_bounds
                    value=price_value
                    on_change=on_price
                />
                <RangeSlider
                    label="Rating"
                    bounds=rating_bounds
                    value=rating_value
                    step=0.5
                    on_change=on_rating
                />

                <div class="filter-field filter-reviews">
                    <span>"Reviews"</span>
                    <input
                        type="number"
                        min="0"
                        placeholder="min"
                        prop:value=move || draft.with(|d| d.min_reviews.clone())
                        on:change=on_min_reviews
                    />
                    <input
                        type="number"
                        min="0"
                        placeholder="max"
                        prop:value=move || draft.with(|d| d.max_reviews.clone())
                        on:change=on_max_reviews
                    />
                </div>

                <button class="btn btn-secondary" on:click=clear_filters>
                    "Clear filters"
                </button>
            </aside>

            <div class="catalog-main">
                <div class="charts">
                    {move || match histogram.get().as_deref() {
                        None => view! {
                            <div class="chart chart-empty"><p>"Loading chart…"</p></div>
                        }
                        .into_any(),
                        Some(Err(_)) => view! {
                            <div class="chart chart-empty">
                                <p class="inline-error">"Price chart unavailable"</p>
                            </div>
                        }
                        .into_any(),
                        Some(Ok(series)) => {
                            view! { <PriceHistogram data=series.data.clone() /> }.into_any()
                        }
                    }}
                    {move || match discount_chart.get().as_deref() {
                        None => view! {
                            <div class="chart chart-empty"><p>"Loading chart…"</p></div>
                        }
                        .into_any(),
                        Some(Err(_)) => view! {
                            <div class="chart chart-empty">
                                <p class="inline-error">"Discount chart unavailable"</p>
                            </div>
                        }
                        .into_any(),
                        Some(Ok(series)) => {
                            view! { <DiscountVsRating data=series.data.clone() /> }.into_any()
                        }
                    }}
                </div>

                <div class="results-header">
                    <span class="result-count">
                        {move || {
                            products
                                .get()
                                .as_deref()
                                .and_then(|r| r.as_ref().ok().map(|l| l.count))
                                .map(|count| format!("{count} products"))
                                .unwrap_or_default()
                        }}
                    </span>
                    <label class="sort-control">
                        "Sort by"
                        <select on:change=on_sort prop:value=sort_index>
                            {Sort::OPTIONS
                                .iter()
                                .enumerate()
                                .map(|(i, (label, _))| {
                                    view! { <option value=i.to_string()>{*label}</option> }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>

                {move || match products.get().as_deref() {
                    None => view! { <p class="loading">"Loading products…"</p> }.into_any(),
                    Some(Err(err)) => view! {
                        <p class="inline-error">{err.display_message()}</p>
                    }
                    .into_any(),
                    Some(Ok(list)) => {
                        let list = list.clone();
                        let page = applied.with(|q| q.page);
                        let page_size = applied.with(|q| q.limit.unwrap_or(DEFAULT_PAGE_SIZE));
                        let grid = if list.results.is_empty() {
                            view! { <p class="empty">"Nothing matched your filters."</p> }
                                .into_any()
                        } else {
                            view! {
                                <div class="product-grid">
                                    {list
                                        .results
                                        .into_iter()
                                        .map(|p| view! { <ProductCard product=p /> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any()
                        };
                        view! {
                            {grid}
                            <Pager
                                page=page
                                count=list.count
                                next=list.next
                                previous=list.previous
                                page_size=page_size
                                on_page=on_page
                            />
                        }
                        .into_any()
                    }
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_bounds_at_facet_edges_are_omitted() {
        let range = PriceRange {
            min: 100.0,
            max: 9000.0,
        };
        assert_eq!(applied_price_bounds(100.0, 9000.0, range), (None, None));
        assert_eq!(
            applied_price_bounds(500.0, 9000.0, range),
            (Some(500.0), None)
        );
        assert_eq!(
            applied_price_bounds(100.0, 2000.0, range),
            (None, Some(2000.0))
        );
    }

    #[test]
    fn full_rating_scale_is_not_a_filter() {
        assert_eq!(applied_rating_bounds(0.0, 5.0), (None, None));
        assert_eq!(applied_rating_bounds(3.0, 5.0), (Some(3.0), None));
        assert_eq!(applied_rating_bounds(0.0, 4.5), (None, Some(4.5)));
    }

    #[test]
    fn cleared_query_equals_default_with_limit_kept() {
        let current = ProductQuery {
            search: "boots".into(),
            min_price: Some(500.0),
            page: 4,
            limit: Some(50),
            ..ProductQuery::default()
        };
        let cleared = ProductQuery {
            limit: current.limit,
            ..ProductQuery::default()
        };
        assert!(!cleared.has_active_filters());
        assert_eq!(cleared.page, 1);
        assert_eq!(cleared.sort, Sort::default());
        assert_eq!(cleared.list_params(), vec![("limit", "50".to_owned())]);
    }
}
