//! Catalog statistics dashboard.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::api::{ApiClient, ApiError};
use crate::data::StatsSummary;

async fn fetch_stats() -> Result<StatsSummary, ApiError> {
    ApiClient::new()
        .get::<StatsSummary>("/products/statistics/", &[])
        .await
}

fn fmt_avg(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "—".to_owned())
}

#[component]
pub fn StatsPage() -> impl IntoView {
    let stats = LocalResource::new(|| fetch_stats());

    view! {
        <Title text="Statistics" />
        <section class="stats-page">
            <h1>"Catalog statistics"</h1>
            {move || match stats.get().as_deref() {
                None => view! { <p class="loading">"Loading statistics…"</p> }.into_any(),
                Some(Err(err)) => view! {
                    <p class="inline-error">{err.display_message()}</p>
                }
                .into_any(),
                Some(Ok(summary)) => {
                    let summary = summary.clone();
                    view! {
                        <div class="stats-grid">
                            <div class="stats-card">
                                <h3>"Products"</h3>
                                <p class="stats-number">{summary.total_products}</p>
                                <p class="stats-sub">
                                    {format!(
                                        "{} categories · {} search queries",
                                        summary.total_categories, summary.total_queries,
                                    )}
                                </p>
                            </div>
                            <div class="stats-card">
                                <h3>"Prices"</h3>
                                <p class="stats-number">
                                    {fmt_avg(summary.price_stats.average)} " ₽"
                                </p>
                                <p class="stats-sub">
                                    {format!(
                                        "min {} · max {}",
                                        fmt_avg(summary.price_stats.min),
                                        fmt_avg(summary.price_stats.max),
                                    )}
                                </p>
                            </div>
                            <div class="stats-card">
                                <h3>"Ratings"</h3>
                                <p class="stats-number">{fmt_avg(summary.rating_stats.average)}</p>
                                <p class="stats-sub">
                                    {format!(
                                        "{} products rated",
                                        summary.rating_stats.products_with_rating,
                                    )}
                                </p>
                            </div>
                            <div class="stats-card">
                                <h3>"Discounts"</h3>
                                <p class="stats-number">
                                    {fmt_avg(summary.discount_stats.average_discount_percent)} "%"
                                </p>
                                <p class="stats-sub">
                                    {format!(
                                        "{} products discounted",
                                        summary.discount_stats.products_with_discount,
                                    )}
                                </p>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_aggregates_render_a_dash() {
        assert_eq!(fmt_avg(None), "—");
        assert_eq!(fmt_avg(Some(1234.5)), "1234.50");
    }
}
