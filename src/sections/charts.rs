//! Server-derived chart rendering: the client only draws the bars.

use leptos::prelude::*;

use crate::data::{DiscountPoint, HistogramBucket};

/// Bar width relative to the largest value in the series, in percent.
pub fn fill_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

#[component]
pub fn PriceHistogram(data: Vec<HistogramBucket>) -> impl IntoView {
    if data.iter().all(|b| b.count == 0) {
        return view! {
            <div class="chart chart-empty"><p>"No price data"</p></div>
        }
        .into_any();
    }
    let max = data.iter().map(|b| b.count).max().unwrap_or(0) as f64;

    view! {
        <div class="chart">
            <h3 class="chart-title">"Price distribution"</h3>
            {data
                .into_iter()
                .map(|bucket| {
                    let width = fill_percent(bucket.count as f64, max);
                    view! {
                        <div class="chart-bar">
                            <span class="chart-label">{bucket.range}</span>
                            <div class="chart-track">
                                <div
                                    class="chart-fill"
                                    style=format!("width: {width:.0}%")
                                ></div>
                            </div>
                            <span class="chart-count">{bucket.count}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

#[component]
pub fn DiscountVsRating(data: Vec<DiscountPoint>) -> impl IntoView {
    if data.is_empty() {
        return view! {
            <div class="chart chart-empty"><p>"No discount data"</p></div>
        }
        .into_any();
    }
    let max = data
        .iter()
        .map(|p| p.average_discount)
        .fold(0.0_f64, f64::max);

    view! {
        <div class="chart">
            <h3 class="chart-title">"Average discount by rating"</h3>
            {data
                .into_iter()
                .map(|point| {
                    let width = fill_percent(point.average_discount, max);
                    view! {
                        <div class="chart-bar">
                            <span class="chart-label">{point.rating_range} "★"</span>
                            <div class="chart-track">
                                <div
                                    class="chart-fill chart-fill-discount"
                                    style=format!("width: {width:.0}%")
                                ></div>
                            </div>
                            <span class="chart-count">
                                {format!("{:.1}%", point.average_discount)}
                            </span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_is_relative_to_series_max() {
        assert_eq!(fill_percent(5.0, 10.0), 50.0);
        assert_eq!(fill_percent(10.0, 10.0), 100.0);
    }

    #[test]
    fn degenerate_series_render_zero_width() {
        assert_eq!(fill_percent(3.0, 0.0), 0.0);
        assert_eq!(fill_percent(-1.0, 10.0), 0.0);
    }
}
