//! Scrape-trigger form: submit a search query for the backend to parse.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::api::ApiClient;
use crate::data::{ParseRequest, ParseStarted};

pub const DEFAULT_LIMIT: u32 = 10;

/// Submission lifecycle. One request in flight at most; success clears the
/// form, failure keeps it intact for correction.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Success(String),
    Failure(String),
}

/// Client-side validation: a blank or whitespace-only query never reaches
/// the network.
pub fn validate_query(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err("Enter a search query before starting a scrape.")
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Parse the result-limit field, falling back to the default on junk input.
pub fn parse_limit(raw: &str) -> u32 {
    raw.trim()
        .parse()
        .ok()
        .filter(|n| (1..=100).contains(n))
        .unwrap_or(DEFAULT_LIMIT)
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let limit = RwSignal::new(DEFAULT_LIMIT.to_string());
    let state = RwSignal::new(SubmitState::Idle);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked() == SubmitState::Submitting {
            return;
        }
        let search_query = match validate_query(&query.get_untracked()) {
            Ok(q) => q,
            Err(message) => {
                state.set(SubmitState::Failure(message.to_owned()));
                return;
            }
        };
        let request = ParseRequest {
            search_query,
            category: category.get_untracked().trim().to_owned(),
            limit: parse_limit(&limit.get_untracked()),
        };
        state.set(SubmitState::Submitting);
        spawn_local(async move {
            let client = ApiClient::new();
            match client
                .post::<_, ParseStarted>("/start-parsing/", &request)
                .await
            {
                Ok(started) => {
                    state.set(SubmitState::Success(started.message));
                    query.set(String::new());
                    category.set(String::new());
                    limit.set(DEFAULT_LIMIT.to_string());
                }
                Err(err) => {
                    log::warn!("scrape trigger failed: {err}");
                    state.set(SubmitState::Failure(err.display_message()));
                }
            }
        });
    };

    view! {
        <Title text="Start a scrape" />
        <section class="search-page">
            <h1>"Scrape new products"</h1>
            <p class="search-hint">
                "The query is handed to the backend scraper; results show up in the catalog once parsing finishes."
            </p>
            <form class="search-form" on:submit=on_submit>
                <label>
                    "Search query"
                    <input
                        type="text"
                        placeholder="e.g. sneakers"
                        prop:value=query
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Category (optional)"
                    <input
                        type="text"
                        prop:value=category
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Result limit"
                    <input
                        type="number"
                        min="1"
                        max="100"
                        prop:value=limit
                        on:input=move |ev| limit.set(event_target_value(&ev))
                    />
                </label>
                <button
                    type="submit"
                    class="btn"
                    disabled=move || state.get() == SubmitState::Submitting
                >
                    {move || {
                        if state.get() == SubmitState::Submitting {
                            "Starting…"
                        } else {
                            "Start scraping"
                        }
                    }}
                </button>
            </form>
            {move || match state.get() {
                SubmitState::Success(message) => {
                    view! { <p class="form-message form-success">{message}</p> }.into_any()
                }
                SubmitState::Failure(message) => {
                    view! { <p class="form-message form-error">{message}</p> }.into_any()
                }
                SubmitState::Idle | SubmitState::Submitting => ().into_any(),
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_queries_are_rejected() {
        assert!(validate_query("").is_err());
        assert!(validate_query("   \t ").is_err());
    }

    #[test]
    fn valid_queries_are_trimmed() {
        assert_eq!(validate_query("  sneakers ").unwrap(), "sneakers");
    }

    #[test]
    fn limit_falls_back_to_default() {
        assert_eq!(parse_limit("25"), 25);
        assert_eq!(parse_limit(""), DEFAULT_LIMIT);
        assert_eq!(parse_limit("abc"), DEFAULT_LIMIT);
        assert_eq!(parse_limit("0"), DEFAULT_LIMIT);
        assert_eq!(parse_limit("9999"), DEFAULT_LIMIT);
    }
}
