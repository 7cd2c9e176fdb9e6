//! Pagination controls driven by the backend's opaque page URLs.

use leptos::prelude::*;

use crate::data::page_from_url;

/// Backend default page size when the query carries no `limit`.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

pub fn total_pages(count: u32, page_size: u32) -> u32 {
    if count == 0 {
        1
    } else {
        count.div_ceil(page_size.max(1))
    }
}

/// Previous/next controls. Navigation only follows the page numbers
/// embedded in the URLs the backend returned; no page URL is synthesized
/// client-side.
#[component]
pub fn Pager(
    page: u32,
    count: u32,
    next: Option<String>,
    previous: Option<String>,
    page_size: u32,
    on_page: Callback<u32>,
) -> impl IntoView {
    let prev_target = previous.as_deref().map(page_from_url);
    let next_target = next.as_deref().map(page_from_url);

    view! {
        <div class="pagination">
            <button
                class="pagination-prev"
                disabled=prev_target.is_none()
                on:click=move |_| {
                    if let Some(target) = prev_target {
                        on_page.run(target);
                    }
                }
            >
                "← Previous"
            </button>
            <span class="pagination-status">
                {format!("Page {} of {}", page, total_pages(count, page_size))}
            </span>
            <button
                class="pagination-next"
                disabled=next_target.is_none()
                on:click=move |_| {
                    if let Some(target) = next_target {
                        on_page.run(target);
                    }
                }
            >
                "Next →"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_page_count_up() {
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(41, 20), 3);
    }

    #[test]
    fn zero_page_size_does_not_divide_by_zero() {
        assert_eq!(total_pages(10, 0), 10);
    }
}
