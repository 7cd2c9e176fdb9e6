//! Product card shared by the catalog grid and the similar-products grid.

use leptos::ev::ErrorEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::rating::Stars;
use crate::data::Product;
use crate::media::PLACEHOLDER_IMAGE;

/// Per-element image fallback: a card or gallery image that fails after the
/// initial probe is swapped to the placeholder instead of breaking the view.
pub(crate) fn swap_to_placeholder(ev: &ErrorEvent) {
    let Some(img) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
    else {
        return;
    };
    // The placeholder failing too must not retrigger forever.
    if img.src().ends_with(PLACEHOLDER_IMAGE) {
        return;
    }
    img.set_src(PLACEHOLDER_IMAGE);
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/product/{}", product.id);
    let image = product
        .image_url
        .clone()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());
    let stock_class = format!("product-stock {}", product.availability_class());

    view! {
        <div class="product-card">
            <a href=href class="product-link">
                <div class="product-image">
                    <img
                        src=image
                        alt=product.name.clone()
                        loading="lazy"
                        on:error=|ev| swap_to_placeholder(&ev)
                    />
                    {product.discount_percentage().map(|pct| {
                        view! { <span class="discount-badge">{format!("-{pct}%")}</span> }
                    })}
                </div>
                <div class="product-info">
                    <h3 class="product-title">{product.name.clone()}</h3>
                    {(!product.category.trim().is_empty()).then(|| {
                        view! { <p class="product-category">{product.category.clone()}</p> }
                    })}
                    <div class="product-price">
                        <span class="price-current">{product.price_label()}</span>
                        {product.old_price_label().map(|old| {
                            view! { <span class="price-original">{old}</span> }
                        })}
                    </div>
                    <Stars rating=product.rating reviews=product.reviews_count />
                    <p class=stock_class>{product.availability_status()}</p>
                </div>
            </a>
        </div>
    }
}
