//! Product detail page: gallery, pricing, similar products.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::api::{ApiClient, ApiError};
use crate::data::ProductDetail;
use crate::media::{self, Gallery};
use crate::sections::{GalleryView, ProductCard, Stars};

/// Fetch the product and resolve its gallery before rendering; the probes
/// are awaited together so the view appears with a settled image list.
async fn fetch_detail(id: String) -> Result<(ProductDetail, Gallery), ApiError> {
    let client = ApiClient::new();
    let detail: ProductDetail = client.get(&format!("/products/{id}/"), &[]).await?;
    let gallery = media::resolve_gallery(&detail.product).await;
    Ok((detail, gallery))
}

#[component]
pub fn DetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").unwrap_or_default());

    // Refetches on route id change.
    let detail = LocalResource::new(move || fetch_detail(id()));

    view! {
        <section class="detail-page">
            {move || match detail.get().as_deref() {
                None => view! { <p class="loading">"Loading product…"</p> }.into_any(),
                Some(Err(ApiError::NotFound)) => view! {
                    <div class="not-found">
                        <h1>"Product not found"</h1>
                        <p>"It may have been removed, or the link is stale."</p>
                        <a href="/">"Back to catalog"</a>
                    </div>
                }
                .into_any(),
                Some(Err(err)) => view! {
                    <div class="not-found">
                        <p class="inline-error">{err.display_message()}</p>
                        <a href="/">"Back to catalog"</a>
                    </div>
                }
                .into_any(),
                Some(Ok((detail, gallery))) => {
                    let product = detail.product.clone();
                    let similar = detail.similar_products.clone();
                    let stock_class = format!("product-stock {}", product.availability_class());
                    view! {
                        <Title text=product.name.clone() />
                        <div class="detail-layout">
                            <GalleryView gallery=gallery.clone() />
                            <div class="detail-info">
                                <h1>{product.name.clone()}</h1>
                                {(!product.category.trim().is_empty()).then(|| {
                                    view! {
                                        <p class="product-category">{product.category.clone()}</p>
                                    }
                                })}
                                <div class="product-price detail-price">
                                    <span class="price-current">{product.price_label()}</span>
                                    {product.old_price_label().map(|old| {
                                        view! { <span class="price-original">{old}</span> }
                                    })}
                                    {product.discount_percentage().map(|pct| {
                                        view! {
                                            <span class="discount-badge">{format!("-{pct}%")}</span>
                                        }
                                    })}
                                </div>
                                <Stars rating=product.rating reviews=product.reviews_count />
                                <p class=stock_class>{product.availability_status()}</p>
                                {product.quantity.map(|qty| {
                                    view! { <p class="detail-quantity">{qty} " in stock"</p> }
                                })}
                                {product.product_url.clone().map(|url| {
                                    view! {
                                        <a class="btn" href=url target="_blank" rel="noopener">
                                            "View on marketplace"
                                        </a>
                                    }
                                })}
                                <dl class="detail-meta">
                                    {product.search_query.clone().map(|q| {
                                        view! {
                                            <div>
                                                <dt>"Found by query"</dt>
                                                <dd>{q}</dd>
                                            </div>
                                        }
                                    })}
                                    {product.created_label().map(|ts| {
                                        view! {
                                            <div>
                                                <dt>"Scraped at"</dt>
                                                <dd>{ts}</dd>
                                            </div>
                                        }
                                    })}
                                </dl>
                            </div>
                        </div>
                        {(!similar.is_empty()).then(|| {
                            view! {
                                <div class="similar-products">
                                    <h2>"Similar products"</h2>
                                    <div class="product-grid">
                                        {similar
                                            .into_iter()
                                            .map(|p| view! { <ProductCard product=p /> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </div>
                            }
                        })}
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
