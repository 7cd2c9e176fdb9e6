//! Image gallery: main image, thumbnail strip, lightbox.

use leptos::prelude::*;

use crate::media::Gallery;
use crate::sections::product_card::swap_to_placeholder;

/// Render a resolved gallery. Never panics on an empty list: the "no
/// images" card is shown instead. The thumbnail strip and the click-to-
/// enlarge lightbox only exist when more than one image survived probing.
#[component]
pub fn GalleryView(gallery: Gallery) -> impl IntoView {
    if gallery.images.is_empty() {
        return view! {
            <div class="gallery gallery-empty">
                <p>"No images available"</p>
            </div>
        }
        .into_any();
    }

    let has_strip = gallery.has_strip();
    let images = StoredValue::new(gallery.images.clone());
    let selected = RwSignal::new(gallery.selected.min(gallery.images.len() - 1));
    let lightbox = RwSignal::new(false);

    let current = move || {
        images.with_value(|imgs| {
            let index = selected.get().min(imgs.len() - 1);
            imgs[index].clone()
        })
    };

    view! {
        <div class="gallery">
            <div class="gallery-main">
                <img
                    src=current
                    alt="Product image"
                    class:gallery-zoomable=has_strip
                    on:click=move |_| {
                        if has_strip {
                            lightbox.update(|open| *open = !*open);
                        }
                    }
                    on:error=|ev| swap_to_placeholder(&ev)
                />
            </div>
            {has_strip.then(|| {
                view! {
                    <div class="gallery-thumbs">
                        {gallery
                            .images
                            .iter()
                            .enumerate()
                            .map(|(index, url)| {
                                let url = url.clone();
                                view! {
                                    <img
                                        src=url
                                        alt=format!("Thumbnail {}", index + 1)
                                        class="gallery-thumb"
                                        class:active=move || selected.get() == index
                                        on:click=move |_| selected.set(index)
                                        on:error=|ev| swap_to_placeholder(&ev)
                                    />
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
            })}
            {move || {
                lightbox.get().then(|| {
                    view! {
                        <div class="gallery-lightbox" on:click=move |_| lightbox.set(false)>
                            <img src=current alt="Enlarged product image" />
                        </div>
                    }
                })
            }}
        </div>
    }
    .into_any()
}
