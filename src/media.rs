//! Best-effort image resolution for product galleries.
//!
//! Probes each candidate image by loading it off-screen and keeps only the
//! ones that load, in candidate order. A later mid-session network failure
//! is handled by the rendered `<img>` element's error handler instead.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::data::{Product, ProductImage};

/// Shown whenever a product has no loadable image at all.
pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

/// Ordered, deduplicated, probe-filtered image list for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    pub images: Vec<String>,
    /// Index of the currently shown image; starts at the first element.
    pub selected: usize,
}

impl Gallery {
    pub fn placeholder() -> Self {
        Gallery {
            images: vec![PLACEHOLDER_IMAGE.to_owned()],
            selected: 0,
        }
    }

    /// The thumbnail strip and lightbox only appear with more than one image.
    pub fn has_strip(&self) -> bool {
        self.images.len() > 1
    }
}

/// Candidate URLs in presentation order: the primary image first, then the
/// secondary references, deduplicated by URL with first occurrence winning.
pub fn candidate_urls(primary: Option<&str>, images: &[ProductImage]) -> Vec<String> {
    let mut seen = Vec::new();
    let primary = primary.map(str::trim).filter(|u| !u.is_empty());
    for url in primary
        .into_iter()
        .chain(images.iter().map(|img| img.url.trim()))
    {
        if url.is_empty() || seen.iter().any(|s| s == url) {
            continue;
        }
        seen.push(url.to_owned());
    }
    seen
}

/// Keep the candidates whose probe succeeded, preserving candidate order.
fn keep_loaded(candidates: Vec<String>, outcomes: Vec<bool>) -> Vec<String> {
    candidates
        .into_iter()
        .zip(outcomes)
        .filter_map(|(url, loaded)| loaded.then_some(url))
        .collect()
}

/// Resolve the gallery for a product. One network probe per candidate, all
/// probes awaited together; no caching between invocations.
pub async fn resolve_gallery(product: &Product) -> Gallery {
    let candidates = candidate_urls(product.image_url.as_deref(), &product.images);
    let outcomes = futures::future::join_all(
        candidates.iter().map(|url| probe_image(url.clone())),
    )
    .await;

    let images = keep_loaded(candidates, outcomes);
    if images.is_empty() {
        log::debug!("product {} has no loadable images", product.id);
        return Gallery::placeholder();
    }
    Gallery { images, selected: 0 }
}

/// Load `url` into a detached image element and report whether it succeeds.
async fn probe_image(url: String) -> bool {
    let Ok(img) = web_sys::HtmlImageElement::new() else {
        return false;
    };

    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(true);
            }
        })
    };
    let onerror = {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(false);
            }
        })
    };

    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    img.set_src(&url);

    let loaded = rx.await.unwrap_or(false);

    // Detach handlers before the closures drop.
    img.set_onload(None);
    img.set_onerror(None);
    loaded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_probe_drops_image_but_keeps_order() {
        let candidates = vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()];
        let images = keep_loaded(candidates, vec![true, false, true]);
        assert_eq!(images, vec!["a.jpg".to_owned(), "c.jpg".to_owned()]);
    }

    #[test]
    fn all_probes_failing_leaves_nothing() {
        let candidates = vec!["a.jpg".into(), "b.jpg".into()];
        assert!(keep_loaded(candidates, vec![false, false]).is_empty());
    }

    fn image(url: &str) -> ProductImage {
        ProductImage {
            url: url.to_owned(),
            size: None,
            kind: None,
            is_main: false,
        }
    }

    #[test]
    fn primary_comes_first_then_secondaries_in_order() {
        let urls = candidate_urls(
            Some("https://img/main.jpg"),
            &[image("https://img/a.jpg"), image("https://img/b.jpg")],
        );
        assert_eq!(
            urls,
            vec!["https://img/main.jpg", "https://img/a.jpg", "https://img/b.jpg"]
        );
    }

    #[test]
    fn duplicate_urls_keep_first_occurrence() {
        let urls = candidate_urls(
            Some("https://img/a.jpg"),
            &[
                image("https://img/b.jpg"),
                image("https://img/a.jpg"),
                image("https://img/b.jpg"),
            ],
        );
        assert_eq!(urls, vec!["https://img/a.jpg", "https://img/b.jpg"]);
    }

    #[test]
    fn empty_and_blank_urls_are_skipped() {
        let urls = candidate_urls(None, &[image(""), image("   "), image("https://img/x.jpg")]);
        assert_eq!(urls, vec!["https://img/x.jpg"]);
        assert!(candidate_urls(None, &[]).is_empty());
    }

    #[test]
    fn placeholder_gallery_has_no_strip() {
        let gallery = Gallery::placeholder();
        assert_eq!(gallery.images, vec![PLACEHOLDER_IMAGE.to_owned()]);
        assert_eq!(gallery.selected, 0);
        assert!(!gallery.has_strip());
    }
}
