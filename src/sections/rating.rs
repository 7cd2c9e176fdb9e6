//! Star rating display.

use leptos::prelude::*;

/// Build the star string for a 0-5 rating: floor of the rating as full
/// stars, a half marker when the fraction is non-zero, empty stars for the
/// rest.
pub fn star_glyphs(rating: f64) -> String {
    let clamped = rating.clamp(0.0, 5.0);
    let full = clamped.floor() as usize;
    let half = clamped.fract() > 0.0 && full < 5;
    let empty = 5 - full - usize::from(half);

    let mut glyphs = "★".repeat(full);
    if half {
        glyphs.push('½');
    }
    glyphs.push_str(&"☆".repeat(empty));
    glyphs
}

#[component]
pub fn Stars(
    rating: Option<f64>,
    #[prop(optional_no_strip)] reviews: Option<u32>,
) -> impl IntoView {
    match rating {
        Some(value) => view! {
            <span class="product-rating">
                <span class="stars">{star_glyphs(value)}</span>
                <span class="rating-value">{format!("{value:.1}")}</span>
                {reviews.map(|count| view! {
                    <span class="review-count">{format!("({count})")}</span>
                })}
            </span>
        }
        .into_any(),
        None => view! { <span class="product-rating rating-none">"No rating"</span> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_ratings_have_no_half_marker() {
        assert_eq!(star_glyphs(4.0), "★★★★☆");
        assert_eq!(star_glyphs(5.0), "★★★★★");
        assert_eq!(star_glyphs(0.0), "☆☆☆☆☆");
    }

    #[test]
    fn fractional_ratings_get_a_half_marker() {
        assert_eq!(star_glyphs(3.5), "★★★½☆");
        assert_eq!(star_glyphs(4.1), "★★★★½");
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        assert_eq!(star_glyphs(-1.0), "☆☆☆☆☆");
        assert_eq!(star_glyphs(7.3), "★★★★★");
    }
}
