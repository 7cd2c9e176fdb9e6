//! Coupled min/max range slider.

use leptos::prelude::*;

/// Move the lower bound; the upper bound is clamped up so the bounds never
/// cross.
pub fn clamp_min(new_min: f64, current_max: f64) -> (f64, f64) {
    if new_min > current_max {
        (new_min, new_min)
    } else {
        (new_min, current_max)
    }
}

/// Move the upper bound; the lower bound is clamped down symmetrically.
pub fn clamp_max(current_min: f64, new_max: f64) -> (f64, f64) {
    if new_max < current_min {
        (new_max, new_max)
    } else {
        (current_min, new_max)
    }
}

/// Two coupled range inputs over a shared scale. Every interaction reports
/// an already-clamped `(min, max)` pair through `on_change`.
#[component]
pub fn RangeSlider(
    label: &'static str,
    #[prop(into)] bounds: Signal<(f64, f64)>,
    #[prop(into)] value: Signal<(f64, f64)>,
    #[prop(default = 1.0)] step: f64,
    on_change: Callback<(f64, f64)>,
) -> impl IntoView {
    let on_min = move |ev| {
        let (current_min, current_max) = value.get_untracked();
        let new_min = event_target_value(&ev).parse().unwrap_or(current_min);
        on_change.run(clamp_min(new_min, current_max));
    };
    let on_max = move |ev| {
        let (current_min, current_max) = value.get_untracked();
        let new_max = event_target_value(&ev).parse().unwrap_or(current_max);
        on_change.run(clamp_max(current_min, new_max));
    };

    view! {
        <div class="range-slider">
            <div class="range-header">
                <span class="range-label">{label}</span>
                <span class="range-values">
                    {move || {
                        let (min, max) = value.get();
                        format!("{min} – {max}")
                    }}
                </span>
            </div>
            <input
                type="range"
                min=move || bounds.get().0
                max=move || bounds.get().1
                step=step
                prop:value=move || value.get().0.to_string()
                on:input=on_min
            />
            <input
                type="range"
                min=move || bounds.get().0
                max=move || bounds.get().1
                step=step
                prop:value=move || value.get().1.to_string()
                on:input=on_max
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_min_past_max_drags_max_along() {
        assert_eq!(clamp_min(70.0, 50.0), (70.0, 70.0));
        assert_eq!(clamp_min(30.0, 50.0), (30.0, 50.0));
    }

    #[test]
    fn moving_max_past_min_drags_min_along() {
        assert_eq!(clamp_max(50.0, 20.0), (20.0, 20.0));
        assert_eq!(clamp_max(50.0, 80.0), (50.0, 80.0));
    }

    #[test]
    fn bounds_never_cross_after_any_interaction() {
        for (min, max) in [(0.0, 100.0), (40.0, 40.0), (99.0, 100.0)] {
            for moved in [-10.0, 0.0, 40.0, 100.0, 150.0] {
                let (a, b) = clamp_min(moved, max);
                assert!(a <= b);
                let (a, b) = clamp_max(min, moved);
                assert!(a <= b);
            }
        }
    }
}
