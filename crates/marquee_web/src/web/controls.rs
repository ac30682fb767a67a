use std::collections::BTreeSet;

use leptos::prelude::*;

/// Dual-handle year range: two range inputs over the dataset's span.
/// Each handle clamps against the other, so `year_min <= year_max` holds
/// for every emitted pair.
#[component]
pub(super) fn YearRangeSlider(
    bounds: Memo<(i32, i32)>,
    year_min: ReadSignal<i32>,
    set_year_min: WriteSignal<i32>,
    year_max: ReadSignal<i32>,
    set_year_max: WriteSignal<i32>,
) -> impl IntoView {
    let on_min = move |ev: web_sys::Event| {
        if let Ok(v) = event_target_value(&ev).parse::<i32>() {
            set_year_min.set(v.min(year_max.get_untracked()));
        }
    };
    let on_max = move |ev: web_sys::Event| {
        if let Ok(v) = event_target_value(&ev).parse::<i32>() {
            set_year_max.set(v.max(year_min.get_untracked()));
        }
    };

    view! {
        <div class="year-slider">
            <span class="range-label">{move || year_min.get()}</span>
            <input
                type="range"
                class="range"
                min=move || bounds.get().0.to_string()
                max=move || bounds.get().1.to_string()
                prop:value=move || year_min.get().to_string()
                on:input=on_min
            />
            <input
                type="range"
                class="range"
                min=move || bounds.get().0.to_string()
                max=move || bounds.get().1.to_string()
                prop:value=move || year_max.get().to_string()
                on:input=on_max
            />
            <span class="range-label">{move || year_max.get()}</span>
        </div>
    }
}

/// One checkbox per distinct genre in the loaded dataset. The option
/// list is generated once at load; only the selection set is reactive
/// per-change.
#[component]
pub(super) fn GenreCheckboxes(
    options: Memo<Vec<String>>,
    selected: RwSignal<BTreeSet<String>>,
) -> impl IntoView {
    view! {
        <div class="genre-grid">
            <For
                each=move || options.get()
                key=|genre| genre.clone()
                children=move |genre: String| {
                    let check_key = genre.clone();
                    let toggle_key = genre.clone();
                    view! {
                        <label class="genre-option">
                            <input
                                type="checkbox"
                                prop:checked=move || selected.with(|s| s.contains(&check_key))
                                on:change=move |_| {
                                    selected
                                        .update(|s| {
                                            if !s.remove(&toggle_key) {
                                                s.insert(toggle_key.clone());
                                            }
                                        })
                                }
                            />
                            <span>{genre}</span>
                        </label>
                    }
                }
            />
        </div>
    }
}
