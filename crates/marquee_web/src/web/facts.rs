use leptos::prelude::*;

use marquee::aggregate::FunFacts;

use super::float_fmt::{fmt_f64_fixed, fmt_usd};

#[component]
pub(super) fn FactsPanel(facts: ReadSignal<Option<FunFacts>>) -> impl IntoView {
    view! {
        <Show
            when=move || facts.get().is_some()
            fallback=|| {
                view! { <p class="empty">"No movies match the current filters."</p> }
            }
        >
            {move || {
                facts
                    .get()
                    .map(|f| {
                        view! {
                            <div class="facts-grid">
                                <FactRow
                                    label="Highest rated"
                                    value=format!(
                                        "{} ({})",
                                        f.highest_rated.title,
                                        fmt_f64_fixed(f.highest_rated.rating, 1),
                                    )
                                />
                                <FactRow
                                    label="Lowest rated"
                                    value=format!(
                                        "{} ({})",
                                        f.lowest_rated.title,
                                        fmt_f64_fixed(f.lowest_rated.rating, 1),
                                    )
                                />
                                <FactRow
                                    label="Most nominations"
                                    value=format!(
                                        "{} ({})",
                                        f.most_nominated.title,
                                        f.most_nominated.nominations,
                                    )
                                />
                                <FactRow
                                    label="Top US/Canada gross"
                                    value=format!(
                                        "{} ({})",
                                        f.top_domestic.title,
                                        fmt_usd(f.top_domestic.gross_us_canada),
                                    )
                                />
                                <FactRow
                                    label="Top worldwide gross"
                                    value=format!(
                                        "{} ({})",
                                        f.top_worldwide.title,
                                        fmt_usd(f.top_worldwide.gross_world_wide),
                                    )
                                />
                                <FactRow
                                    label="Smallest budget"
                                    value=format!(
                                        "{} ({})",
                                        f.smallest_budget.title,
                                        fmt_usd(f.smallest_budget.budget),
                                    )
                                />
                            </div>
                        }
                    })
            }}
        </Show>
    }
}

#[component]
fn FactRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="fact-row">
            <div class="fact-label">{label}</div>
            <div class="fact-value">{value}</div>
        </div>
    }
}
