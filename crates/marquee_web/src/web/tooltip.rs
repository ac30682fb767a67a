use leptos::prelude::*;

use super::float_fmt::fmt_f64_fixed;

/// Hover detail for any chart region: a title plus free-form lines.
/// Presentation-only; nothing downstream reads it back.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct TooltipPayload {
    pub(super) title: String,
    pub(super) lines: Vec<String>,
    pub(super) top_px: f64,
    pub(super) left_px: f64,
}

pub(super) type TooltipStore = RwSignal<Option<TooltipPayload>>;

#[component]
pub(super) fn TooltipPortal(store: TooltipStore) -> impl IntoView {
    let payload = Memo::new(move |_| store.get());

    view! {
        <Show when=move || payload.get().is_some() fallback=|| ()>
            {move || {
                let p = payload
                    .get()
                    .expect("Show guarantees payload is Some when rendered");

                let top = fmt_f64_fixed(p.top_px, 0);
                let left = fmt_f64_fixed(p.left_px, 0);
                let style = format!("top: {top}px; left: {left}px;");
                let title = p.title;
                let lines = p.lines;

                view! {
                    <div class="tooltip tooltip-portal" role="tooltip" style=style>
                        <div class="tooltip-title">{title}</div>
                        <div class="tooltip-body">
                            <For
                                each=move || lines.clone().into_iter().enumerate()
                                key=|(i, _)| *i
                                children=|(_i, line)| view! { <div>{line}</div> }
                            />
                        </div>
                    </div>
                }
            }}
        </Show>
    }
}
