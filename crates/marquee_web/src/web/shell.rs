use leptos::prelude::*;

use super::types::Theme;

#[component]
pub(super) fn Topbar(
    status: ReadSignal<String>,
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="app-header-left">
                <h1 class="brand">"Marquee"</h1>
                <span class="subtle">"movie dataset explorer"</span>
            </div>
            <div class="app-header-right">
                <span class="status">{move || status.get()}</span>
                <button
                    class="btn sm ghost"
                    title=move || format!("Theme: {}", theme.get().label())
                    on:click=move |_| set_theme.set(theme.get().toggle())
                >
                    {move || theme.get().label()}
                </button>
            </div>
        </header>
    }
}

/// Dismissible banner for load failures. The dashboard has no retry;
/// the banner and the console line are all the user gets.
#[component]
pub(super) fn ErrorBanner(
    error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-banner">
                <div class="error-banner-head">
                    <span class="error-banner-title">"Error"</span>
                    <button class="btn sm" on:click=move |_| set_error.set(None)>
                        "Dismiss"
                    </button>
                </div>
                <div class="error-banner-body">{move || error.get().unwrap_or_default()}</div>
            </div>
        </Show>
    }
}
