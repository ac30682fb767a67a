//! localStorage persistence for the UI chrome: theme and the last filter
//! selection. The dataset itself is never persisted.

use serde::{Deserialize, Serialize};

use super::types::Theme;

const CONTROLS_KEY: &str = "marquee.controls.v1";
const THEME_KEY: &str = "marquee.theme.v1";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(super) fn local_storage_get_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub(super) fn local_storage_set_string(key: &str, value: &str) {
    if let Some(s) = local_storage() {
        let _ = s.set_item(key, value);
    }
}

/// The filter selection as last left by the user. Restored at load when
/// it still fits the freshly loaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct PersistedControls {
    pub(super) version: u32,
    pub(super) year_min: i32,
    pub(super) year_max: i32,
    pub(super) genres: Vec<String>,
}

pub(super) fn load_persisted_controls() -> Option<PersistedControls> {
    let raw = local_storage_get_string(CONTROLS_KEY)?;
    let controls: PersistedControls = serde_json::from_str(&raw).ok()?;
    if controls.version == 1 {
        Some(controls)
    } else {
        None
    }
}

pub(super) fn save_persisted_controls(controls: &PersistedControls) {
    if let Ok(raw) = serde_json::to_string(controls) {
        local_storage_set_string(CONTROLS_KEY, &raw);
    }
}

pub(super) fn load_theme() -> Option<Theme> {
    Theme::parse(&local_storage_get_string(THEME_KEY)?)
}

pub(super) fn save_theme(theme: Theme) {
    local_storage_set_string(THEME_KEY, theme.as_attr());
}

pub(super) fn apply_theme_to_document(theme: Theme) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(el) = doc.document_element() else {
        return;
    };
    let _ = el.set_attribute("data-theme", theme.as_attr());
}
