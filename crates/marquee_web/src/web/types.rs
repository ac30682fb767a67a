use std::sync::Arc;

use marquee::correlate::CorrCell;
use marquee::dataset::Dataset;
use marquee::layout::{Circle, Rect};

/// The orchestrator's two states. One transition, at most, per session:
/// `Uninitialized -> Ready` when both fetches land. A failed load stays
/// `Uninitialized` for good.
#[derive(Clone, Default)]
pub(super) enum LoadState {
    #[default]
    Uninitialized,
    Ready(Arc<Dataset>),
}

impl LoadState {
    pub(super) fn dataset(&self) -> Option<&Arc<Dataset>> {
        match self {
            LoadState::Uninitialized => None,
            LoadState::Ready(dataset) => Some(dataset),
        }
    }
}

/// One laid-out treemap tile, kept for hover hit-testing.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct TreemapItem {
    pub(super) title: String,
    pub(super) year: i32,
    pub(super) rating: f64,
    pub(super) gross: f64,
    pub(super) rect: Rect,
}

/// One placed bubble (production company).
#[derive(Clone, Debug, PartialEq)]
pub(super) struct BubbleItem {
    pub(super) company: String,
    pub(super) total: f64,
    pub(super) circle: Circle,
}

/// The heatmap's last-rendered view: labels plus row-major cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub(super) struct HeatmapView {
    pub(super) labels: Vec<&'static str>,
    pub(super) cells: Vec<CorrCell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub(super) fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub(super) fn as_attr(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub(super) fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub(super) fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}
