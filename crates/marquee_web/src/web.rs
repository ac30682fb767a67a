//! Leptos CSR application: the dashboard orchestrator.
//!
//! One `Dataset` is built when both fetches land; after that, every
//! control change runs a single synchronous pass (filter, shape, lay
//! out, redraw all four regions) inside the update effect below. There
//! is no intermediate state between the charts of one pass.

mod charts;
mod controls;
mod facts;
mod fetch;
mod float_fmt;
mod shell;
mod storage;
mod tooltip;
mod types;

use std::collections::BTreeSet;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use marquee::aggregate::{company_gross, top_by_gross, FunFacts, TOP_COMPANIES, TOP_MOVIES};
use marquee::correlate::{change_series, correlation_matrix};
use marquee::filter::{filter_movies, FilterQuery};
use marquee::layout::{pack_circles, treemap as treemap_layout};
use marquee::record::ChangeRecord;

use controls::{GenreCheckboxes, YearRangeSlider};
use facts::FactsPanel;
use float_fmt::{fmt_f64_fixed, fmt_f64_signed_fixed, fmt_usd};
use shell::{ErrorBanner, Topbar};
use storage::PersistedControls;
use tooltip::{TooltipPayload, TooltipPortal, TooltipStore};
use types::{BubbleItem, HeatmapView, LoadState, Theme, TreemapItem};

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

/// Mouse position in canvas-intrinsic coordinates (the canvas is CSS-
/// scaled, so client coordinates have to be mapped back).
fn canvas_point(canvas: &web_sys::HtmlCanvasElement, ev: &leptos::ev::MouseEvent) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    let sx = canvas.width() as f64 / rect.width().max(1.0);
    let sy = canvas.height() as f64 / rect.height().max(1.0);
    (
        (ev.client_x() as f64 - rect.left()) * sx,
        (ev.client_y() as f64 - rect.top()) * sy,
    )
}

fn console_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

#[component]
fn App() -> impl IntoView {
    let (load_state, set_load_state) = signal(LoadState::default());
    let (status, set_status) = signal("loading dataset…".to_string());
    let (error, set_error) = signal(None::<String>);
    let (theme, set_theme) = signal(storage::load_theme().unwrap_or(Theme::Dark));

    let (year_min, set_year_min) = signal(1900i32);
    let (year_max, set_year_max) = signal(2035i32);
    let selected_genres: RwSignal<BTreeSet<String>> = RwSignal::new(BTreeSet::new());

    let (facts, set_facts) = signal(None::<FunFacts>);
    let tooltip: TooltipStore = RwSignal::new(None);

    let treemap_canvas: NodeRef<leptos::html::Canvas> = NodeRef::new();
    let bubble_canvas: NodeRef<leptos::html::Canvas> = NodeRef::new();
    let heatmap_canvas: NodeRef<leptos::html::Canvas> = NodeRef::new();

    // Last-rendered layouts, kept for hover hit-testing only.
    let treemap_hits: StoredValue<Vec<TreemapItem>> = StoredValue::new(Vec::new());
    let bubble_hits: StoredValue<Vec<BubbleItem>> = StoredValue::new(Vec::new());
    let heatmap_view: StoredValue<HeatmapView> = StoredValue::new(HeatmapView::default());

    let genre_options = Memo::new(move |_| {
        load_state.with(|s| s.dataset().map(|d| d.genres().to_vec()).unwrap_or_default())
    });
    let year_bounds = Memo::new(move |_| {
        load_state.with(|s| s.dataset().map(|d| d.year_span()).unwrap_or((1900, 2035)))
    });

    Effect::new(move |_| {
        let t = theme.get();
        storage::apply_theme_to_document(t);
        storage::save_theme(t);
    });

    // The one Uninitialized -> Ready transition. A failed fetch logs,
    // raises the banner, and leaves the dashboard uninitialized for the
    // rest of the session.
    spawn_local(async move {
        let started = web_time::Instant::now();
        match fetch::load_dataset().await {
            Ok((dataset, base)) => {
                let dataset = Arc::new(dataset);
                let (span_lo, span_hi) = dataset.year_span();

                let mut lo = span_lo;
                let mut hi = span_hi;
                let mut genres: BTreeSet<String> = BTreeSet::new();
                if let Some(saved) = storage::load_persisted_controls() {
                    if saved.year_min <= saved.year_max
                        && saved.year_min >= span_lo
                        && saved.year_max <= span_hi
                    {
                        lo = saved.year_min;
                        hi = saved.year_max;
                    }
                    genres = saved
                        .genres
                        .into_iter()
                        .filter(|g| dataset.genres().contains(g))
                        .collect();
                }

                set_year_min.set(lo);
                set_year_max.set(hi);
                selected_genres.set(genres);
                set_load_state.set(LoadState::Ready(Arc::clone(&dataset)));
                set_status.set(format!(
                    "{} movies · {} ms · {}",
                    dataset.len(),
                    started.elapsed().as_millis(),
                    base,
                ));
            }
            Err(e) => {
                console_error(&format!("dataset load failed: {e}"));
                set_error.set(Some(format!("Dataset load failed: {e}")));
                set_status.set("load failed".to_string());
            }
        }
    });

    // The update pass: runs on load, on every slider/checkbox change,
    // and once more when each canvas mounts.
    Effect::new(move |_| {
        let state = load_state.get();
        let lo = year_min.get();
        let hi = year_max.get();
        let genres = selected_genres.get();

        let Some(treemap_el) = treemap_canvas.get() else {
            return;
        };
        let Some(bubble_el) = bubble_canvas.get() else {
            return;
        };
        let Some(heatmap_el) = heatmap_canvas.get() else {
            return;
        };

        let Some(dataset) = state.dataset() else {
            let _ = charts::draw_treemap(&treemap_el, &[]);
            let _ = charts::draw_bubble_pack(&bubble_el, &[]);
            let _ = charts::draw_heatmap(&heatmap_el, &[], &[]);
            set_facts.set(None);
            return;
        };

        let query = FilterQuery {
            year_min: lo,
            year_max: hi,
            genres: genres.clone(),
        };
        let filtered = filter_movies(dataset.movies(), &query);

        // Treemap: top 50 by worldwide gross.
        let top = top_by_gross(&filtered, TOP_MOVIES);
        let values: Vec<f64> = top.iter().map(|m| m.gross_world_wide).collect();
        let rects = treemap_layout(
            &values,
            treemap_el.width() as f64,
            treemap_el.height() as f64,
        );
        let treemap_items: Vec<TreemapItem> = top
            .into_iter()
            .zip(rects)
            .map(|(m, rect)| TreemapItem {
                title: m.title,
                year: m.year,
                rating: m.rating,
                gross: m.gross_world_wide,
                rect,
            })
            .collect();

        // Bubbles: company totals over the same filtered set.
        let sums = company_gross(&filtered, TOP_COMPANIES);
        let values: Vec<f64> = sums.iter().map(|(_, total)| *total).collect();
        let circles = pack_circles(
            &values,
            bubble_el.width() as f64,
            bubble_el.height() as f64,
        );
        let bubble_items: Vec<BubbleItem> = sums
            .into_iter()
            .zip(circles)
            .map(|((company, total), circle)| BubbleItem {
                company,
                total,
                circle,
            })
            .collect();

        // Heatmap: change metrics respect the year window (genres don't
        // apply to pre-aggregated per-year rows).
        let changes: Vec<ChangeRecord> = dataset
            .changes()
            .iter()
            .filter(|c| c.year >= lo && c.year <= hi)
            .cloned()
            .collect();
        let series = change_series(&changes);
        let labels: Vec<&'static str> = series.iter().map(|(name, _)| *name).collect();
        let cells = if changes.is_empty() {
            Vec::new()
        } else {
            correlation_matrix(&series)
        };

        let result = charts::draw_treemap(&treemap_el, &treemap_items)
            .and_then(|_| charts::draw_bubble_pack(&bubble_el, &bubble_items))
            .and_then(|_| {
                if cells.is_empty() {
                    charts::draw_heatmap(&heatmap_el, &[], &[])
                } else {
                    charts::draw_heatmap(&heatmap_el, &labels, &cells)
                }
            });
        if let Err(e) = result {
            console_error(&format!("render failed: {e}"));
        }

        set_facts.set(FunFacts::compute(&filtered));

        treemap_hits.set_value(treemap_items);
        bubble_hits.set_value(bubble_items);
        heatmap_view.set_value(if cells.is_empty() {
            HeatmapView::default()
        } else {
            HeatmapView { labels, cells }
        });

        storage::save_persisted_controls(&PersistedControls {
            version: 1,
            year_min: lo,
            year_max: hi,
            genres: genres.iter().cloned().collect(),
        });
    });

    let on_treemap_move = move |ev: leptos::ev::MouseEvent| {
        let Some(canvas) = treemap_canvas.get_untracked() else {
            return;
        };
        let (px, py) = canvas_point(&canvas, &ev);
        let hit =
            treemap_hits.with_value(|items| items.iter().find(|i| i.rect.contains(px, py)).cloned());
        tooltip.set(hit.map(|item| TooltipPayload {
            title: item.title,
            lines: vec![
                format!("Worldwide gross: {}", fmt_usd(item.gross)),
                format!("Year: {}", item.year),
                format!("Rating: {}", fmt_f64_fixed(item.rating, 1)),
            ],
            top_px: f64::from(ev.client_y()) + 14.0,
            left_px: f64::from(ev.client_x()) + 14.0,
        }));
    };

    let on_bubble_move = move |ev: leptos::ev::MouseEvent| {
        let Some(canvas) = bubble_canvas.get_untracked() else {
            return;
        };
        let (px, py) = canvas_point(&canvas, &ev);
        let hit = bubble_hits
            .with_value(|items| items.iter().find(|i| i.circle.contains(px, py)).cloned());
        tooltip.set(hit.map(|item| TooltipPayload {
            title: item.company,
            lines: vec![format!("Summed gross: {}", fmt_usd(item.total))],
            top_px: f64::from(ev.client_y()) + 14.0,
            left_px: f64::from(ev.client_x()) + 14.0,
        }));
    };

    let on_heatmap_move = move |ev: leptos::ev::MouseEvent| {
        let Some(canvas) = heatmap_canvas.get_untracked() else {
            return;
        };
        let (px, py) = canvas_point(&canvas, &ev);
        let hit = heatmap_view.with_value(|view| {
            let k = view.labels.len();
            charts::heatmap_cell_at(&canvas, k, px, py)
                .and_then(|(row, col)| view.cells.get(row * k + col).cloned())
        });
        tooltip.set(hit.map(|cell| TooltipPayload {
            title: format!("{} × {}", cell.row, cell.col),
            lines: vec![if cell.value.is_finite() {
                format!("r = {}", fmt_f64_signed_fixed(cell.value, 3))
            } else {
                "no data (zero variance)".to_string()
            }],
            top_px: f64::from(ev.client_y()) + 14.0,
            left_px: f64::from(ev.client_x()) + 14.0,
        }));
    };

    view! {
        <Topbar status=status theme=theme set_theme=set_theme />
        <main class="dashboard">
            <ErrorBanner error=error set_error=set_error />
            <section class="card controls">
                <div class="control-block">
                    <h2>"Release years"</h2>
                    <YearRangeSlider
                        bounds=year_bounds
                        year_min=year_min
                        set_year_min=set_year_min
                        year_max=year_max
                        set_year_max=set_year_max
                    />
                </div>
                <div class="control-block">
                    <h2>"Genres"</h2>
                    <GenreCheckboxes options=genre_options selected=selected_genres />
                </div>
            </section>
            <section class="charts">
                <div class="card chart wide">
                    <h2>"Top 50 movies by worldwide gross"</h2>
                    <canvas
                        node_ref=treemap_canvas
                        width="1500"
                        height="600"
                        on:mousemove=on_treemap_move
                        on:mouseleave=move |_| tooltip.set(None)
                    ></canvas>
                </div>
                <div class="card chart">
                    <h2>"Production companies by summed gross"</h2>
                    <canvas
                        node_ref=bubble_canvas
                        width="800"
                        height="800"
                        on:mousemove=on_bubble_move
                        on:mouseleave=move |_| tooltip.set(None)
                    ></canvas>
                </div>
                <div class="card chart">
                    <h2>"Year-over-year change correlations"</h2>
                    <canvas
                        node_ref=heatmap_canvas
                        width="560"
                        height="520"
                        on:mousemove=on_heatmap_move
                        on:mouseleave=move |_| tooltip.set(None)
                    ></canvas>
                </div>
                <div class="card chart">
                    <h2>"Fun facts"</h2>
                    <FactsPanel facts=facts />
                </div>
            </section>
        </main>
        <TooltipPortal store=tooltip />
    }
}
