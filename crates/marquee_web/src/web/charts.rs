//! Canvas renderers for the three charts.
//!
//! Each `draw_*` clears its canvas and redraws from the freshly shaped
//! datum; nothing is retained between updates, and an empty datum draws
//! an explicit empty state instead of erroring.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use marquee::correlate::CorrCell;

use super::float_fmt::{fmt_f64_signed_fixed, fmt_usd};
use super::types::{BubbleItem, TreemapItem};

const BG_COLOR: &str = "#0a0f1a";
const EMPTY_TEXT_COLOR: &str = "rgba(170, 180, 230, 0.8)";
const LABEL_COLOR: &str = "rgba(232, 236, 255, 0.92)";
const FAINT_LABEL_COLOR: &str = "rgba(170, 180, 230, 0.85)";
const NAN_CELL_COLOR: &str = "rgba(148, 163, 184, 0.18)";

/// Tile/bubble fill rotation.
const SERIES_COLORS: [&str; 8] = [
    "#7aa2ff", // blue
    "#fbbf24", // amber
    "#4ade80", // green
    "#fb7185", // pink/red
    "#a78bfa", // purple
    "#22c55e", // bright green
    "#60a5fa", // light blue
    "#e879f9", // magenta
];

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, String> {
    canvas
        .get_context("2d")
        .map_err(|_| "canvas: get_context threw".to_string())?
        .ok_or("canvas: missing 2d context".to_string())?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "canvas: context is not 2d".to_string())
}

fn clear(ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
    ctx.set_fill_style_str(BG_COLOR);
    ctx.fill_rect(0.0, 0.0, w, h);
}

fn empty_state(ctx: &CanvasRenderingContext2d, w: f64, h: f64, message: &str) {
    ctx.set_font("14px system-ui, sans-serif");
    ctx.set_fill_style_str(EMPTY_TEXT_COLOR);
    ctx.set_text_align("center");
    let _ = ctx.fill_text(message, w / 2.0, h / 2.0);
}

/// Ellipsize on a char boundary; canvas has no text overflow handling.
fn truncate_label(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Treemap of the top-grossing movies. Tiles arrive pre-laid-out; this
/// only pushes pixels and labels the tiles that have room.
pub(super) fn draw_treemap(
    canvas: &HtmlCanvasElement,
    items: &[TreemapItem],
) -> Result<(), String> {
    let ctx = context_2d(canvas)?;
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    clear(&ctx, w, h);

    if items.is_empty() {
        empty_state(&ctx, w, h, "No movies match the current filters");
        return Ok(());
    }

    ctx.set_text_align("left");
    for (idx, item) in items.iter().enumerate() {
        let r = item.rect;
        if r.area() <= 0.0 {
            continue;
        }

        // Inset by a pixel so neighboring tiles read as separate.
        ctx.set_fill_style_str(SERIES_COLORS[idx % SERIES_COLORS.len()]);
        ctx.set_global_alpha(0.8);
        ctx.fill_rect(r.x + 1.0, r.y + 1.0, (r.w - 2.0).max(0.0), (r.h - 2.0).max(0.0));
        ctx.set_global_alpha(1.0);

        if r.w > 70.0 && r.h > 22.0 {
            ctx.set_fill_style_str(LABEL_COLOR);
            ctx.set_font("12px system-ui, sans-serif");
            let _ = ctx.fill_text_with_max_width(&item.title, r.x + 6.0, r.y + 16.0, r.w - 12.0);
        }
        if r.w > 90.0 && r.h > 40.0 {
            ctx.set_fill_style_str(FAINT_LABEL_COLOR);
            ctx.set_font("11px system-ui, sans-serif");
            let _ =
                ctx.fill_text_with_max_width(&fmt_usd(item.gross), r.x + 6.0, r.y + 31.0, r.w - 12.0);
        }
    }

    Ok(())
}

/// Bubble pack of production-company gross totals.
pub(super) fn draw_bubble_pack(
    canvas: &HtmlCanvasElement,
    items: &[BubbleItem],
) -> Result<(), String> {
    let ctx = context_2d(canvas)?;
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    clear(&ctx, w, h);

    if items.iter().all(|b| b.circle.r <= 0.0) {
        empty_state(&ctx, w, h, "No production companies in this view");
        return Ok(());
    }

    for (idx, item) in items.iter().enumerate() {
        let c = item.circle;
        if c.r <= 0.0 {
            continue;
        }

        ctx.set_fill_style_str(SERIES_COLORS[idx % SERIES_COLORS.len()]);
        ctx.set_global_alpha(0.6);
        ctx.begin_path();
        ctx.arc(c.x, c.y, c.r, 0.0, std::f64::consts::PI * 2.0).ok();
        ctx.fill();
        ctx.set_global_alpha(1.0);

        if c.r > 26.0 {
            ctx.set_fill_style_str(LABEL_COLOR);
            ctx.set_font("11px system-ui, sans-serif");
            ctx.set_text_align("center");
            let label = truncate_label(&item.company, (c.r / 4.5) as usize);
            let _ = ctx.fill_text(&label, c.x, c.y);
            if c.r > 42.0 {
                ctx.set_fill_style_str(FAINT_LABEL_COLOR);
                let _ = ctx.fill_text(&fmt_usd(item.total), c.x, c.y + 14.0);
            }
        }
    }

    Ok(())
}

/// Left/top space reserved for the heatmap's axis labels.
const HEATMAP_LEFT: f64 = 96.0;
const HEATMAP_TOP: f64 = 34.0;
const HEATMAP_PAD: f64 = 12.0;

/// Shared geometry so hover hit-testing agrees with drawing exactly.
/// Returns `(left, top, cell_size)`; `None` when there is nothing to lay
/// out.
pub(super) fn heatmap_geometry(w: f64, h: f64, k: usize) -> Option<(f64, f64, f64)> {
    if k == 0 {
        return None;
    }
    let side = (w - HEATMAP_LEFT - HEATMAP_PAD).min(h - HEATMAP_TOP - HEATMAP_PAD);
    if side <= 0.0 {
        return None;
    }
    Some((HEATMAP_LEFT, HEATMAP_TOP, side / k as f64))
}

/// Which cell (row, col) the canvas-space point falls in, if any.
pub(super) fn heatmap_cell_at(
    canvas: &HtmlCanvasElement,
    k: usize,
    px: f64,
    py: f64,
) -> Option<(usize, usize)> {
    let (left, top, cell) = heatmap_geometry(canvas.width() as f64, canvas.height() as f64, k)?;
    if px < left || py < top {
        return None;
    }
    let col = ((px - left) / cell) as usize;
    let row = ((py - top) / cell) as usize;
    if row < k && col < k {
        Some((row, col))
    } else {
        None
    }
}

/// Diverging fill: amber for positive correlation, blue for negative,
/// neutral for NaN ("no data") cells. Alpha carries the magnitude.
fn corr_color(value: f64) -> String {
    if !value.is_finite() {
        return NAN_CELL_COLOR.to_string();
    }
    let t = value.clamp(-1.0, 1.0);
    if t >= 0.0 {
        format!("rgba(251, 191, 36, {:.3})", 0.08 + 0.84 * t)
    } else {
        format!("rgba(122, 162, 255, {:.3})", 0.08 - 0.84 * t)
    }
}

/// Correlation heatmap over the change-metric columns. `cells` is
/// row-major in `labels` order, diagonal included.
pub(super) fn draw_heatmap(
    canvas: &HtmlCanvasElement,
    labels: &[&str],
    cells: &[CorrCell],
) -> Result<(), String> {
    let ctx = context_2d(canvas)?;
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    clear(&ctx, w, h);

    let k = labels.len();
    let Some((left, top, cell)) = heatmap_geometry(w, h, k) else {
        empty_state(&ctx, w, h, "No change metrics in this year range");
        return Ok(());
    };
    if cells.len() != k * k {
        empty_state(&ctx, w, h, "No change metrics in this year range");
        return Ok(());
    }

    // Column headers across the top, row labels down the left.
    ctx.set_font("11px system-ui, sans-serif");
    ctx.set_fill_style_str(FAINT_LABEL_COLOR);
    for (i, label) in labels.iter().enumerate() {
        let cx = left + (i as f64 + 0.5) * cell;
        ctx.set_text_align("center");
        let _ = ctx.fill_text_with_max_width(label, cx, top - 10.0, cell - 4.0);

        let cy = top + (i as f64 + 0.5) * cell + 4.0;
        ctx.set_text_align("right");
        let _ = ctx.fill_text_with_max_width(label, left - 8.0, cy, HEATMAP_LEFT - 12.0);
    }

    for (i, corr) in cells.iter().enumerate() {
        let row = i / k;
        let col = i % k;
        let x = left + col as f64 * cell;
        let y = top + row as f64 * cell;

        ctx.set_fill_style_str(&corr_color(corr.value));
        ctx.fill_rect(x + 1.0, y + 1.0, cell - 2.0, cell - 2.0);

        if cell > 34.0 {
            ctx.set_fill_style_str(LABEL_COLOR);
            ctx.set_font("11px system-ui, sans-serif");
            ctx.set_text_align("center");
            let text = if corr.value.is_finite() {
                fmt_f64_signed_fixed(corr.value, 2)
            } else {
                "–".to_string()
            };
            let _ = ctx.fill_text(&text, x + cell / 2.0, y + cell / 2.0 + 4.0);
        }
    }

    Ok(())
}
