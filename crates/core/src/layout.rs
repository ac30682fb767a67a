//! Chart layout geometry: squarified treemap rectangles and shelf-packed
//! bubble placement. Pure math over the already-shaped data, so the
//! renderers only push pixels.

/// Axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

/// A placed circle, radius in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl Circle {
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let dx = px - self.x;
        let dy = py - self.y;
        dx * dx + dy * dy <= self.r * self.r
    }
}

/// Squarified treemap of `values` into a `width` x `height` region.
///
/// Returns one rect per value in the same order, with area proportional
/// to the value. Callers pass values descending (the chart sorts first);
/// zero, negative, and non-finite values occupy no area. An empty or
/// degenerate input yields all-zero rects rather than an error.
pub fn treemap(values: &[f64], width: f64, height: f64) -> Vec<Rect> {
    let zero = Rect {
        x: 0.0,
        y: 0.0,
        w: 0.0,
        h: 0.0,
    };
    let mut rects = vec![zero; values.len()];

    let total: f64 = values.iter().filter(|v| v.is_finite() && **v > 0.0).sum();
    if total <= 0.0 || width <= 0.0 || height <= 0.0 {
        return rects;
    }

    let scale = width * height / total;
    let areas: Vec<f64> = values
        .iter()
        .map(|v| {
            if v.is_finite() && *v > 0.0 {
                v * scale
            } else {
                0.0
            }
        })
        .collect();

    let mut free = Rect {
        x: 0.0,
        y: 0.0,
        w: width,
        h: height,
    };
    let mut row: Vec<usize> = Vec::new();
    let mut row_area = 0.0;

    for i in (0..areas.len()).filter(|&i| areas[i] > 0.0) {
        if row.is_empty() {
            row.push(i);
            row_area = areas[i];
            continue;
        }

        let side = free.w.min(free.h);
        let current = worst_aspect(&row, &areas, row_area, side);
        row.push(i);
        let with_next = worst_aspect(&row, &areas, row_area + areas[i], side);

        if with_next > current {
            // Adding this item makes the row worse; close the row and
            // start a fresh one with it.
            row.pop();
            lay_row(&row, &areas, row_area, &mut free, &mut rects);
            row.clear();
            row.push(i);
            row_area = areas[i];
        } else {
            row_area += areas[i];
        }
    }

    if !row.is_empty() {
        lay_row(&row, &areas, row_area, &mut free, &mut rects);
    }

    rects
}

/// Worst (largest) width:height ratio a row would have if laid along a
/// side of length `side`. The squarify criterion keeps this minimal.
fn worst_aspect(row: &[usize], areas: &[f64], row_area: f64, side: f64) -> f64 {
    let mut max_area = f64::MIN;
    let mut min_area = f64::MAX;
    for &i in row {
        max_area = max_area.max(areas[i]);
        min_area = min_area.min(areas[i]);
    }
    let side_sq = side * side;
    let sum_sq = row_area * row_area;
    f64::max(side_sq * max_area / sum_sq, sum_sq / (side_sq * min_area))
}

/// Place one closed row along the shorter side of the free region and
/// shrink the region by the strip it consumed.
fn lay_row(row: &[usize], areas: &[f64], row_area: f64, free: &mut Rect, out: &mut [Rect]) {
    if free.w >= free.h {
        // Vertical strip against the left edge.
        let strip_w = row_area / free.h;
        let mut y = free.y;
        for &i in row {
            let item_h = areas[i] / strip_w;
            out[i] = Rect {
                x: free.x,
                y,
                w: strip_w,
                h: item_h,
            };
            y += item_h;
        }
        free.x += strip_w;
        free.w -= strip_w;
    } else {
        // Horizontal strip along the top edge.
        let strip_h = row_area / free.w;
        let mut x = free.x;
        for &i in row {
            let item_w = areas[i] / strip_h;
            out[i] = Rect {
                x,
                y: free.y,
                w: item_w,
                h: strip_h,
            };
            x += item_w;
        }
        free.y += strip_h;
        free.h -= strip_h;
    }
}

const BUBBLE_R_MIN: f64 = 6.0;
const BUBBLE_R_MAX: f64 = 80.0;
const BUBBLE_PAD: f64 = 4.0;

/// Bubble placement: sqrt radius scale, then shelf packing.
///
/// Radii go from `values` (descending) through a square-root scale, so
/// area tracks the value; circles are then placed left to right in rows,
/// wrapping at `width`. If the rows overflow `height`, all radii shrink
/// and the placement reruns. Returns one circle per value, same order;
/// degenerate values get a zero radius at the origin and are not drawn.
pub fn pack_circles(values: &[f64], width: f64, height: f64) -> Vec<Circle> {
    let zero = Circle {
        x: 0.0,
        y: 0.0,
        r: 0.0,
    };
    let max_value = values
        .iter()
        .copied()
        .filter(|v| v.is_finite() && *v > 0.0)
        .fold(0.0, f64::max);
    if max_value <= 0.0 || width <= 0.0 || height <= 0.0 {
        return vec![zero; values.len()];
    }

    let radii: Vec<f64> = values
        .iter()
        .map(|v| {
            if v.is_finite() && *v > 0.0 {
                BUBBLE_R_MIN + (BUBBLE_R_MAX - BUBBLE_R_MIN) * (v / max_value).sqrt()
            } else {
                0.0
            }
        })
        .collect();

    let mut shrink = 1.0;
    loop {
        let scaled: Vec<f64> = radii.iter().map(|r| r * shrink).collect();
        let circles = shelf_place(&scaled, width);
        let bottom = circles
            .iter()
            .map(|c| c.y + c.r)
            .fold(0.0, f64::max);
        if bottom + BUBBLE_PAD <= height || shrink < 0.2 {
            return circles;
        }
        shrink *= 0.85;
    }
}

fn shelf_place(radii: &[f64], width: f64) -> Vec<Circle> {
    let mut out = vec![
        Circle {
            x: 0.0,
            y: 0.0,
            r: 0.0,
        };
        radii.len()
    ];

    let mut cursor_x = BUBBLE_PAD;
    let mut row_top = BUBBLE_PAD;
    let mut row_height = 0.0f64;

    for (i, &r) in radii.iter().enumerate() {
        if r <= 0.0 {
            continue;
        }
        let diameter = 2.0 * r;
        if cursor_x > BUBBLE_PAD && cursor_x + diameter + BUBBLE_PAD > width {
            row_top += row_height + BUBBLE_PAD;
            cursor_x = BUBBLE_PAD;
            row_height = 0.0;
        }
        out[i] = Circle {
            x: cursor_x + r,
            y: row_top + r,
            r,
        };
        cursor_x += diameter + BUBBLE_PAD;
        row_height = row_height.max(diameter);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn treemap_areas_are_proportional_to_values() {
        let values = vec![8.0, 4.0, 2.0, 2.0];
        let rects = treemap(&values, 100.0, 100.0);
        let total_value: f64 = values.iter().sum();

        for (value, rect) in values.iter().zip(&rects) {
            let expected = 100.0 * 100.0 * value / total_value;
            assert!((rect.area() - expected).abs() < EPS, "area off for {value}");
        }
    }

    #[test]
    fn treemap_rects_stay_inside_the_bounds() {
        let values: Vec<f64> = (1..=20).map(f64::from).rev().collect();
        for rect in treemap(&values, 800.0, 600.0) {
            assert!(rect.x >= -EPS && rect.y >= -EPS);
            assert!(rect.x + rect.w <= 800.0 + EPS);
            assert!(rect.y + rect.h <= 600.0 + EPS);
        }
    }

    #[test]
    fn treemap_rects_do_not_overlap() {
        let values = vec![9.0, 7.0, 5.0, 4.0, 2.0, 1.0];
        let rects = treemap(&values, 300.0, 200.0);
        for (i, a) in rects.iter().enumerate() {
            for b in rects.iter().skip(i + 1) {
                let x_overlap = f64::min(a.x + a.w, b.x + b.w) - f64::max(a.x, b.x);
                let y_overlap = f64::min(a.y + a.h, b.y + b.h) - f64::max(a.y, b.y);
                assert!(
                    x_overlap <= EPS || y_overlap <= EPS,
                    "rects {a:?} and {b:?} overlap"
                );
            }
        }
    }

    #[test]
    fn treemap_of_nothing_is_all_zero_rects() {
        assert!(treemap(&[], 100.0, 100.0).is_empty());
        for rect in treemap(&[0.0, -1.0, f64::NAN], 100.0, 100.0) {
            assert_eq!(rect.area(), 0.0);
        }
    }

    #[test]
    fn bubbles_do_not_overlap() {
        let values: Vec<f64> = (1..=30).map(|i| f64::from(i * i)).rev().collect();
        let circles = pack_circles(&values, 800.0, 800.0);
        for (i, a) in circles.iter().enumerate() {
            if a.r <= 0.0 {
                continue;
            }
            for b in circles.iter().skip(i + 1) {
                if b.r <= 0.0 {
                    continue;
                }
                let dist = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
                assert!(dist + EPS >= a.r + b.r, "circles {a:?} and {b:?} overlap");
            }
        }
    }

    #[test]
    fn bubble_radii_track_value_order() {
        let values = vec![100.0, 50.0, 10.0];
        let circles = pack_circles(&values, 800.0, 800.0);
        assert!(circles[0].r > circles[1].r);
        assert!(circles[1].r > circles[2].r);
    }

    #[test]
    fn bubbles_stay_within_the_width() {
        let values: Vec<f64> = (1..=40).map(f64::from).rev().collect();
        for c in pack_circles(&values, 400.0, 2000.0) {
            if c.r > 0.0 {
                assert!(c.x - c.r >= 0.0 && c.x + c.r <= 400.0 + EPS);
            }
        }
    }

    #[test]
    fn degenerate_values_get_zero_radius_in_place() {
        let circles = pack_circles(&[10.0, 0.0, 5.0], 800.0, 800.0);
        assert_eq!(circles.len(), 3);
        assert_eq!(circles[1].r, 0.0);
        assert!(circles[0].r > 0.0 && circles[2].r > 0.0);
    }
}
