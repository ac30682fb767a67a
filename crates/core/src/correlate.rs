//! Pearson correlation over the heatmap's column set.

use crate::record::ChangeRecord;

/// One heatmap cell. `value` is NaN when the correlation is undefined
/// (zero variance in either column, or no rows); renderers treat NaN as
/// "no data", never as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrCell {
    pub row: String,
    pub col: String,
    pub value: f64,
}

/// Pearson correlation with population formulas:
/// `cov(x, y) / (stdev(x) * stdev(y))`. Series of different lengths are
/// truncated to the shorter one. A constant column makes the denominator
/// zero and the result NaN by 0/0, not a panic.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 {
        return f64::NAN;
    }
    let nf = n as f64;
    let mean_x = x[..n].iter().sum::<f64>() / nf;
    let mean_y = y[..n].iter().sum::<f64>() / nf;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    (cov / nf) / ((var_x / nf).sqrt() * (var_y / nf).sqrt())
}

/// All K² cells for the named series, diagonal included, row-major in
/// declaration order.
pub fn correlation_matrix(columns: &[(&str, Vec<f64>)]) -> Vec<CorrCell> {
    let mut cells = Vec::with_capacity(columns.len() * columns.len());
    for (row_name, row_series) in columns {
        for (col_name, col_series) in columns {
            cells.push(CorrCell {
                row: (*row_name).to_string(),
                col: (*col_name).to_string(),
                value: pearson(row_series, col_series),
            });
        }
    }
    cells
}

/// The fixed column set the heatmap correlates, in display order.
pub fn change_series(changes: &[ChangeRecord]) -> Vec<(&'static str, Vec<f64>)> {
    let col = |name: &'static str, get: fn(&ChangeRecord) -> f64| -> (&'static str, Vec<f64>) {
        (name, changes.iter().map(get).collect())
    };
    vec![
        col("rating", |c| c.rating_change),
        col("votes", |c| c.votes_change),
        col("budget", |c| c.budget_change),
        col("gross ww", |c| c.gross_ww_change),
        col("nominations", |c| c.nominations_change),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn perfectly_linear_series_correlate_to_one() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let y = vec![10.0, 20.0, 30.0, 40.0];
        assert!((pearson(&x, &y) - 1.0).abs() < EPS);

        let neg: Vec<f64> = y.iter().map(|v| -v).collect();
        assert!((pearson(&x, &neg) + 1.0).abs() < EPS);
    }

    #[test]
    fn zero_variance_yields_nan_not_a_panic() {
        let constant = vec![3.0, 3.0, 3.0];
        let varying = vec![1.0, 2.0, 3.0];
        assert!(pearson(&constant, &varying).is_nan());
        assert!(pearson(&[], &[]).is_nan());
    }

    #[test]
    fn matrix_covers_all_cells_with_unit_diagonal_and_symmetry() {
        let columns = vec![
            ("a", vec![1.0, 2.0, 3.0, 5.0]),
            ("b", vec![2.0, 1.0, 4.0, 3.0]),
            ("c", vec![9.0, 7.0, 5.0, 1.0]),
        ];
        let cells = correlation_matrix(&columns);
        assert_eq!(cells.len(), 9);

        let value = |r: &str, c: &str| {
            cells
                .iter()
                .find(|cell| cell.row == r && cell.col == c)
                .expect("cell present")
                .value
        };

        for name in ["a", "b", "c"] {
            assert!((value(name, name) - 1.0).abs() < EPS);
        }
        for r in ["a", "b", "c"] {
            for c in ["a", "b", "c"] {
                assert!((value(r, c) - value(c, r)).abs() < EPS);
            }
        }
    }

    #[test]
    fn change_series_has_the_five_columns_in_display_order() {
        let changes = vec![ChangeRecord {
            year: 2001,
            rating_change: 0.1,
            votes_change: 5.0,
            budget_change: -2.0,
            gross_ww_change: 7.0,
            nominations_change: 1.0,
        }];
        let series = change_series(&changes);
        let names: Vec<&str> = series.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["rating", "votes", "budget", "gross ww", "nominations"]);
        assert_eq!(series[3].1, vec![7.0]);
    }
}
