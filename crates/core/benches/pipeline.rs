use criterion::{black_box, criterion_group, criterion_main, Criterion};

use marquee::aggregate::{company_gross, top_by_gross, TOP_COMPANIES, TOP_MOVIES};
use marquee::correlate::{change_series, correlation_matrix};
use marquee::filter::{filter_movies, FilterQuery};
use marquee::layout::treemap;
use marquee::record::{ChangeRecord, MovieRecord};

fn synthetic_movies(n: usize) -> Vec<MovieRecord> {
    let genres = ["Action", "Comedy", "Drama", "Horror", "Sci-Fi"];
    let companies = ["Alpha", "Beta", "Gamma", "Delta"];
    (0..n)
        .map(|i| {
            // Cheap deterministic spread; no RNG needed for a layout bench.
            let k = (i * 2654435761) % 1000;
            MovieRecord {
                id: format!("m{i}"),
                title: format!("Movie {i}"),
                year: 1980 + (i % 45) as i32,
                nominations: (k % 12) as u32,
                companies: vec![
                    companies[i % companies.len()].to_string(),
                    companies[(i / 3) % companies.len()].to_string(),
                ],
                votes: (k * 997) as u64,
                rating: 1.0 + (k as f64) / 125.0,
                budget: 1_000_000.0 + (k as f64) * 90_000.0,
                gross_world_wide: (k as f64) * 1_000_000.0,
                gross_us_canada: (k as f64) * 400_000.0,
                genres: vec![genres[i % genres.len()].to_string()],
            }
        })
        .collect()
}

fn synthetic_changes(n: usize) -> Vec<ChangeRecord> {
    (0..n)
        .map(|i| ChangeRecord {
            year: 1980 + i as i32,
            rating_change: (i as f64 * 0.7).sin(),
            votes_change: (i as f64 * 1.3).cos() * 1000.0,
            budget_change: i as f64 * 11.0,
            gross_ww_change: (i as f64 * 0.4).sin() * 1e6,
            nominations_change: (i % 7) as f64,
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let movies = synthetic_movies(10_000);
    let query = FilterQuery::year_range(1995, 2015).with_genres(["Drama", "Sci-Fi"]);
    c.bench_function("filter_10k", |b| {
        b.iter(|| filter_movies(black_box(&movies), black_box(&query)))
    });
}

fn bench_shaping(c: &mut Criterion) {
    let movies = synthetic_movies(10_000);
    c.bench_function("top50_plus_treemap_10k", |b| {
        b.iter(|| {
            let top = top_by_gross(black_box(&movies), TOP_MOVIES);
            let values: Vec<f64> = top.iter().map(|m| m.gross_world_wide).collect();
            treemap(&values, 1500.0, 600.0)
        })
    });
    c.bench_function("company_sums_10k", |b| {
        b.iter(|| company_gross(black_box(&movies), TOP_COMPANIES))
    });
}

fn bench_correlation(c: &mut Criterion) {
    let changes = synthetic_changes(100);
    c.bench_function("correlation_5x5_over_100_rows", |b| {
        b.iter(|| correlation_matrix(black_box(&change_series(&changes))))
    });
}

criterion_group!(benches, bench_filter, bench_shaping, bench_correlation);
criterion_main!(benches);
