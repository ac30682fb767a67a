//! Per-chart data shaping: top-N selection, company group-sums, and the
//! superlatives feeding the fun-facts panel.

use core::cmp::Ordering;

use hashbrown::HashMap;

use crate::record::MovieRecord;

/// Treemap population: the highest-grossing movies of the filtered set.
pub const TOP_MOVIES: usize = 50;

/// Bubble chart population: the highest-grossing production companies.
pub const TOP_COMPANIES: usize = 100;

/// The `n` records with the largest worldwide gross, descending. The sort
/// is stable, so equal grosses keep their source order; fewer than `n`
/// records returns all of them.
pub fn top_by_gross(movies: &[MovieRecord], n: usize) -> Vec<MovieRecord> {
    let mut sorted = movies.to_vec();
    sorted.sort_by(|a, b| {
        b.gross_world_wide
            .partial_cmp(&a.gross_world_wide)
            .unwrap_or(Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

/// Company totals: every company a record names receives the record's
/// full worldwide gross. Output descending by total, capped at `n`;
/// companies with equal totals keep first-appearance order.
pub fn company_gross(movies: &[MovieRecord], n: usize) -> Vec<(String, f64)> {
    // First-appearance order kept on the side so the final sort has a
    // deterministic tie order regardless of hash iteration.
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, f64> = HashMap::new();

    for movie in movies {
        for company in &movie.companies {
            match sums.get_mut(company.as_str()) {
                Some(total) => *total += movie.gross_world_wide,
                None => {
                    order.push(company.clone());
                    sums.insert(company.clone(), movie.gross_world_wide);
                }
            }
        }
    }

    let mut out: Vec<(String, f64)> = order
        .into_iter()
        .map(|name| {
            let total = sums.get(&name).copied().unwrap_or(0.0);
            (name, total)
        })
        .collect();
    out.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    out.truncate(n);
    out
}

/// Extremal records over the filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct FunFacts {
    pub highest_rated: MovieRecord,
    pub lowest_rated: MovieRecord,
    pub most_nominated: MovieRecord,
    pub top_domestic: MovieRecord,
    pub top_worldwide: MovieRecord,
    pub smallest_budget: MovieRecord,
}

impl FunFacts {
    /// `None` on an empty set. Ties resolve to the first record seen:
    /// every comparison below is strict, so a later equal record never
    /// displaces an earlier one.
    pub fn compute(movies: &[MovieRecord]) -> Option<Self> {
        let first = movies.first()?;
        let mut facts = FunFacts {
            highest_rated: first.clone(),
            lowest_rated: first.clone(),
            most_nominated: first.clone(),
            top_domestic: first.clone(),
            top_worldwide: first.clone(),
            smallest_budget: first.clone(),
        };

        for movie in &movies[1..] {
            if movie.rating > facts.highest_rated.rating {
                facts.highest_rated = movie.clone();
            }
            if movie.rating < facts.lowest_rated.rating {
                facts.lowest_rated = movie.clone();
            }
            if movie.nominations > facts.most_nominated.nominations {
                facts.most_nominated = movie.clone();
            }
            if movie.gross_us_canada > facts.top_domestic.gross_us_canada {
                facts.top_domestic = movie.clone();
            }
            if movie.gross_world_wide > facts.top_worldwide.gross_world_wide {
                facts.top_worldwide = movie.clone();
            }
            if movie.budget < facts.smallest_budget.budget {
                facts.smallest_budget = movie.clone();
            }
        }

        Some(facts)
    }
}
