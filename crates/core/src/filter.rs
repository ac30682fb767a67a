//! The year/genre filter: a linear predicate scan over the loaded set.

use std::collections::BTreeSet;

use crate::record::MovieRecord;

/// The active query derived from the UI controls. Rebuilt from scratch on
/// every control change, never persisted. An empty genre set means "no
/// genre restriction".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    /// Inclusive lower year bound.
    pub year_min: i32,
    /// Inclusive upper year bound.
    pub year_max: i32,
    pub genres: BTreeSet<String>,
}

impl FilterQuery {
    /// A query with year bounds only.
    pub fn year_range(year_min: i32, year_max: i32) -> Self {
        Self {
            year_min,
            year_max,
            genres: BTreeSet::new(),
        }
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    /// Year within bounds, and (when any genres are selected) at least
    /// one of the movie's genres selected.
    pub fn matches(&self, movie: &MovieRecord) -> bool {
        if movie.year < self.year_min || movie.year > self.year_max {
            return false;
        }
        self.genres.is_empty() || movie.genres.iter().any(|g| self.genres.contains(g))
    }
}

/// Filter the loaded set. Output preserves source order, is never sorted
/// here, and may be empty; callers must not assume otherwise.
pub fn filter_movies(movies: &[MovieRecord], query: &FilterQuery) -> Vec<MovieRecord> {
    movies.iter().filter(|m| query.matches(m)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, year: i32, genres: &[&str]) -> MovieRecord {
        MovieRecord {
            id: id.to_string(),
            title: id.to_string(),
            year,
            nominations: 0,
            companies: Vec::new(),
            votes: 0,
            rating: 0.0,
            budget: 0.0,
            gross_world_wide: 0.0,
            gross_us_canada: 0.0,
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    fn sample() -> Vec<MovieRecord> {
        vec![
            movie("a", 2000, &["Drama"]),
            movie("b", 2012, &["Comedy", "Drama"]),
            movie("c", 2020, &["Action"]),
        ]
    }

    #[test]
    fn output_is_a_subsequence_satisfying_both_predicates() {
        let movies = sample();
        let query = FilterQuery::year_range(2010, 2020).with_genres(["Drama"]);
        let out = filter_movies(&movies, &query);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "b");
        for m in &out {
            assert!(query.matches(m));
        }
        // Everything excluded violates at least one predicate.
        for m in movies.iter().filter(|m| !out.contains(m)) {
            assert!(!query.matches(m));
        }
    }

    #[test]
    fn empty_genre_selection_is_year_bounds_only() {
        let movies = sample();
        let out = filter_movies(&movies, &FilterQuery::year_range(2010, 2020));
        assert_eq!(
            out.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            vec!["b", "c"]
        );
    }

    #[test]
    fn year_bounds_are_inclusive() {
        let movies = sample();
        let out = filter_movies(&movies, &FilterQuery::year_range(2000, 2012));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn zero_matches_is_a_valid_result() {
        let out = filter_movies(&sample(), &FilterQuery::year_range(1950, 1960));
        assert!(out.is_empty());
    }

    #[test]
    fn source_order_is_preserved() {
        let movies = vec![
            movie("z", 2005, &["Drama"]),
            movie("a", 2003, &["Drama"]),
            movie("m", 2004, &["Drama"]),
        ];
        let out = filter_movies(&movies, &FilterQuery::year_range(2000, 2010));
        assert_eq!(
            out.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            vec!["z", "a", "m"]
        );
    }

    #[test]
    fn narrowing_year_then_genre_matches_the_dashboard_flow() {
        // Three movies spanning 2000-2020; slide to [2010, 2020], then
        // tick "Comedy".
        let movies = sample();

        let year_only = filter_movies(&movies, &FilterQuery::year_range(2010, 2020));
        assert!(year_only.iter().all(|m| m.year >= 2010));
        assert_eq!(year_only.len(), 2);

        let comedy =
            filter_movies(&movies, &FilterQuery::year_range(2010, 2020).with_genres(["Comedy"]));
        assert_eq!(comedy.len(), 1);
        assert_eq!(comedy[0].id, "b");
    }
}
