//! The session-owned application state.
//!
//! The reference dashboard hung a mutable `movieData` off the global
//! scope and let every chart reach for it. Here the orchestrator owns one
//! `Dataset`, built once when both fetches land, and everything else gets
//! read-only views through the accessors.

use crate::filter::FilterQuery;
use crate::record::{ChangeRecord, MovieRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    movies: Vec<MovieRecord>,
    changes: Vec<ChangeRecord>,
    genres: Vec<String>,
    year_min: i32,
    year_max: i32,
}

impl Dataset {
    /// Build the state object: distinct genres (sorted, deduped) and the
    /// year span are derived once here, not per update.
    pub fn new(movies: Vec<MovieRecord>, changes: Vec<ChangeRecord>) -> Self {
        let mut genres: Vec<String> = movies
            .iter()
            .flat_map(|m| m.genres.iter().cloned())
            .collect();
        genres.sort();
        genres.dedup();

        let year_min = movies.iter().map(|m| m.year).min().unwrap_or(0);
        let year_max = movies.iter().map(|m| m.year).max().unwrap_or(0);

        Self {
            movies,
            changes,
            genres,
            year_min,
            year_max,
        }
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn changes(&self) -> &[ChangeRecord] {
        &self.changes
    }

    /// Distinct genre tags across the loaded set, sorted alphabetically.
    /// The checkbox panel is generated from this once at load.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Inclusive year span of the loaded set; `(0, 0)` when empty.
    pub fn year_span(&self) -> (i32, i32) {
        (self.year_min, self.year_max)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// The widest query: full year span, no genre restriction. Initial
    /// slider state.
    pub fn full_query(&self) -> FilterQuery {
        FilterQuery::year_range(self.year_min, self.year_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_movies;

    fn movie(year: i32, genres: &[&str]) -> MovieRecord {
        MovieRecord {
            id: format!("m{year}"),
            title: format!("m{year}"),
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

    #[test]
    fn genres_are_distinct_and_sorted() {
        let data = Dataset::new(
            vec![
                movie(2001, &["Drama", "Action"]),
                movie(2002, &["Action", "Comedy"]),
            ],
            Vec::new(),
        );
        assert_eq!(data.genres(), ["Action", "Comedy", "Drama"]);
    }

    #[test]
    fn year_span_covers_the_loaded_set() {
        let data = Dataset::new(vec![movie(1994, &[]), movie(2021, &[])], Vec::new());
        assert_eq!(data.year_span(), (1994, 2021));
    }

    #[test]
    fn full_query_matches_everything() {
        let data = Dataset::new(
            vec![movie(1994, &["A"]), movie(2005, &["B"]), movie(2021, &[])],
            Vec::new(),
        );
        assert_eq!(filter_movies(data.movies(), &data.full_query()).len(), 3);
    }

    #[test]
    fn empty_dataset_is_well_formed() {
        let data = Dataset::new(Vec::new(), Vec::new());
        assert!(data.is_empty());
        assert!(data.genres().is_empty());
        assert_eq!(data.year_span(), (0, 0));
    }
}
