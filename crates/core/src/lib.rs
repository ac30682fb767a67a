//! # marquee
//!
//! Data and computation layer for the Marquee movie dashboard.
//!
//! This crate owns everything that does not touch the DOM: typed records
//! for the movie and year-change payloads, repair of the stringified list
//! columns, the year/genre filter, per-chart aggregation, the Pearson
//! correlation matrix, and the chart layout geometry. The browser shell
//! (`marquee_web`) fetches and renders; this crate computes.
//!
//! ## Quick Start
//!
//! ```
//! use marquee::prelude::*;
//!
//! let movies = parse_movies(
//!     r#"[{"id": "m1", "title": "Alpha", "year": 2004, "rating": 7.5,
//!          "genres": "['Action', 'Drama']",
//!          "production_companies": "['Alpha Films']",
//!          "gross_world_wide": 1000.0}]"#,
//! )
//! .unwrap();
//!
//! let query = FilterQuery::year_range(2000, 2010);
//! let filtered = filter_movies(&movies, &query);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].genres, vec!["Action", "Drama"]);
//! ```
//!
//! ## Modules
//!
//! - [`record`]: wire types, field coercion, payload parsing
//! - [`listparse`]: cascading repair of embedded list-literal strings
//! - [`filter`]: the year/genre predicate scan
//! - [`aggregate`]: top-N, company group-sums, superlatives
//! - [`correlate`]: Pearson correlation matrix
//! - [`layout`]: treemap and bubble-pack geometry
//! - [`dataset`]: the session-owned application state

pub mod aggregate;
pub mod correlate;
pub mod dataset;
pub mod filter;
pub mod layout;
pub mod listparse;
pub mod record;

/// Prelude module for convenient imports.
///
/// ```
/// use marquee::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aggregate::{company_gross, top_by_gross, FunFacts, TOP_COMPANIES, TOP_MOVIES};
    pub use crate::correlate::{change_series, correlation_matrix, CorrCell};
    pub use crate::dataset::Dataset;
    pub use crate::filter::{filter_movies, FilterQuery};
    pub use crate::layout::{pack_circles, treemap, Circle, Rect};
    pub use crate::record::{parse_changes, parse_movies, ChangeRecord, DataError, MovieRecord};
}
