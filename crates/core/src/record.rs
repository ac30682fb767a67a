//! Wire types and field coercion for the two dataset endpoints.
//!
//! The movie endpoint is loose about types: numeric columns may arrive as
//! JSON numbers or as numeric strings, and the `genres` /
//! `production_companies` columns are stringified array literals with
//! inconsistent quoting. Everything is repaired here, once, at load time;
//! the rest of the crate only ever sees [`MovieRecord`].

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::listparse;

/// Errors surfaced while loading a dataset payload.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("endpoint returned HTTP {0}")]
    Status(u16),
    #[error("payload is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One movie, fully typed. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub nominations: u32,
    pub companies: Vec<String>,
    pub votes: u64,
    pub rating: f64,
    pub budget: f64,
    pub gross_world_wide: f64,
    pub gross_us_canada: f64,
    pub genres: Vec<String>,
}

/// Wire shape of one `/get-movies` element, before repair.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMovieRecord {
    #[serde(default, deserialize_with = "flex_string")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "flex_f64")]
    pub year: f64,
    #[serde(default, deserialize_with = "flex_f64")]
    pub nominations: f64,
    #[serde(default)]
    pub production_companies: String,
    #[serde(default, deserialize_with = "flex_f64")]
    pub votes: f64,
    #[serde(default, deserialize_with = "flex_f64")]
    pub rating: f64,
    #[serde(default, deserialize_with = "flex_f64")]
    pub budget: f64,
    #[serde(default, deserialize_with = "flex_f64")]
    pub gross_world_wide: f64,
    #[serde(default, deserialize_with = "flex_f64")]
    pub gross_us_canada: f64,
    #[serde(default)]
    pub genres: String,
}

impl RawMovieRecord {
    /// Coerce to the typed record. Never fails: unparseable numerics are
    /// already zero by this point, and the list columns fall back to a
    /// single-element list at worst.
    pub fn into_movie(self) -> MovieRecord {
        MovieRecord {
            id: self.id,
            title: self.title,
            year: finite_or_zero(self.year) as i32,
            nominations: non_negative(self.nominations) as u32,
            companies: listparse::parse_list(&self.production_companies),
            votes: non_negative(self.votes) as u64,
            rating: finite_or_zero(self.rating),
            budget: finite_or_zero(self.budget),
            gross_world_wide: finite_or_zero(self.gross_world_wide),
            gross_us_canada: finite_or_zero(self.gross_us_canada),
            genres: listparse::parse_list(&self.genres),
        }
    }
}

/// One row of the pre-aggregated year-over-year change dataset. Consumed
/// only by the correlation heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    #[serde(default, deserialize_with = "flex_i32")]
    pub year: i32,
    #[serde(default, deserialize_with = "flex_f64")]
    pub rating_change: f64,
    #[serde(default, deserialize_with = "flex_f64")]
    pub votes_change: f64,
    #[serde(default, deserialize_with = "flex_f64")]
    pub budget_change: f64,
    #[serde(default, deserialize_with = "flex_f64")]
    pub gross_ww_change: f64,
    #[serde(default, deserialize_with = "flex_f64")]
    pub nominations_change: f64,
}

/// Parse the `/get-movies` payload: a JSON array of raw movie objects.
pub fn parse_movies(json: &str) -> Result<Vec<MovieRecord>, DataError> {
    let raw: Vec<RawMovieRecord> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(RawMovieRecord::into_movie).collect())
}

/// Parse the `/get-changes` payload.
pub fn parse_changes(json: &str) -> Result<Vec<ChangeRecord>, DataError> {
    Ok(serde_json::from_str(json)?)
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Accept a number, a numeric string, or null. Anything else coerces to
/// zero; a failed load must degrade, not error.
fn flex_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

fn flex_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    flex_f64(deserializer).map(|v| v as i32)
}

/// Accept a string or a numeric id.
fn flex_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_numeric_strings_alike() {
        let movies = parse_movies(
            r#"[{"id": 42, "title": "Alpha", "year": "1999",
                 "nominations": 3, "votes": "120000", "rating": 8.1,
                 "budget": "5000000", "gross_world_wide": 9000000,
                 "gross_us_canada": "4000000",
                 "genres": "['Action']",
                 "production_companies": "['Alpha Films', 'Beta Bros']"}]"#,
        )
        .unwrap();

        assert_eq!(movies.len(), 1);
        let m = &movies[0];
        assert_eq!(m.id, "42");
        assert_eq!(m.year, 1999);
        assert_eq!(m.votes, 120_000);
        assert_eq!(m.budget, 5_000_000.0);
        assert_eq!(m.gross_us_canada, 4_000_000.0);
        assert_eq!(m.companies, vec!["Alpha Films", "Beta Bros"]);
    }

    #[test]
    fn missing_and_null_fields_default_to_zero() {
        let movies =
            parse_movies(r#"[{"title": "Bare", "year": 2010, "rating": null}]"#).unwrap();
        let m = &movies[0];
        assert_eq!(m.id, "");
        assert_eq!(m.nominations, 0);
        assert_eq!(m.rating, 0.0);
        assert!(m.genres.is_empty());
        assert!(m.companies.is_empty());
    }

    #[test]
    fn garbage_numeric_string_degrades_not_errors() {
        let movies = parse_movies(r#"[{"title": "X", "votes": "n/a", "year": 2000}]"#).unwrap();
        assert_eq!(movies[0].votes, 0);
    }

    #[test]
    fn top_level_shape_errors_are_reported() {
        assert!(matches!(
            parse_movies(r#"{"not": "an array"}"#),
            Err(DataError::Decode(_))
        ));
    }

    #[test]
    fn change_rows_parse_with_defaults() {
        let changes = parse_changes(
            r#"[{"year": 2001, "rating_change": -0.2, "gross_ww_change": "1500000"}]"#,
        )
        .unwrap();
        assert_eq!(changes[0].year, 2001);
        assert_eq!(changes[0].rating_change, -0.2);
        assert_eq!(changes[0].gross_ww_change, 1_500_000.0);
        assert_eq!(changes[0].votes_change, 0.0);
    }
}
