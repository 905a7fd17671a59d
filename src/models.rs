use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

pub const MIN_RELEASE_YEAR: i32 = 1900;

/// How far past the current year a release year may lie (announced titles).
pub const RELEASE_YEAR_HEADROOM: i32 = 5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub release_year: i32,
    pub actors: Vec<String>,
}

/// Candidate movie as submitted by a client. Every field is optional so that
/// missing fields fail our validation with a field-naming message instead of
/// a serde deserialization error; `actors` stays a raw value so that a
/// non-sequence there is a validation failure too.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePayload {
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub actors: Option<Value>,
}

/// A payload that passed validation; the store assigns the id.
#[derive(Clone, Debug)]
pub struct NewMovie {
    pub title: String,
    pub release_year: i32,
    pub actors: Vec<String>,
}

impl MoviePayload {
    /// Checks run in order and stop at the first failure; no write is
    /// attempted on a validation error.
    pub fn validate(self, current_year: i32) -> Result<NewMovie, AppError> {
        let title = self
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::validation("title is required"))?;

        let release_year = self
            .release_year
            .ok_or_else(|| AppError::validation("releaseYear is required"))?;

        let items = match self.actors {
            Some(Value::Array(items)) => items,
            Some(_) => return Err(AppError::validation("actors must be a list")),
            None => return Err(AppError::validation("at least one actor is required")),
        };
        if items.is_empty() {
            return Err(AppError::validation("at least one actor is required"));
        }
        let actors: Vec<String> = items
            .iter()
            .map(|item| item.as_str().map(|a| a.trim().to_string()))
            .collect::<Option<_>>()
            .ok_or_else(|| AppError::validation("actors must be a list of strings"))?;
        if actors.iter().any(|a| a.is_empty()) {
            return Err(AppError::validation("actor names must not be empty"));
        }

        let max_year = current_year + RELEASE_YEAR_HEADROOM;
        if release_year < MIN_RELEASE_YEAR || release_year > max_year {
            return Err(AppError::validation(format!(
                "releaseYear must be between {MIN_RELEASE_YEAR} and {max_year}"
            )));
        }

        Ok(NewMovie { title, release_year, actors })
    }
}

pub fn current_year() -> i32 {
    let today: jiff::civil::Date = jiff::Zoned::now().into();
    i32::from(today.year())
}

/// Case-insensitive substring filter over title, any actor, or the decimal
/// form of the release year. An empty or whitespace-only query matches
/// everything. Mirrored by the client-side filter in the catalog page.
pub fn filter_movies<'a>(movies: &'a [Movie], query: &str) -> Vec<&'a Movie> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return movies.iter().collect();
    }

    movies
        .iter()
        .filter(|m| {
            m.title.to_lowercase().contains(&term)
                || m.actors.iter().any(|a| a.to_lowercase().contains(&term))
                || m.release_year.to_string().contains(&term)
        })
        .collect()
}
