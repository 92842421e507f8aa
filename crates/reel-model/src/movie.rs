use chrono::Utc;
use serde::{Deserialize, Serialize};

/// User id attributed to ratings made without an authenticated session.
pub const LOCAL_USER_ID: i64 = 999;

/// Lightweight user reference embedded in ratings and `Movie::added_by`.
/// The auth collaborator owns the full user lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
    pub username: String,
}

impl UserRef {
    /// The sentinel identity for callers with no session.
    pub fn local() -> Self {
        Self {
            id: LOCAL_USER_ID,
            username: "local_user".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: i64,
    pub value: f64,
    #[serde(default)]
    pub comment: Option<String>,
    pub user: UserRef,
    pub created_at: String,
}

/// One catalog entry. Descriptive fields are free text with `"N/A"`
/// standing in for unknown values, matching the backend's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    /// External identifier, the stable dedup key across sources.
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub poster: String,
    pub imdb_rating: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub added_by: UserRef,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    #[serde(default)]
    pub average_rating: f64,
}

impl Movie {
    /// Insert or replace a rating, keyed by the rating user's id, then
    /// recompute the average. A user rates a movie at most once; a
    /// second rating replaces the first in place.
    pub fn put_rating(&mut self, rating: Rating) {
        match self.ratings.iter_mut().find(|r| r.user.id == rating.user.id) {
            Some(existing) => *existing = rating,
            None => self.ratings.push(rating),
        }
        self.recompute_average();
    }

    /// Arithmetic mean of the rating values, `0.0` for an empty list.
    pub fn recompute_average(&mut self) {
        if self.ratings.is_empty() {
            self.average_rating = 0.0;
        } else {
            let sum: f64 = self.ratings.iter().map(|r| r.value).sum();
            self.average_rating = sum / self.ratings.len() as f64;
        }
    }

    /// Rating left on this movie by the given user, if any.
    pub fn rating_by(&self, user_id: i64) -> Option<&Rating> {
        self.ratings.iter().find(|r| r.user.id == user_id)
    }
}

/// Identifier for records synthesized client-side: current time in
/// milliseconds, monotonic enough for a single logical thread.
pub fn local_id() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}
