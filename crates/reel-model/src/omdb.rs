use serde::{Deserialize, Serialize};

use crate::movie::{Movie, UserRef};

const UNKNOWN: &str = "N/A";

/// Raw OMDB metadata payload. Search hits carry only the short fields;
/// detail lookups fill the rest. Field names follow OMDB's JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OmdbRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Poster")]
    pub poster: String,
    #[serde(rename = "Rated", default)]
    pub rated: Option<String>,
    #[serde(rename = "Released", default)]
    pub released: Option<String>,
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "Director", default)]
    pub director: Option<String>,
    #[serde(rename = "Writer", default)]
    pub writer: Option<String>,
    #[serde(rename = "Actors", default)]
    pub actors: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "Language", default)]
    pub language: Option<String>,
    #[serde(rename = "Country", default)]
    pub country: Option<String>,
    #[serde(rename = "Awards", default)]
    pub awards: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbRecord {
    /// Build a catalog entry from this metadata, with absent fields
    /// mapped to the `"N/A"` sentinel and an empty rating list.
    pub fn into_movie(self, id: i64, added_by: UserRef) -> Movie {
        fn or_unknown(v: Option<String>) -> String {
            v.unwrap_or_else(|| UNKNOWN.to_string())
        }

        Movie {
            id,
            imdb_id: self.imdb_id,
            title: self.title,
            year: self.year,
            rated: or_unknown(self.rated),
            released: or_unknown(self.released),
            runtime: or_unknown(self.runtime),
            genre: or_unknown(self.genre),
            director: or_unknown(self.director),
            writer: or_unknown(self.writer),
            actors: or_unknown(self.actors),
            plot: or_unknown(self.plot),
            language: or_unknown(self.language),
            country: or_unknown(self.country),
            awards: or_unknown(self.awards),
            poster: self.poster,
            imdb_rating: or_unknown(self.imdb_rating),
            kind: self.kind,
            added_by,
            ratings: Vec::new(),
            average_rating: 0.0,
        }
    }
}
