use reel_model::Movie;

use crate::error::CacheError;
use crate::kv::Kv;

/// The locally persisted movie list: a single JSON blob under one key,
/// kept in insertion order. Every mutation rewrites the whole blob
/// synchronously — there is one logical writer and no partial-write
/// protection beyond the backend's own.
///
/// Read-side corruption never surfaces: an unparseable or absent blob
/// is an empty store.
pub struct CacheStore<K: Kv> {
    kv: K,
}

const MOVIES_KEY: &str = "localMovies";

impl<K: Kv> CacheStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// All cached movies, insertion-ordered. Absent or corrupt payloads
    /// yield an empty list.
    pub fn list(&self) -> Vec<Movie> {
        let Ok(Some(blob)) = self.kv.get(MOVIES_KEY) else {
            return Vec::new();
        };
        serde_json::from_str(&blob).unwrap_or_default()
    }

    /// Replace the record with the same external identifier in place
    /// (preserving its position), or append.
    pub fn upsert(&self, movie: Movie) -> Result<(), CacheError> {
        let mut movies = self.list();
        match movies.iter_mut().find(|m| m.imdb_id == movie.imdb_id) {
            Some(existing) => *existing = movie,
            None => movies.push(movie),
        }
        self.persist(&movies)
    }

    /// Remove by internal id. No-op when absent.
    pub fn remove_by_id(&self, id: i64) -> Result<(), CacheError> {
        let movies = self.list();
        let before = movies.len();
        let kept: Vec<Movie> = movies.into_iter().filter(|m| m.id != id).collect();
        if kept.len() == before {
            return Ok(());
        }
        self.persist(&kept)
    }

    /// Remove by external identifier. No-op when absent.
    pub fn remove_by_imdb_id(&self, imdb_id: &str) -> Result<(), CacheError> {
        let movies = self.list();
        let before = movies.len();
        let kept: Vec<Movie> = movies.into_iter().filter(|m| m.imdb_id != imdb_id).collect();
        if kept.len() == before {
            return Ok(());
        }
        self.persist(&kept)
    }

    pub fn find_by_id(&self, id: i64) -> Option<Movie> {
        self.list().into_iter().find(|m| m.id == id)
    }

    pub fn find_by_imdb_id(&self, imdb_id: &str) -> Option<Movie> {
        self.list().into_iter().find(|m| m.imdb_id == imdb_id)
    }

    fn persist(&self, movies: &[Movie]) -> Result<(), CacheError> {
        let blob = serde_json::to_string(movies)?;
        self.kv.set(MOVIES_KEY, &blob)?;
        Ok(())
    }
}
