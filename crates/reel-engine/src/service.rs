use reel_cache::{CacheStore, Kv};
use reel_model::{
    Movie, OmdbRecord, Page, Rating, SortDirection, local_id, now_rfc3339, total_pages,
};
use reel_remote::Remote;

use crate::error::CatalogError;
use crate::merge;
use crate::session::Session;

/// The reconciliation core: every read goes to the remote source first
/// and is augmented with locally cached records; when the remote call
/// fails outright the same operation is answered from the cache alone.
/// Writes made without a usable credential land in the cache under the
/// caller's identity (or the local-user sentinel).
pub struct CatalogService<R: Remote, K: Kv> {
    remote: R,
    cache: CacheStore<K>,
    session: Session,
}

impl<R: Remote, K: Kv> CatalogService<R, K> {
    pub fn new(remote: R, cache: CacheStore<K>, session: Session) -> Self {
        Self {
            remote,
            cache,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // ── Catalog reads ───────────────────────────────────────────

    /// Remote page augmented with cached movies not already on it, or a
    /// purely local page when the remote is unreachable.
    pub fn all_movies(
        &self,
        page: usize,
        size: usize,
        sort_by: &str,
        direction: SortDirection,
    ) -> Result<Page<Movie>, CatalogError> {
        match self.remote.all_movies(page, size, sort_by, direction) {
            Ok(mut remote_page) => {
                merge::append_unseen(&mut remote_page, self.cache.list());
                Ok(remote_page)
            }
            Err(_) => Ok(Page::from_slice(self.cache.list(), page, size)),
        }
    }

    /// Title search, same two-path structure as [`Self::all_movies`].
    /// The local contribution is a case-insensitive substring match.
    pub fn search_movies(
        &self,
        term: &str,
        page: usize,
        size: usize,
    ) -> Result<Page<Movie>, CatalogError> {
        match self.remote.search_movies(term, page, size) {
            Ok(mut remote_page) => {
                let matching = self
                    .cache
                    .list()
                    .into_iter()
                    .filter(|m| merge::title_matches(m, term))
                    .collect();
                merge::append_unseen(&mut remote_page, matching);
                Ok(remote_page)
            }
            Err(_) => {
                let matching: Vec<Movie> = self
                    .cache
                    .list()
                    .into_iter()
                    .filter(|m| merge::title_matches(m, term))
                    .collect();
                Ok(Page::from_slice(matching, page, size))
            }
        }
    }

    /// Movies the caller has rated. Without a credential this is purely
    /// local; with one, the remote page is augmented with locally rated
    /// movies and the derived counts are recomputed.
    pub fn user_movies(&self, page: usize, size: usize) -> Result<Page<Movie>, CatalogError> {
        let Some(token) = self.session.token() else {
            return Ok(self.local_rated_page(page, size));
        };

        match self.remote.user_movies(page, size, token) {
            Ok(mut remote_page) => {
                let appended = merge::append_unseen(&mut remote_page, self.locally_rated());
                if appended > 0 {
                    remote_page.total_pages =
                        total_pages(remote_page.total_elements, remote_page.size);
                    remote_page.number_of_elements += appended;
                }
                Ok(remote_page)
            }
            Err(_) => Ok(self.local_rated_page(page, size)),
        }
    }

    /// Remote lookup with cache fallback; `NotFound` only when neither
    /// source has the record.
    pub fn movie_by_id(&self, id: i64) -> Result<Movie, CatalogError> {
        match self.remote.movie_by_id(id) {
            Ok(movie) => Ok(movie),
            Err(_) => self
                .cache
                .find_by_id(id)
                .ok_or_else(|| CatalogError::NotFound(format!("movie {id}"))),
        }
    }

    // ── Ratings ─────────────────────────────────────────────────

    /// Record the caller's rating for a movie. Rejected before any I/O
    /// when the value is off the star scale. A remote failure degrades
    /// to the local path without surfacing.
    pub fn rate(
        &self,
        movie_id: i64,
        value: f64,
        comment: Option<&str>,
    ) -> Result<Rating, CatalogError> {
        if !(0.5..=5.0).contains(&value) {
            return Err(CatalogError::Validation(format!(
                "rating value {value} is outside 0.5..=5"
            )));
        }

        match self.session.token() {
            Some(token) => match self.remote.rate_movie(movie_id, value, comment, token) {
                Ok(rating) => Ok(rating),
                Err(_) => self.rate_locally(movie_id, value, comment),
            },
            None => self.rate_locally(movie_id, value, comment),
        }
    }

    /// The caller's own rating for a movie: remote when credentialed,
    /// cache otherwise. A rating recorded on one path is not visible
    /// through the other.
    pub fn user_rating(&self, movie_id: i64) -> Result<Rating, CatalogError> {
        match self.session.token() {
            Some(token) => match self.remote.user_rating(movie_id, token) {
                Ok(rating) => Ok(rating),
                Err(e) if e.status_code() == Some(http::StatusCode::NOT_FOUND) => Err(
                    CatalogError::NotFound(format!("rating for movie {movie_id}")),
                ),
                Err(e) => Err(CatalogError::Remote(e)),
            },
            None => self.user_rating_locally(movie_id),
        }
    }

    // ── Admin / import ──────────────────────────────────────────

    /// External metadata search, with the first title match promoted to
    /// the front of the result list.
    pub fn metadata_search(
        &self,
        term: &str,
        page: usize,
    ) -> Result<Vec<OmdbRecord>, CatalogError> {
        let mut results = self.remote.omdb_search(term, page)?;
        merge::promote_title_match(&mut results, term);
        Ok(results)
    }

    /// Import a movie from the metadata source. The synthesized record
    /// is cached immediately; a successful backend write supersedes it
    /// (matched by external identifier), a failed one leaves the local
    /// record standing.
    pub fn import_movie(&self, imdb_id: &str) -> Result<Movie, CatalogError> {
        let token = self
            .session
            .admin_token()
            .ok_or_else(|| CatalogError::Validation("admin credential required".into()))?;

        let details = self.remote.omdb_details(imdb_id)?;
        if details.response.as_deref() == Some("False") {
            let reason = details.error.unwrap_or_else(|| "no such title".into());
            return Err(CatalogError::NotFound(format!("imdb {imdb_id}: {reason}")));
        }

        let local = details.into_movie(local_id(), self.session.effective_user());
        self.cache.upsert(local.clone())?;

        match self.remote.add_movie(imdb_id, token) {
            Ok(authoritative) => {
                self.cache.upsert(authoritative.clone())?;
                Ok(authoritative)
            }
            Err(_) => Ok(local),
        }
    }

    /// Delete a movie. The cache entry goes away whether or not the
    /// backend delete succeeds.
    pub fn remove_movie(&self, movie_id: i64) -> Result<(), CatalogError> {
        let token = self
            .session
            .admin_token()
            .ok_or_else(|| CatalogError::Validation("admin credential required".into()))?;

        let cached_imdb_id = self.cache.find_by_id(movie_id).map(|m| m.imdb_id);
        let _ = self.remote.remove_movie(movie_id, token);

        self.cache.remove_by_id(movie_id)?;
        if let Some(imdb_id) = cached_imdb_id {
            self.cache.remove_by_imdb_id(&imdb_id)?;
        }
        Ok(())
    }

    // ── Local paths ─────────────────────────────────────────────

    fn locally_rated(&self) -> Vec<Movie> {
        let user_id = self.session.effective_user().id;
        self.cache
            .list()
            .into_iter()
            .filter(|m| m.rating_by(user_id).is_some())
            .collect()
    }

    fn local_rated_page(&self, page: usize, size: usize) -> Page<Movie> {
        Page::from_slice(self.locally_rated(), page, size)
    }

    fn rate_locally(
        &self,
        movie_id: i64,
        value: f64,
        comment: Option<&str>,
    ) -> Result<Rating, CatalogError> {
        let mut movie = self
            .cache
            .find_by_id(movie_id)
            .ok_or_else(|| CatalogError::NotFound(format!("movie {movie_id}")))?;

        let rating = Rating {
            id: local_id(),
            value,
            comment: comment.map(str::to_string),
            user: self.session.effective_user(),
            created_at: now_rfc3339(),
        };
        movie.put_rating(rating.clone());
        self.cache.upsert(movie)?;
        Ok(rating)
    }

    fn user_rating_locally(&self, movie_id: i64) -> Result<Rating, CatalogError> {
        let user_id = self.session.effective_user().id;
        self.cache
            .find_by_id(movie_id)
            .and_then(|m| m.rating_by(user_id).cloned())
            .ok_or_else(|| CatalogError::NotFound(format!("rating for movie {movie_id}")))
    }
}
