use reel_model::{Movie, OmdbRecord, Page, Rating, SortDirection};

use crate::error::RemoteError;

/// The remote movie source: the backend's REST surface plus the OMDB
/// metadata proxy. The engine is generic over this seam so tests can
/// script responses and failures.
///
/// Operations that need a credential take it per call; `None` means the
/// caller has no (valid) session.
pub trait Remote {
    fn all_movies(
        &self,
        page: usize,
        size: usize,
        sort_by: &str,
        direction: SortDirection,
    ) -> Result<Page<Movie>, RemoteError>;

    fn search_movies(&self, title: &str, page: usize, size: usize)
    -> Result<Page<Movie>, RemoteError>;

    fn movie_by_id(&self, id: i64) -> Result<Movie, RemoteError>;

    fn user_movies(&self, page: usize, size: usize, token: &str)
    -> Result<Page<Movie>, RemoteError>;

    fn rate_movie(
        &self,
        movie_id: i64,
        value: f64,
        comment: Option<&str>,
        token: &str,
    ) -> Result<Rating, RemoteError>;

    fn user_rating(&self, movie_id: i64, token: &str) -> Result<Rating, RemoteError>;

    fn add_movie(&self, imdb_id: &str, token: &str) -> Result<Movie, RemoteError>;

    fn remove_movie(&self, movie_id: i64, token: &str) -> Result<(), RemoteError>;

    fn omdb_search(&self, title: &str, page: usize) -> Result<Vec<OmdbRecord>, RemoteError>;

    fn omdb_details(&self, imdb_id: &str) -> Result<OmdbRecord, RemoteError>;
}

impl<R: Remote + ?Sized> Remote for &R {
    fn all_movies(
        &self,
        page: usize,
        size: usize,
        sort_by: &str,
        direction: SortDirection,
    ) -> Result<Page<Movie>, RemoteError> {
        (**self).all_movies(page, size, sort_by, direction)
    }

    fn search_movies(
        &self,
        title: &str,
        page: usize,
        size: usize,
    ) -> Result<Page<Movie>, RemoteError> {
        (**self).search_movies(title, page, size)
    }

    fn movie_by_id(&self, id: i64) -> Result<Movie, RemoteError> {
        (**self).movie_by_id(id)
    }

    fn user_movies(
        &self,
        page: usize,
        size: usize,
        token: &str,
    ) -> Result<Page<Movie>, RemoteError> {
        (**self).user_movies(page, size, token)
    }

    fn rate_movie(
        &self,
        movie_id: i64,
        value: f64,
        comment: Option<&str>,
        token: &str,
    ) -> Result<Rating, RemoteError> {
        (**self).rate_movie(movie_id, value, comment, token)
    }

    fn user_rating(&self, movie_id: i64, token: &str) -> Result<Rating, RemoteError> {
        (**self).user_rating(movie_id, token)
    }

    fn add_movie(&self, imdb_id: &str, token: &str) -> Result<Movie, RemoteError> {
        (**self).add_movie(imdb_id, token)
    }

    fn remove_movie(&self, movie_id: i64, token: &str) -> Result<(), RemoteError> {
        (**self).remove_movie(movie_id, token)
    }

    fn omdb_search(&self, title: &str, page: usize) -> Result<Vec<OmdbRecord>, RemoteError> {
        (**self).omdb_search(title, page)
    }

    fn omdb_details(&self, imdb_id: &str) -> Result<OmdbRecord, RemoteError> {
        (**self).omdb_details(imdb_id)
    }
}
