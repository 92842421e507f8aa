use reel_model::{Movie, OmdbRecord, Page, Rating, SortDirection};
use serde::de::DeserializeOwned;

use crate::config::RemoteConfig;
use crate::error::RemoteError;
use crate::remote::Remote;

/// REST client for the catalog backend.
pub struct HttpRemote {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpRemote {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            base_url: config.base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn read_json<T: DeserializeOwned>(
        url: &str,
        response: Result<http::Response<ureq::Body>, ureq::Error>,
    ) -> Result<T, RemoteError> {
        let mut response = response.map_err(|e| wire_error(url, e))?;
        response
            .body_mut()
            .read_json::<T>()
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

fn wire_error(url: &str, e: ureq::Error) -> RemoteError {
    match e {
        ureq::Error::StatusCode(code) => RemoteError::Status(code, url.to_string()),
        other => RemoteError::Transport(other.to_string()),
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

impl Remote for HttpRemote {
    fn all_movies(
        &self,
        page: usize,
        size: usize,
        sort_by: &str,
        direction: SortDirection,
    ) -> Result<Page<Movie>, RemoteError> {
        let url = self.url("/movies");
        let response = self
            .agent
            .get(&url)
            .query("page", page.to_string())
            .query("size", size.to_string())
            .query("sortBy", sort_by)
            .query("direction", direction.as_str())
            .call();
        Self::read_json(&url, response)
    }

    fn search_movies(
        &self,
        title: &str,
        page: usize,
        size: usize,
    ) -> Result<Page<Movie>, RemoteError> {
        let url = self.url("/movies/search");
        let response = self
            .agent
            .get(&url)
            .query("title", title)
            .query("page", page.to_string())
            .query("size", size.to_string())
            .call();
        Self::read_json(&url, response)
    }

    fn movie_by_id(&self, id: i64) -> Result<Movie, RemoteError> {
        let url = self.url(&format!("/movies/{id}"));
        let response = self.agent.get(&url).call();
        Self::read_json(&url, response)
    }

    fn user_movies(
        &self,
        page: usize,
        size: usize,
        token: &str,
    ) -> Result<Page<Movie>, RemoteError> {
        let url = self.url("/user/movies");
        let response = self
            .agent
            .get(&url)
            .header("authorization", bearer(token))
            .query("page", page.to_string())
            .query("size", size.to_string())
            .call();
        Self::read_json(&url, response)
    }

    fn rate_movie(
        &self,
        movie_id: i64,
        value: f64,
        comment: Option<&str>,
        token: &str,
    ) -> Result<Rating, RemoteError> {
        let url = self.url(&format!("/movies/{movie_id}/rate"));
        let body = serde_json::json!({ "rating": value, "comment": comment });
        let response = self
            .agent
            .post(&url)
            .header("authorization", bearer(token))
            .send_json(&body);
        Self::read_json(&url, response)
    }

    fn user_rating(&self, movie_id: i64, token: &str) -> Result<Rating, RemoteError> {
        let url = self.url(&format!("/user/movies/{movie_id}/rating"));
        let response = self
            .agent
            .get(&url)
            .header("authorization", bearer(token))
            .call();
        Self::read_json(&url, response)
    }

    fn add_movie(&self, imdb_id: &str, token: &str) -> Result<Movie, RemoteError> {
        let url = self.url("/admin/movies");
        let body = serde_json::json!({ "imdbId": imdb_id });
        let response = self
            .agent
            .post(&url)
            .header("authorization", bearer(token))
            .send_json(&body);
        Self::read_json(&url, response)
    }

    fn remove_movie(&self, movie_id: i64, token: &str) -> Result<(), RemoteError> {
        let url = self.url(&format!("/admin/movies/{movie_id}"));
        self.agent
            .delete(&url)
            .header("authorization", bearer(token))
            .call()
            .map_err(|e| wire_error(&url, e))?;
        Ok(())
    }

    fn omdb_search(&self, title: &str, page: usize) -> Result<Vec<OmdbRecord>, RemoteError> {
        let url = self.url("/public/omdb/search");
        let response = self
            .agent
            .get(&url)
            .query("title", title)
            .query("page", page.to_string())
            .call();
        Self::read_json(&url, response)
    }

    fn omdb_details(&self, imdb_id: &str) -> Result<OmdbRecord, RemoteError> {
        let url = self.url(&format!("/public/omdb/details/{imdb_id}"));
        let response = self.agent.get(&url).call();
        Self::read_json(&url, response)
    }
}
