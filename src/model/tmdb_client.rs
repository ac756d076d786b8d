//! TMDB API client wrapper with all API methods.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use reqwest::StatusCode;

use crate::config::Config;
use super::content::{Genre, MoviePage, MovieDetails, Video};
use super::listing::ListingSource;

const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";
const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=300";

#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("API error: {0}")]
    Api(String),

    #[error("not found")]
    NotFound,

    #[error("rate limited")]
    RateLimited,

    #[error("invalid API key")]
    InvalidApiKey,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

fn map_error_status(status: StatusCode, message: Option<String>) -> TmdbError {
    match status.as_u16() {
        401 => TmdbError::InvalidApiKey,
        404 => TmdbError::NotFound,
        429 => TmdbError::RateLimited,
        _ => TmdbError::Api(
            message.unwrap_or_else(|| format!("TMDB request failed with status {status}")),
        ),
    }
}

/// Poster/backdrop size tokens understood by the image CDN.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSize {
    W500,
    Original,
}

impl ImageSize {
    fn as_segment(self) -> &'static str {
        match self {
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
        }
    }
}

/// Build an image CDN URL for an optional artwork path. Pure; movies without
/// artwork get a fixed placeholder locator instead of a CDN URL.
pub fn image_url(path: Option<&str>, size: ImageSize) -> String {
    match path {
        Some(path) if !path.is_empty() => {
            format!("{}/{}{}", TMDB_IMAGE_BASE, size.as_segment(), path)
        }
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

#[derive(Serialize)]
struct ListQuery<'a> {
    api_key: &'a str,
    language: &'a str,
    page: u32,
}

#[derive(Serialize)]
struct SearchQuery<'a> {
    api_key: &'a str,
    language: &'a str,
    query: &'a str,
    page: u32,
    include_adult: bool,
}

#[derive(Serialize)]
struct DiscoverQuery<'a> {
    api_key: &'a str,
    language: &'a str,
    sort_by: &'a str,
    include_adult: bool,
    include_video: bool,
    page: u32,
    with_genres: u64,
}

#[derive(Serialize)]
struct DetailQuery<'a> {
    api_key: &'a str,
    language: &'a str,
}

#[derive(Deserialize)]
struct VideosResponse {
    #[serde(default)]
    results: Vec<Video>,
}

#[derive(Deserialize)]
struct GenresResponse {
    #[serde(default)]
    genres: Vec<Genre>,
}

/// TMDB API client. One outbound GET per call; no retries, no caching.
/// Cheap to clone, shares the underlying connection pool.
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    api_key: String,
    language: String,
}

impl TmdbClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        }
    }

    async fn get_json<Q, T>(&self, url: &str, query: &Q) -> Result<T, TmdbError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(TmdbError::from);
        }

        #[derive(Deserialize)]
        struct TmdbErrorBody {
            #[serde(default)]
            status_message: Option<String>,
        }

        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<TmdbErrorBody>(&body).ok())
            .and_then(|body| body.status_message);

        let error = map_error_status(status, message);
        tracing::warn!(url, %status, error = %error, "TMDB request failed");
        Err(error)
    }

    /// Fetch one page of any listing source.
    pub async fn fetch_page(
        &self,
        source: &ListingSource,
        page: u32,
    ) -> Result<MoviePage, TmdbError> {
        match source {
            ListingSource::Popular => self.popular_movies(page).await,
            ListingSource::TopRated => self.top_rated_movies(page).await,
            ListingSource::Search { query } => self.search_movies(query, page).await,
            ListingSource::Genre { id } => self.movies_by_genre(*id, page).await,
        }
    }

    pub async fn popular_movies(&self, page: u32) -> Result<MoviePage, TmdbError> {
        let query = ListQuery {
            api_key: &self.api_key,
            language: &self.language,
            page: page.max(1),
        };
        self.get_json(&format!("{TMDB_API_BASE}/movie/popular"), &query)
            .await
    }

    pub async fn top_rated_movies(&self, page: u32) -> Result<MoviePage, TmdbError> {
        let query = ListQuery {
            api_key: &self.api_key,
            language: &self.language,
            page: page.max(1),
        };
        self.get_json(&format!("{TMDB_API_BASE}/movie/top_rated"), &query)
            .await
    }

    pub async fn search_movies(&self, text: &str, page: u32) -> Result<MoviePage, TmdbError> {
        let query = SearchQuery {
            api_key: &self.api_key,
            language: &self.language,
            query: text,
            page: page.max(1),
            include_adult: false,
        };
        self.get_json(&format!("{TMDB_API_BASE}/search/movie"), &query)
            .await
    }

    /// Discover movies for a genre, most popular first, adult content excluded.
    pub async fn movies_by_genre(&self, genre_id: u64, page: u32) -> Result<MoviePage, TmdbError> {
        let query = DiscoverQuery {
            api_key: &self.api_key,
            language: &self.language,
            sort_by: "popularity.desc",
            include_adult: false,
            include_video: false,
            page: page.max(1),
            with_genres: genre_id,
        };
        self.get_json(&format!("{TMDB_API_BASE}/discover/movie"), &query)
            .await
    }

    pub async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails, TmdbError> {
        let query = DetailQuery {
            api_key: &self.api_key,
            language: &self.language,
        };
        self.get_json(&format!("{TMDB_API_BASE}/movie/{movie_id}"), &query)
            .await
    }

    /// Trailers, teasers, clips for a movie.
    pub async fn movie_videos(&self, movie_id: u64) -> Result<Vec<Video>, TmdbError> {
        let query = DetailQuery {
            api_key: &self.api_key,
            language: &self.language,
        };
        let response: VideosResponse = self
            .get_json(&format!("{TMDB_API_BASE}/movie/{movie_id}/videos"), &query)
            .await?;
        Ok(response.results)
    }

    /// The full movie genre index.
    pub async fn movie_genres(&self) -> Result<Vec<Genre>, TmdbError> {
        let query = DetailQuery {
            api_key: &self.api_key,
            language: &self.language,
        };
        let response: GenresResponse = self
            .get_json(&format!("{TMDB_API_BASE}/genre/movie/list"), &query)
            .await?;
        Ok(response.genres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_mapping() {
        assert!(matches!(
            map_error_status(StatusCode::UNAUTHORIZED, None),
            TmdbError::InvalidApiKey
        ));
        assert!(matches!(
            map_error_status(StatusCode::NOT_FOUND, None),
            TmdbError::NotFound
        ));
        assert!(matches!(
            map_error_status(StatusCode::TOO_MANY_REQUESTS, None),
            TmdbError::RateLimited
        ));

        let err = map_error_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some("Internal error".into()),
        );
        match err {
            TmdbError::Api(message) => assert_eq!(message, "Internal error"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_status_without_body_reports_the_status() {
        match map_error_status(StatusCode::BAD_GATEWAY, None) {
            TmdbError::Api(message) => assert!(message.contains("502")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn image_url_templates_cdn_path() {
        assert_eq!(
            image_url(Some("/abc.jpg"), ImageSize::W500),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(
            image_url(Some("/abc.jpg"), ImageSize::Original),
            "https://image.tmdb.org/t/p/original/abc.jpg"
        );
    }

    #[test]
    fn image_url_without_path_is_the_placeholder() {
        assert_eq!(image_url(None, ImageSize::W500), PLACEHOLDER_IMAGE);
        assert_eq!(image_url(Some(""), ImageSize::Original), PLACEHOLDER_IMAGE);
    }
}
