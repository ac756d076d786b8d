//! Content view state and the TMDB data structures it displays.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer};

use super::listing::PagedListing;
use super::types::HomeSection;

/// TMDB sends dates as "YYYY-MM-DD" but uses the empty string for unknown.
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()))
}

/// A movie as it appears in listing results.
#[derive(Clone, Debug, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub vote_average: f64,
}

impl MovieSummary {
    pub fn year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year())
    }
}

/// One page of a listing endpoint, exactly as the API shapes it.
#[derive(Clone, Debug, Deserialize)]
pub struct MoviePage {
    pub results: Vec<MovieSummary>,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Full record from the movie detail endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub runtime: Option<u32>,
}

impl MovieDetails {
    pub fn year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Video {
    pub id: String,
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub official: bool,
}

/// Preferred trailer: official YouTube trailer, then any YouTube trailer,
/// then any YouTube video at all.
pub fn pick_trailer(videos: &[Video]) -> Option<&Video> {
    videos
        .iter()
        .find(|v| v.kind == "Trailer" && v.official && v.site == "YouTube")
        .or_else(|| videos.iter().find(|v| v.kind == "Trailer" && v.site == "YouTube"))
        .or_else(|| videos.iter().find(|v| v.site == "YouTube"))
}

/// Detail view payload: the movie record plus its video list.
#[derive(Clone, Debug)]
pub struct MovieDetail {
    pub movie: MovieDetails,
    pub videos: Vec<Video>,
}

/// Represents the current view in the main content area
#[derive(Clone, Debug, Default)]
pub enum ContentView {
    #[default]
    Empty,
    /// Hero + top rated rail + paged popular section.
    Home {
        top_rated: Vec<MovieSummary>,
        popular: PagedListing,
        section: HomeSection,
        top_index: usize,
        popular_index: usize,
    },
    /// Full paged listing for one source (popular or top rated).
    Listing {
        title: String,
        listing: PagedListing,
        selected_index: usize,
    },
    SearchResults {
        listing: PagedListing,
        selected_index: usize,
    },
    GenreMovies {
        genre: Genre,
        listing: PagedListing,
        selected_index: usize,
    },
    /// `detail` is `None` once loading finished without a movie: the remote
    /// id does not exist or the fetch failed. Rendered as "not found",
    /// which is deliberately distinct from an empty listing.
    MovieDetail {
        movie_id: u64,
        detail: Option<MovieDetail>,
        video_index: usize,
    },
}

impl ContentView {
    /// The paged listing the view is currently scrolling, if any.
    pub fn active_listing(&self) -> Option<&PagedListing> {
        match self {
            ContentView::Home {
                popular, section, ..
            } => (*section == HomeSection::Popular).then_some(popular),
            ContentView::Listing { listing, .. }
            | ContentView::SearchResults { listing, .. }
            | ContentView::GenreMovies { listing, .. } => Some(listing),
            _ => None,
        }
    }

    pub fn active_listing_mut(&mut self) -> Option<&mut PagedListing> {
        match self {
            ContentView::Home {
                popular, section, ..
            } => (*section == HomeSection::Popular).then_some(popular),
            ContentView::Listing { listing, .. }
            | ContentView::SearchResults { listing, .. }
            | ContentView::GenreMovies { listing, .. } => Some(listing),
            _ => None,
        }
    }
}

/// State for the main content area
#[derive(Clone, Debug, Default)]
pub struct ContentState {
    pub view: ContentView,
    pub navigation_stack: Vec<ContentView>,
    pub is_loading: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(kind: &str, site: &str, official: bool, key: &str) -> Video {
        Video {
            id: key.to_string(),
            key: key.to_string(),
            name: format!("{kind} {key}"),
            site: site.to_string(),
            kind: kind.to_string(),
            official,
        }
    }

    #[test]
    fn trailer_pick_prefers_official_youtube_trailers() {
        let videos = vec![
            video("Clip", "YouTube", true, "clip"),
            video("Trailer", "Vimeo", true, "vimeo-trailer"),
            video("Trailer", "YouTube", false, "fan-trailer"),
            video("Trailer", "YouTube", true, "official-trailer"),
        ];
        assert_eq!(pick_trailer(&videos).unwrap().key, "official-trailer");
    }

    #[test]
    fn trailer_pick_falls_back_to_any_youtube_video() {
        let videos = vec![
            video("Trailer", "Vimeo", true, "vimeo-trailer"),
            video("Featurette", "YouTube", false, "featurette"),
        ];
        assert_eq!(pick_trailer(&videos).unwrap().key, "featurette");
        assert!(pick_trailer(&[]).is_none());
    }

    #[test]
    fn movie_page_deserializes_from_api_shape() {
        let payload = r#"{
            "page": 1,
            "results": [{
                "id": 603,
                "title": "The Matrix",
                "poster_path": "/p.jpg",
                "backdrop_path": null,
                "overview": "A hacker learns the truth.",
                "release_date": "1999-03-30",
                "vote_average": 8.2
            }, {
                "id": 604,
                "title": "Untitled",
                "poster_path": null,
                "backdrop_path": null,
                "overview": "",
                "release_date": "",
                "vote_average": 0.0
            }],
            "total_pages": 10,
            "total_results": 200
        }"#;
        let page: MoviePage = serde_json::from_str(payload).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].year(), Some(1999));
        assert_eq!(page.results[1].release_date, None);
        assert_eq!(page.total_pages, 10);
    }

    #[test]
    fn movie_details_tolerates_missing_optional_fields() {
        let payload = r#"{
            "id": 550,
            "title": "Fight Club",
            "poster_path": "/f.jpg",
            "backdrop_path": "/b.jpg",
            "overview": "Mischief. Mayhem. Soap.",
            "release_date": "1999-10-15",
            "vote_average": 8.4,
            "runtime": null
        }"#;
        let details: MovieDetails = serde_json::from_str(payload).unwrap();
        assert!(details.genres.is_empty());
        assert_eq!(details.runtime, None);
        assert_eq!(details.year(), Some(1999));
    }

    #[test]
    fn videos_payload_deserializes_with_type_field() {
        let payload = r#"{
            "id": "v1",
            "key": "dQw4w9WgXcQ",
            "name": "Official Trailer",
            "site": "YouTube",
            "type": "Trailer",
            "official": true
        }"#;
        let video: Video = serde_json::from_str(payload).unwrap();
        assert_eq!(video.kind, "Trailer");
        assert!(video.official);
    }
}
