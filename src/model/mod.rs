//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (enums, UI state, etc.)
//! - `content`: Content view data (movie listings, details, videos)
//! - `listing`: Paged listing accumulation and epoch-scoped reset
//! - `tmdb_client`: TMDB API client wrapper
//! - `app_model`: Main application model with state management methods

mod types;
mod content;
mod listing;
mod tmdb_client;
mod app_model;

// Re-export all public types for convenient access
pub use types::{
    ActiveSection, BrowseItem, HomeSection, SelectedItem, UiState,
};

pub use content::{
    ContentState, ContentView, Genre, MovieDetail, MovieDetails, MoviePage,
    MovieSummary, Video, pick_trailer,
};

pub use listing::{ListingSource, LoadTicket, PagedListing};

pub use tmdb_client::{ImageSize, TmdbClient, TmdbError, image_url};

pub use app_model::AppModel;
