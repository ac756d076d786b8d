//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! coordinates between the model and view, and drives TMDB fetches.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `navigation`: View opening and page loading

mod input;
mod navigation;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::{AppModel, TmdbError};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>) -> Self {
        Self { model }
    }

    pub(crate) fn format_error(error: &TmdbError) -> String {
        match error {
            TmdbError::InvalidApiKey => {
                "TMDB rejected the API key. Check TMDB_API_KEY and restart.".to_string()
            }
            TmdbError::NotFound => "Movie not found.".to_string(),
            TmdbError::RateLimited => "Rate limited by TMDB. Please wait a moment.".to_string(),
            TmdbError::Network(_) => {
                "Could not reach TMDB. Check your network connection.".to_string()
            }
            TmdbError::Api(message) => format!("TMDB error: {}", message),
        }
    }
}
