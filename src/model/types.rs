//! Core type definitions for the application

use std::time::Instant;

use super::content::{Genre, Video};

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Search,
    Browse,
    Genres,
    MainContent,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Browse,
            ActiveSection::Browse => ActiveSection::Genres,
            ActiveSection::Genres => ActiveSection::MainContent,
            ActiveSection::MainContent => ActiveSection::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::MainContent,
            ActiveSection::Browse => ActiveSection::Search,
            ActiveSection::Genres => ActiveSection::Browse,
            ActiveSection::MainContent => ActiveSection::Genres,
        }
    }
}

/// An entry in the Browse sidebar section
#[derive(Clone, Debug)]
pub struct BrowseItem {
    pub name: String,
}

/// Which half of the Home view is selected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HomeSection {
    #[default]
    TopRated,
    Popular,
}

impl HomeSection {
    pub fn next(self) -> Self {
        match self {
            Self::TopRated => Self::Popular,
            Self::Popular => Self::TopRated,
        }
    }
}

/// Represents a selected item for action handling
#[derive(Clone, Debug)]
pub enum SelectedItem {
    Movie { id: u64 },
    Video { video: Video },
}

/// UI state for the application
#[derive(Clone)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub search_query: String,
    pub browse_items: Vec<BrowseItem>,
    pub browse_selected: usize,
    pub genres: Vec<Genre>,
    pub genre_selected: usize,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    pub show_help_popup: bool,
    pub trailer: Option<Video>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Browse,
            search_query: String::new(),
            browse_items: vec![
                BrowseItem { name: "Home".to_string() },
                BrowseItem { name: "Popular".to_string() },
                BrowseItem { name: "Top Rated".to_string() },
            ],
            browse_selected: 0,
            genres: vec![], // Loaded from the API at startup
            genre_selected: 0,
            error_message: None,
            error_timestamp: None,
            show_help_popup: false,
            trailer: None,
        }
    }
}
