//! Main application model with state management

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use super::content::{
    ContentState, ContentView, Genre, MovieDetail, MoviePage, MovieSummary,
};
use super::listing::{ListingSource, LoadTicket, PagedListing};
use super::tmdb_client::TmdbClient;
use super::types::{ActiveSection, HomeSection, SelectedItem, UiState};

/// Main application model containing all state
pub struct AppModel {
    pub tmdb: Option<TmdbClient>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub content_state: Arc<Mutex<ContentState>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            tmdb: None,
            ui_state: Arc::new(Mutex::new(UiState::default())),
            content_state: Arc::new(Mutex::new(ContentState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub fn set_tmdb_client(&mut self, client: TmdbClient) {
        self.tmdb = Some(client);
    }

    pub fn get_tmdb_client(&self) -> Option<TmdbClient> {
        self.tmdb.clone()
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // UI state: sections, sidebar, search input
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    pub async fn move_selection_up(&self) {
        let mut state = self.ui_state.lock().await;
        match state.active_section {
            ActiveSection::Browse => {
                if state.browse_selected > 0 {
                    state.browse_selected -= 1;
                }
            }
            ActiveSection::Genres => {
                if state.genre_selected > 0 {
                    state.genre_selected -= 1;
                }
            }
            _ => {}
        }
    }

    pub async fn move_selection_down(&self) {
        let mut state = self.ui_state.lock().await;
        match state.active_section {
            ActiveSection::Browse => {
                if state.browse_selected < state.browse_items.len().saturating_sub(1) {
                    state.browse_selected += 1;
                }
            }
            ActiveSection::Genres => {
                if state.genre_selected < state.genres.len().saturating_sub(1) {
                    state.genre_selected += 1;
                }
            }
            _ => {}
        }
    }

    pub async fn update_search_query(&self, query: String) {
        let mut state = self.ui_state.lock().await;
        state.search_query = query;
    }

    pub async fn append_to_search(&self, c: char) {
        let mut state = self.ui_state.lock().await;
        state.search_query.push(c);
    }

    pub async fn backspace_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_query.pop();
    }

    pub async fn set_genres(&self, genres: Vec<Genre>) {
        let mut state = self.ui_state.lock().await;
        state.genres = genres;
        state.genre_selected = 0;
    }

    pub async fn get_selected_genre(&self) -> Option<Genre> {
        let state = self.ui_state.lock().await;
        state.genres.get(state.genre_selected).cloned()
    }

    pub async fn get_selected_browse_index(&self) -> usize {
        self.ui_state.lock().await.browse_selected
    }

    // ========================================================================
    // Errors & overlays
    // ========================================================================

    pub async fn set_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.error_message = Some(message);
        state.error_timestamp = Some(Instant::now());
    }

    pub async fn clear_error(&self) {
        let mut state = self.ui_state.lock().await;
        state.error_message = None;
        state.error_timestamp = None;
    }

    pub async fn has_error(&self) -> bool {
        self.ui_state.lock().await.error_message.is_some()
    }

    pub async fn auto_clear_old_errors(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.error_timestamp {
            if timestamp.elapsed().as_secs() > 5 {
                state.error_message = None;
                state.error_timestamp = None;
            }
        }
    }

    pub async fn show_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    pub async fn show_trailer(&self, video: super::content::Video) {
        self.ui_state.lock().await.trailer = Some(video);
    }

    pub async fn hide_trailer(&self) {
        self.ui_state.lock().await.trailer = None;
    }

    pub async fn is_trailer_open(&self) -> bool {
        self.ui_state.lock().await.trailer.is_some()
    }

    // ========================================================================
    // Content views
    // ========================================================================

    pub async fn get_content_state(&self) -> ContentState {
        self.content_state.lock().await.clone()
    }

    pub async fn set_content_loading(&self, loading: bool) {
        let mut state = self.content_state.lock().await;
        state.is_loading = loading;
    }

    /// Open the Home view with a fresh popular listing; returns the ticket
    /// for the page-1 fetch the caller must now dispatch.
    pub async fn show_home(&self) -> LoadTicket {
        let mut state = self.content_state.lock().await;
        let (popular, ticket) = PagedListing::begin(ListingSource::Popular);

        state.navigation_stack.clear();
        state.view = ContentView::Home {
            top_rated: Vec::new(),
            popular,
            section: HomeSection::default(),
            top_index: 0,
            popular_index: 0,
        };
        state.is_loading = true;
        ticket
    }

    /// Fill the Home view's top rated rail. Dropped if Home is gone.
    pub async fn set_top_rated(&self, movies: Vec<MovieSummary>) {
        let mut state = self.content_state.lock().await;
        if let ContentView::Home { top_rated, .. } = &mut state.view {
            *top_rated = movies;
        }
    }

    /// Open a plain paged listing view (Popular / Top Rated browse entries).
    pub async fn show_listing(&self, title: String, source: ListingSource) -> LoadTicket {
        let mut state = self.content_state.lock().await;
        let (listing, ticket) = PagedListing::begin(source);

        state.navigation_stack.clear();
        state.view = ContentView::Listing {
            title,
            listing,
            selected_index: 0,
        };
        state.is_loading = true;
        ticket
    }

    /// Open the search results view for a new query. The listing starts
    /// empty under a fresh epoch before the fetch is dispatched, so results
    /// from any previous query can never leak in.
    pub async fn show_search(&self, query: String) -> LoadTicket {
        let mut state = self.content_state.lock().await;
        let (listing, ticket) = PagedListing::begin(ListingSource::Search { query });

        state.navigation_stack.clear();
        state.view = ContentView::SearchResults {
            listing,
            selected_index: 0,
        };
        state.is_loading = true;
        ticket
    }

    /// Open the discover view for a genre. Same reset contract as search.
    pub async fn show_genre_movies(&self, genre: Genre) -> LoadTicket {
        let mut state = self.content_state.lock().await;
        let (listing, ticket) = PagedListing::begin(ListingSource::Genre { id: genre.id });

        state.navigation_stack.clear();
        state.view = ContentView::GenreMovies {
            genre,
            listing,
            selected_index: 0,
        };
        state.is_loading = true;
        ticket
    }

    /// Push the current view and show the detail placeholder while it loads.
    pub async fn show_movie_loading(&self, movie_id: u64) {
        let mut state = self.content_state.lock().await;
        if !matches!(state.view, ContentView::Empty) {
            let previous_view = state.view.clone();
            state.navigation_stack.push(previous_view);
        }
        state.view = ContentView::MovieDetail {
            movie_id,
            detail: None,
            video_index: 0,
        };
        state.is_loading = true;
    }

    /// Resolve a detail fetch. `None` renders as "movie not found". The
    /// update is dropped when the user already navigated elsewhere.
    pub async fn set_movie_detail(&self, movie_id: u64, detail: Option<MovieDetail>) {
        let mut state = self.content_state.lock().await;
        if let ContentView::MovieDetail {
            movie_id: current_id,
            detail: slot,
            ..
        } = &mut state.view
        {
            if *current_id == movie_id {
                *slot = detail;
                state.is_loading = false;
            }
        }
    }

    /// Route a fetched page to whichever listing is still waiting for it.
    pub async fn apply_listing_page(&self, ticket: LoadTicket, page: MoviePage) -> bool {
        let mut state = self.content_state.lock().await;
        let applied = state
            .view
            .active_listing_mut()
            .map(|listing| listing.apply_page(ticket, page))
            .unwrap_or(false);
        if applied {
            state.is_loading = false;
        }
        applied
    }

    pub async fn abort_listing_load(&self, ticket: LoadTicket) {
        let mut state = self.content_state.lock().await;
        let aborted = state
            .view
            .active_listing_mut()
            .map(|listing| listing.abort_load(ticket))
            .unwrap_or(false);
        if aborted {
            state.is_loading = false;
        }
    }

    /// Claim the next page of the active listing for fetching.
    ///
    /// Returns `None` when there is nothing to load or a fetch is already in
    /// flight, so double triggers fall through harmlessly.
    pub async fn claim_next_page(&self) -> Option<(LoadTicket, ListingSource)> {
        let mut state = self.content_state.lock().await;
        let listing = state.view.active_listing_mut()?;
        if listing.loading || !listing.can_load_more() {
            return None;
        }
        listing.advance();
        let ticket = listing.begin_load()?;
        Some((ticket, listing.source.clone()))
    }

    pub async fn navigate_back(&self) -> bool {
        let mut state = self.content_state.lock().await;
        if let Some(previous_view) = state.navigation_stack.pop() {
            state.view = previous_view;
            true
        } else {
            state.view = ContentView::Empty;
            false
        }
    }

    /// Left/Right inside the Home view toggles between its sections.
    pub async fn navigate_home_section(&self) {
        let mut state = self.content_state.lock().await;
        if let ContentView::Home { section, .. } = &mut state.view {
            *section = section.next();
        }
    }

    pub async fn content_move_up(&self) {
        let mut state = self.content_state.lock().await;
        match &mut state.view {
            ContentView::Home {
                section,
                top_index,
                popular_index,
                ..
            } => {
                let idx = match section {
                    HomeSection::TopRated => top_index,
                    HomeSection::Popular => popular_index,
                };
                if *idx > 0 {
                    *idx -= 1;
                }
            }
            ContentView::Listing { selected_index, .. }
            | ContentView::SearchResults { selected_index, .. }
            | ContentView::GenreMovies { selected_index, .. } => {
                if *selected_index > 0 {
                    *selected_index -= 1;
                }
            }
            ContentView::MovieDetail { video_index, .. } => {
                if *video_index > 0 {
                    *video_index -= 1;
                }
            }
            ContentView::Empty => {}
        }
    }

    pub async fn content_move_down(&self) {
        let mut state = self.content_state.lock().await;
        match &mut state.view {
            ContentView::Home {
                top_rated,
                popular,
                section,
                top_index,
                popular_index,
            } => {
                let (idx, max) = match section {
                    HomeSection::TopRated => (top_index, top_rated.len()),
                    HomeSection::Popular => (popular_index, popular.items.len()),
                };
                if *idx < max.saturating_sub(1) {
                    *idx += 1;
                }
            }
            ContentView::Listing {
                listing,
                selected_index,
                ..
            }
            | ContentView::SearchResults {
                listing,
                selected_index,
            }
            | ContentView::GenreMovies {
                listing,
                selected_index,
                ..
            } => {
                if *selected_index < listing.items.len().saturating_sub(1) {
                    *selected_index += 1;
                }
            }
            ContentView::MovieDetail {
                detail, video_index, ..
            } => {
                let max = detail.as_ref().map(|d| d.videos.len()).unwrap_or(0);
                if *video_index < max.saturating_sub(1) {
                    *video_index += 1;
                }
            }
            ContentView::Empty => {}
        }
    }

    const PAGINATION_THRESHOLD: usize = 10;

    /// True when the selection sits close enough to the end of the active
    /// listing that the next page should be fetched.
    pub async fn should_load_more(&self) -> bool {
        let state = self.content_state.lock().await;
        let selected = match &state.view {
            ContentView::Home {
                section: HomeSection::Popular,
                popular_index,
                ..
            } => *popular_index,
            ContentView::Listing { selected_index, .. }
            | ContentView::SearchResults { selected_index, .. }
            | ContentView::GenreMovies { selected_index, .. } => *selected_index,
            _ => return false,
        };
        let Some(listing) = state.view.active_listing() else {
            return false;
        };
        !listing.loading
            && listing.can_load_more()
            && selected + Self::PAGINATION_THRESHOLD >= listing.items.len()
    }

    /// The best trailer of the open detail view, original button semantics:
    /// official YouTube trailer, else any YouTube trailer, else any video.
    pub async fn get_preferred_trailer(&self) -> Option<super::content::Video> {
        let state = self.content_state.lock().await;
        if let ContentView::MovieDetail {
            detail: Some(detail),
            ..
        } = &state.view
        {
            super::content::pick_trailer(&detail.videos).cloned()
        } else {
            None
        }
    }

    pub async fn get_selected_content_item(&self) -> Option<SelectedItem> {
        let state = self.content_state.lock().await;
        match &state.view {
            ContentView::Home {
                top_rated,
                popular,
                section,
                top_index,
                popular_index,
            } => {
                let movie = match section {
                    HomeSection::TopRated => top_rated.get(*top_index),
                    HomeSection::Popular => popular.items.get(*popular_index),
                };
                movie.map(|m| SelectedItem::Movie { id: m.id })
            }
            ContentView::Listing {
                listing,
                selected_index,
                ..
            }
            | ContentView::SearchResults {
                listing,
                selected_index,
            }
            | ContentView::GenreMovies {
                listing,
                selected_index,
                ..
            } => listing
                .items
                .get(*selected_index)
                .map(|m| SelectedItem::Movie { id: m.id }),
            ContentView::MovieDetail {
                detail, video_index, ..
            } => detail
                .as_ref()
                .and_then(|d| d.videos.get(*video_index))
                .map(|v| SelectedItem::Video { video: v.clone() }),
            ContentView::Empty => None,
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}
