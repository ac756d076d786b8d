//! View-opening and page-loading controller methods

use crate::model::{Genre, ListingSource, MovieDetail, TmdbError};
use super::AppController;

/// How many movies the Home view keeps from the top rated listing.
pub const HOME_TOP_RATED_LIMIT: usize = 10;

impl AppController {
    /// Load the genre index shown in the sidebar. Runs once at startup.
    pub async fn load_genre_index(&self) {
        let model = self.model.lock().await;
        let Some(tmdb) = model.get_tmdb_client() else {
            return;
        };
        drop(model);

        match tmdb.movie_genres().await {
            Ok(genres) => {
                tracing::info!(count = genres.len(), "Loaded genre index");
                let model = self.model.lock().await;
                model.set_genres(genres).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load genre index");
                let model = self.model.lock().await;
                model.set_error(Self::format_error(&e)).await;
            }
        }
    }

    /// Open the Home view: paged popular movies plus a short top rated rail.
    pub async fn load_home(&self) {
        let model = self.model.lock().await;
        let Some(tmdb) = model.get_tmdb_client() else {
            return;
        };
        let ticket = model.show_home().await;
        drop(model);

        let (popular, top_rated) = futures::join!(
            tmdb.fetch_page(&ListingSource::Popular, ticket.page),
            tmdb.top_rated_movies(1),
        );

        let model = self.model.lock().await;
        match popular {
            Ok(page) => {
                tracing::info!(results = page.results.len(), "Loaded popular movies");
                model.apply_listing_page(ticket, page).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load popular movies");
                model.abort_listing_load(ticket).await;
                model.set_error(Self::format_error(&e)).await;
            }
        }
        match top_rated {
            Ok(page) => {
                let rail: Vec<_> = page
                    .results
                    .into_iter()
                    .take(HOME_TOP_RATED_LIMIT)
                    .collect();
                model.set_top_rated(rail).await;
            }
            Err(e) => {
                // The popular section still renders; just report the failure.
                tracing::error!(error = %e, "Failed to load top rated rail");
                model.set_error(Self::format_error(&e)).await;
            }
        }
    }

    /// Open a full paged listing for one of the browse entries.
    pub async fn open_listing(&self, title: &str, source: ListingSource) {
        let model = self.model.lock().await;
        let Some(tmdb) = model.get_tmdb_client() else {
            return;
        };
        let ticket = model.show_listing(title.to_string(), source.clone()).await;
        drop(model);

        let result = tmdb.fetch_page(&source, ticket.page).await;

        let model = self.model.lock().await;
        match result {
            Ok(page) => {
                tracing::info!(title, results = page.results.len(), "Loaded listing");
                model.apply_listing_page(ticket, page).await;
            }
            Err(e) => {
                tracing::error!(title, error = %e, "Failed to load listing");
                model.abort_listing_load(ticket).await;
                model.set_error(Self::format_error(&e)).await;
            }
        }
    }

    pub async fn perform_search(&self, query: &str) {
        tracing::debug!(query, "Performing search");
        let model = self.model.lock().await;
        let Some(tmdb) = model.get_tmdb_client() else {
            return;
        };
        // Fresh epoch before the fetch goes out: anything still in flight
        // for an older query will be dropped on arrival.
        let ticket = model.show_search(query.to_string()).await;
        model.set_active_section(crate::model::ActiveSection::MainContent).await;
        drop(model);

        let result = tmdb.search_movies(query, ticket.page).await;

        let model = self.model.lock().await;
        match result {
            Ok(page) => {
                tracing::info!(
                    query,
                    results = page.results.len(),
                    total_results = page.total_results,
                    "Search completed"
                );
                model.apply_listing_page(ticket, page).await;
            }
            Err(e) => {
                tracing::error!(query, error = %e, "Search failed");
                model.abort_listing_load(ticket).await;
                model.set_error(Self::format_error(&e)).await;
            }
        }
    }

    /// Open the discover listing for a genre picked in the sidebar.
    pub async fn open_genre(&self, genre: Genre) {
        tracing::debug!(genre_id = genre.id, genre = %genre.name, "Opening genre");
        let model = self.model.lock().await;
        let Some(tmdb) = model.get_tmdb_client() else {
            return;
        };
        let source = ListingSource::Genre { id: genre.id };
        let ticket = model.show_genre_movies(genre).await;
        model.set_active_section(crate::model::ActiveSection::MainContent).await;
        drop(model);

        let result = tmdb.fetch_page(&source, ticket.page).await;

        let model = self.model.lock().await;
        match result {
            Ok(page) => {
                model.apply_listing_page(ticket, page).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load genre movies");
                model.abort_listing_load(ticket).await;
                model.set_error(Self::format_error(&e)).await;
            }
        }
    }

    /// Fetch the next page of whatever listing the user is scrolling.
    ///
    /// Dispatch is serialized per listing: while one page is in flight,
    /// further triggers (auto or manual) return without doing anything.
    pub async fn load_next_page(&self) {
        let model = self.model.lock().await;
        let Some(tmdb) = model.get_tmdb_client() else {
            return;
        };
        let Some((ticket, source)) = model.claim_next_page().await else {
            return;
        };
        drop(model);

        tracing::debug!(page = ticket.page, "Loading next page");
        let result = tmdb.fetch_page(&source, ticket.page).await;

        let model = self.model.lock().await;
        match result {
            Ok(page) => {
                tracing::info!(
                    page = ticket.page,
                    loaded = page.results.len(),
                    "Loaded next page"
                );
                model.apply_listing_page(ticket, page).await;
            }
            Err(e) => {
                tracing::error!(page = ticket.page, error = %e, "Failed to load next page");
                model.abort_listing_load(ticket).await;
                model.set_error(Self::format_error(&e)).await;
            }
        }
    }

    /// Open the detail view for a movie: details and videos are fetched
    /// concurrently, each call standing on its own.
    pub async fn open_movie(&self, movie_id: u64) {
        let model = self.model.lock().await;
        let Some(tmdb) = model.get_tmdb_client() else {
            return;
        };
        model.show_movie_loading(movie_id).await;
        drop(model);

        let (details, videos) = futures::join!(
            tmdb.movie_details(movie_id),
            tmdb.movie_videos(movie_id),
        );

        // A failed video fetch degrades to an empty list; the detail page is
        // still worth showing.
        let videos = videos.unwrap_or_else(|e| {
            tracing::warn!(movie_id, error = %e, "Failed to load videos");
            Vec::new()
        });

        let model = self.model.lock().await;
        match details {
            Ok(movie) => {
                tracing::info!(movie_id = movie.id, title = %movie.title, "Loaded movie detail");
                model
                    .set_movie_detail(movie_id, Some(MovieDetail { movie, videos }))
                    .await;
            }
            Err(TmdbError::NotFound) => {
                tracing::warn!(movie_id, "Movie not found");
                model.set_movie_detail(movie_id, None).await;
            }
            Err(e) => {
                tracing::error!(movie_id, error = %e, "Failed to load movie detail");
                model.set_movie_detail(movie_id, None).await;
                model.set_error(Self::format_error(&e)).await;
            }
        }
    }
}
