//! Paged listing state shared by every movie list view.
//!
//! Each view owns one `PagedListing` per movie list it shows. The listing
//! accumulates pages from one `ListingSource` until the source changes, at
//! which point it is reset under a fresh epoch and the old results (including
//! any still in flight) are discarded.

use std::sync::atomic::{AtomicU64, Ordering};

use super::content::{MoviePage, MovieSummary};

/// Opaque token identifying one generation of accumulated results.
///
/// Tokens are process-unique, so a result fetched for an earlier generation
/// (or for a listing that no longer exists) can never be applied by accident.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Epoch(u64);

static NEXT_EPOCH: AtomicU64 = AtomicU64::new(1);

fn next_epoch() -> Epoch {
    Epoch(NEXT_EPOCH.fetch_add(1, Ordering::Relaxed))
}

/// Which remote listing a `PagedListing` accumulates.
///
/// The selector (query text, genre id) is part of the source, so comparing
/// sources is the selector-change check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingSource {
    Popular,
    TopRated,
    Search { query: String },
    Genre { id: u64 },
}

/// Tag handed out when a fetch is dispatched; must be presented back to
/// `apply_page`/`abort_load` so stale completions can be dropped.
#[derive(Clone, Copy, Debug)]
pub struct LoadTicket {
    pub epoch: Epoch,
    pub page: u32,
}

#[derive(Clone, Debug)]
pub struct PagedListing {
    pub source: ListingSource,
    pub items: Vec<MovieSummary>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    epoch: Epoch,
    pub loading: bool,
}

impl PagedListing {
    pub fn new(source: ListingSource) -> Self {
        Self {
            source,
            items: Vec::new(),
            current_page: 1,
            total_pages: 0,
            total_results: 0,
            epoch: next_epoch(),
            loading: false,
        }
    }

    /// A fresh listing with its page-1 fetch already marked in flight.
    /// Used when a view opens and dispatches its first load in one step.
    pub fn begin(source: ListingSource) -> (Self, LoadTicket) {
        let mut listing = Self::new(source);
        listing.loading = true;
        let ticket = LoadTicket {
            epoch: listing.epoch,
            page: listing.current_page,
        };
        (listing, ticket)
    }

    /// Selector changed: drop everything and start a new epoch.
    ///
    /// Must run before any fetch for the new source is dispatched.
    pub fn reset(&mut self, source: ListingSource) {
        *self = Self::new(source);
    }

    pub fn can_load_more(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Move to the next page if one exists. No-op past the last page.
    pub fn advance(&mut self) -> bool {
        if self.can_load_more() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Mark a fetch for the current page as in flight.
    ///
    /// Returns `None` while another fetch is outstanding: dispatch is
    /// serialized per listing, which also makes duplicate load-more triggers
    /// harmless.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(LoadTicket {
            epoch: self.epoch,
            page: self.current_page,
        })
    }

    /// Fold a fetched page into the listing.
    ///
    /// Page 1 replaces the accumulated items; later pages append in arrival
    /// order. The server's pagination counters always win, even when they
    /// shrink. Returns `false` (leaving the listing untouched) when the
    /// ticket's epoch is no longer current.
    pub fn apply_page(&mut self, ticket: LoadTicket, page: MoviePage) -> bool {
        if ticket.epoch != self.epoch {
            tracing::debug!(
                page = ticket.page,
                "Dropping stale page result from a previous epoch"
            );
            return false;
        }
        self.loading = false;
        if page.page != ticket.page {
            tracing::debug!(
                requested = ticket.page,
                received = page.page,
                "Server answered with a different page number"
            );
        }
        if ticket.page == 1 {
            self.items = page.results;
        } else {
            self.items.extend(page.results);
        }
        self.total_pages = page.total_pages;
        self.total_results = page.total_results;
        true
    }

    /// Fetch failed: clear the in-flight flag, keep items and counters.
    /// Returns `false` for tickets from a previous epoch, which must not
    /// disturb the current load.
    pub fn abort_load(&mut self, ticket: LoadTicket) -> bool {
        if ticket.epoch == self.epoch {
            self.loading = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {id}"),
            poster_path: None,
            backdrop_path: None,
            overview: String::new(),
            release_date: None,
            vote_average: 7.0,
        }
    }

    fn page(number: u32, ids: std::ops::Range<u64>, total_pages: u32, total_results: u32) -> MoviePage {
        MoviePage {
            results: ids.map(movie).collect(),
            page: number,
            total_pages,
            total_results,
        }
    }

    #[test]
    fn first_page_replaces_existing_items() {
        let mut listing = PagedListing::new(ListingSource::Popular);
        let ticket = listing.begin_load().unwrap();
        assert!(listing.apply_page(ticket, page(1, 0..20, 5, 100)));
        assert_eq!(listing.items.len(), 20);

        // A later page-1 load (e.g. a refresh) discards what was there.
        let ticket = listing.begin_load().unwrap();
        assert!(listing.apply_page(ticket, page(1, 100..103, 1, 3)));
        assert_eq!(listing.items.len(), 3);
        assert_eq!(listing.items[0].id, 100);
        assert_eq!(listing.total_pages, 1);
    }

    #[test]
    fn later_pages_append_preserving_order() {
        let mut listing = PagedListing::new(ListingSource::TopRated);
        let ticket = listing.begin_load().unwrap();
        listing.apply_page(ticket, page(1, 0..20, 3, 60));

        assert!(listing.advance());
        let ticket = listing.begin_load().unwrap();
        assert_eq!(ticket.page, 2);
        listing.apply_page(ticket, page(2, 20..40, 3, 60));

        assert_eq!(listing.items.len(), 40);
        let ids: Vec<u64> = listing.items.iter().map(|m| m.id).collect();
        assert_eq!(ids, (0..40).collect::<Vec<u64>>());
    }

    #[test]
    fn can_load_more_tracks_pagination_bounds() {
        let mut listing = PagedListing::new(ListingSource::Popular);
        // total_pages starts at 0: nothing to load.
        assert!(!listing.can_load_more());
        assert!(!listing.advance());
        assert_eq!(listing.current_page, 1);

        let ticket = listing.begin_load().unwrap();
        listing.apply_page(ticket, page(1, 0..20, 2, 40));
        assert!(listing.can_load_more());

        assert!(listing.advance());
        assert_eq!(listing.current_page, 2);
        let ticket = listing.begin_load().unwrap();
        listing.apply_page(ticket, page(2, 20..40, 2, 40));

        // At the last page advance becomes a no-op.
        assert!(!listing.can_load_more());
        assert!(!listing.advance());
        assert_eq!(listing.current_page, 2);
    }

    #[test]
    fn empty_first_page_leaves_nothing_to_load() {
        let mut listing = PagedListing::new(ListingSource::Search {
            query: "zzzzz".into(),
        });
        let ticket = listing.begin_load().unwrap();
        listing.apply_page(ticket, page(1, 0..0, 0, 0));
        assert!(listing.items.is_empty());
        assert!(!listing.can_load_more());
    }

    #[test]
    fn reset_discards_items_before_next_fetch_resolves() {
        let mut listing = PagedListing::new(ListingSource::Genre { id: 28 });
        let ticket = listing.begin_load().unwrap();
        listing.apply_page(ticket, page(1, 0..20, 10, 200));
        listing.advance();
        assert_eq!(listing.items.len(), 20);

        listing.reset(ListingSource::Genre { id: 35 });
        assert!(listing.items.is_empty());
        assert_eq!(listing.current_page, 1);
        assert_eq!(listing.total_pages, 0);
        assert!(!listing.loading);
    }

    #[test]
    fn stale_epoch_result_is_dropped() {
        let mut listing = PagedListing::new(ListingSource::Search {
            query: "alien".into(),
        });
        let stale = listing.begin_load().unwrap();

        // Query changes while the fetch is in flight.
        listing.reset(ListingSource::Search {
            query: "aliens".into(),
        });
        let fresh = listing.begin_load().unwrap();

        assert!(!listing.apply_page(stale, page(1, 0..20, 5, 100)));
        assert!(listing.items.is_empty());
        assert!(listing.loading); // the fresh load is still outstanding

        // A stale abort must not clear the fresh load either.
        assert!(!listing.abort_load(stale));
        assert!(listing.loading);

        assert!(listing.apply_page(fresh, page(1, 50..55, 1, 5)));
        assert_eq!(listing.items.len(), 5);
    }

    #[test]
    fn begin_marks_page_one_in_flight() {
        let (listing, ticket) = PagedListing::begin(ListingSource::Popular);
        assert!(listing.loading);
        assert_eq!(ticket.page, 1);
        assert!(listing.items.is_empty());
    }

    #[test]
    fn in_flight_load_blocks_duplicate_dispatch() {
        let mut listing = PagedListing::new(ListingSource::Popular);
        let ticket = listing.begin_load().unwrap();
        assert!(listing.begin_load().is_none());
        listing.apply_page(ticket, page(1, 0..20, 2, 40));
        assert!(listing.begin_load().is_some());
    }

    #[test]
    fn failed_load_keeps_accumulated_state() {
        let mut listing = PagedListing::new(ListingSource::Popular);
        let ticket = listing.begin_load().unwrap();
        listing.apply_page(ticket, page(1, 0..20, 5, 100));
        listing.advance();

        let ticket = listing.begin_load().unwrap();
        listing.abort_load(ticket);
        assert!(!listing.loading);
        assert_eq!(listing.items.len(), 20);
        // Retry refetches the same page.
        assert_eq!(listing.begin_load().unwrap().page, 2);
    }

    #[test]
    fn genre_discover_two_page_walkthrough() {
        let mut listing = PagedListing::new(ListingSource::Genre { id: 28 });
        let ticket = listing.begin_load().unwrap();
        assert!(listing.apply_page(ticket, page(1, 0..20, 10, 200)));
        assert_eq!(listing.items.len(), 20);
        assert_eq!(listing.total_results, 200);
        assert!(listing.can_load_more());

        assert!(listing.advance());
        assert_eq!(listing.current_page, 2);
        let ticket = listing.begin_load().unwrap();
        assert!(listing.apply_page(ticket, page(2, 20..40, 10, 200)));
        assert_eq!(listing.items.len(), 40);
    }
}
