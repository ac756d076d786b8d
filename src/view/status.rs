//! Bottom status bar: active view summary and key hints

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{ContentState, ContentView, HomeSection, PagedListing};

fn listing_summary(listing: &PagedListing) -> String {
    let mut summary = format!(
        "{} of {} movies (page {}/{})",
        listing.items.len(),
        listing.total_results,
        listing.current_page,
        listing.total_pages.max(1),
    );
    if listing.loading {
        summary.push_str("  ·  loading...");
    } else if listing.can_load_more() {
        summary.push_str("  ·  m: load more");
    }
    summary
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, content_state: &ContentState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // View summary
            Constraint::Length(34), // Key hints
        ])
        .split(area);

    let summary = match &content_state.view {
        ContentView::Empty => "Browse the catalog to get started".to_string(),
        ContentView::Home {
            top_rated,
            popular,
            section,
            ..
        } => match section {
            HomeSection::TopRated => format!("Top rated · {} movies", top_rated.len()),
            HomeSection::Popular => format!("Popular · {}", listing_summary(popular)),
        },
        ContentView::Listing { title, listing, .. } => {
            format!("{} · {}", title, listing_summary(listing))
        }
        ContentView::SearchResults { listing, .. } => {
            format!("Search · {}", listing_summary(listing))
        }
        ContentView::GenreMovies { genre, listing, .. } => {
            format!("{} · {}", genre.name, listing_summary(listing))
        }
        ContentView::MovieDetail { detail, .. } => match detail {
            Some(detail) => detail.movie.title.clone(),
            None => "Movie not found".to_string(),
        },
    };

    let left = Paragraph::new(summary)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    frame.render_widget(left, chunks[0]);

    let hints = Paragraph::new("q quit · h help · Tab sections")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hints, chunks[1]);
}
