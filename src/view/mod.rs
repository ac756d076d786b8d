//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `layout`: Main layout structure (top bar, sidebar)
//! - `content`: Main content area rendering
//! - `status`: Bottom status bar
//! - `overlays`: Modal overlays (error, trailer, help)

mod utils;
mod layout;
mod content;
mod status;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{ContentState, UiState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, ui_state: &UiState, content_state: &ContentState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + catalog badge
                Constraint::Min(0),    // Main content (sidebar + content)
                Constraint::Length(3), // Status bar
            ])
            .split(frame.area());

        // Top bar: Search + catalog badge
        layout::render_top_bar(frame, chunks[0], ui_state);

        // Middle: Sidebar (Browse + Genres) and Main Content
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25), // Sidebar (Browse + Genres)
                Constraint::Percentage(75), // Main content
            ])
            .split(chunks[1]);

        // Sidebar: Browse entries and genre index stacked vertically
        layout::render_sidebar(frame, main_chunks[0], ui_state);

        // Main content area
        content::render_main_content(frame, main_chunks[1], ui_state, content_state);

        // Bottom: status summary for the active view
        status::render_status_bar(frame, chunks[2], content_state);

        // Error notification overlay (if there's an error)
        if ui_state.error_message.is_some() {
            overlays::render_error_notification(frame, ui_state);
        }

        // Trailer popup overlay (if open)
        if ui_state.trailer.is_some() {
            overlays::render_trailer_popup(frame, ui_state);
        }

        // Help popup overlay (if open)
        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
