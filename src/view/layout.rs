//! Layout rendering (top bar, sidebar, main area structure)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveSection, UiState};

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(18), // Catalog badge
        ])
        .split(area);

    let search_style = if ui_state.active_section == ActiveSection::Search {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if ui_state.search_query.is_empty() {
        "Type to search movies..."
    } else {
        &ui_state.search_query
    };

    let search = Paragraph::new(search_text)
        .style(search_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1))
                .border_style(if ui_state.active_section == ActiveSection::Search {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                }),
        );
    frame.render_widget(search, chunks[0]);

    let badge = Paragraph::new("🎬 Movie Bazer")
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" Catalog "));
    frame.render_widget(badge, chunks[1]);
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Browse (3 items + 2 borderlines)
            Constraint::Min(0),    // Genres (fills remaining space)
        ])
        .split(area);

    // Browse section
    let browse_items: Vec<ListItem> = ui_state
        .browse_items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == ui_state.browse_selected
                && ui_state.active_section == ActiveSection::Browse
            {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if i == ui_state.browse_selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(item.name.clone()).style(style)
        })
        .collect();

    let browse_border_style = if ui_state.active_section == ActiveSection::Browse {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let browse = List::new(browse_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Browse ")
            .padding(Padding::horizontal(1))
            .border_style(browse_border_style),
    );
    frame.render_widget(browse, chunks[0]);

    // Genre index, loaded from the API at startup
    let genre_items: Vec<ListItem> = ui_state
        .genres
        .iter()
        .enumerate()
        .map(|(i, genre)| {
            let style = if i == ui_state.genre_selected
                && ui_state.active_section == ActiveSection::Genres
            {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if i == ui_state.genre_selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(genre.name.clone()).style(style)
        })
        .collect();

    let genres_border_style = if ui_state.active_section == ActiveSection::Genres {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    if genre_items.is_empty() {
        let placeholder = Paragraph::new("Loading genres...")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Genres ")
                    .padding(Padding::horizontal(1))
                    .border_style(genres_border_style),
            );
        frame.render_widget(placeholder, chunks[1]);
        return;
    }

    let genres = List::new(genre_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Genres ")
                .padding(Padding::horizontal(1))
                .border_style(genres_border_style),
        )
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(ui_state.genre_selected));

    frame.render_stateful_widget(genres, chunks[1], &mut list_state);
}
