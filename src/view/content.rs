//! Main content area rendering (home, listings, search, genre, movie detail)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use ratatui::widgets::{ListItem, Padding};

use crate::model::{
    ActiveSection, ContentState, ContentView, Genre, HomeSection, ListingSource,
    MovieDetail, MovieSummary, PagedListing, UiState, image_url, ImageSize,
};
use super::utils::{calculate_num_width, format_runtime, render_scrollable_list, truncate_string};

pub fn render_main_content(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    content_state: &ContentState,
) {
    let is_focused = ui_state.active_section == ActiveSection::MainContent;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    if content_state.is_loading {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Content ")
                    .border_style(border_style),
            );
        frame.render_widget(loading, area);
        return;
    }

    match &content_state.view {
        ContentView::Empty => {
            let content = Paragraph::new(
                "Pick Home or a genre, or type in search and press Enter\n\nUse Tab to navigate between sections\nUse ↑/↓ to select items\nPress Enter to open",
            )
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
            frame.render_widget(content, area);
        }
        ContentView::Home {
            top_rated,
            popular,
            section,
            top_index,
            popular_index,
        } => {
            render_home(
                frame,
                area,
                top_rated,
                popular,
                *section,
                *top_index,
                *popular_index,
                is_focused,
            );
        }
        ContentView::Listing {
            title,
            listing,
            selected_index,
        } => {
            render_movie_list(
                frame,
                area,
                &format!(" {title} "),
                &listing.items,
                *selected_index,
                is_focused,
            );
        }
        ContentView::SearchResults {
            listing,
            selected_index,
        } => {
            render_search_results(frame, area, listing, *selected_index, is_focused);
        }
        ContentView::GenreMovies {
            genre,
            listing,
            selected_index,
        } => {
            render_genre_movies(frame, area, genre, listing, *selected_index, is_focused);
        }
        ContentView::MovieDetail {
            detail, video_index, ..
        } => {
            render_movie_detail(frame, area, detail.as_ref(), *video_index, is_focused);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_home(
    frame: &mut Frame,
    area: Rect,
    top_rated: &[MovieSummary],
    popular: &PagedListing,
    section: HomeSection,
    top_index: usize,
    popular_index: usize,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Hero banner
            Constraint::Length(3), // Section tabs
            Constraint::Min(0),    // Movie list
        ])
        .split(area);

    render_hero(frame, chunks[0], popular.items.first(), border_style);

    let tab_titles = [
        (
            HomeSection::TopRated,
            format!(" Top Rated ({}) ", top_rated.len()),
        ),
        (
            HomeSection::Popular,
            format!(" Popular ({}) ", popular.items.len()),
        ),
    ];

    let tabs_content: Vec<Span> = tab_titles
        .iter()
        .flat_map(|(tab_section, title)| {
            let style = if *tab_section == section {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            vec![Span::styled(title.clone(), style), Span::raw("  ")]
        })
        .collect();

    let tabs = Paragraph::new(Line::from(tabs_content)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Home (←/→ to switch) ")
            .border_style(border_style),
    );
    frame.render_widget(tabs, chunks[1]);

    let (movies, selected) = match section {
        HomeSection::TopRated => (top_rated, top_index),
        HomeSection::Popular => (popular.items.as_slice(), popular_index),
    };
    render_movie_list(frame, chunks[2], "", movies, selected, is_focused);
}

fn render_hero(
    frame: &mut Frame,
    area: Rect,
    movie: Option<&MovieSummary>,
    border_style: Style,
) {
    let lines = match movie {
        Some(movie) => {
            let mut meta = Vec::new();
            if let Some(year) = movie.year() {
                meta.push(Span::styled(
                    format!("{year}  "),
                    Style::default().fg(Color::Gray),
                ));
            }
            meta.push(Span::styled(
                format!("★ {:.1}", movie.vote_average),
                Style::default().fg(Color::Yellow),
            ));

            // Backdrop preferred, poster as fallback, as a movie card would
            let artwork = movie
                .backdrop_path
                .as_deref()
                .or(movie.poster_path.as_deref());

            vec![
                Line::from(Span::styled(
                    movie.title.clone(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(meta),
                Line::from(Span::styled(
                    movie.overview.clone(),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    image_url(artwork, ImageSize::Original),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Nothing to feature yet",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let hero = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        );
    frame.render_widget(hero, area);
}

fn render_search_results(
    frame: &mut Frame,
    area: Rect,
    listing: &PagedListing,
    selected_index: usize,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Result summary
            Constraint::Min(0),    // Results list
        ])
        .split(area);

    let query = match &listing.source {
        ListingSource::Search { query } => query.as_str(),
        _ => "",
    };

    let summary = if listing.total_results > 0 {
        format!("Found {} results for \"{}\"", listing.total_results, query)
    } else if listing.loading {
        "Searching...".to_string()
    } else {
        format!("No results found for \"{}\"", query)
    };

    let header = Paragraph::new(summary)
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search Results ")
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        );
    frame.render_widget(header, chunks[0]);

    render_movie_list(frame, chunks[1], "", &listing.items, selected_index, is_focused);
}

fn render_genre_movies(
    frame: &mut Frame,
    area: Rect,
    genre: &Genre,
    listing: &PagedListing,
    selected_index: usize,
    is_focused: bool,
) {
    render_movie_list(
        frame,
        area,
        &format!(" {} Movies ", genre.name),
        &listing.items,
        selected_index,
        is_focused,
    );
}

fn render_movie_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    movies: &[MovieSummary],
    selected_index: usize,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    if movies.is_empty() {
        let empty = Paragraph::new("  No movies found")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title.to_string())
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
        frame.render_widget(empty, area);
        return;
    }

    let content_width = area.width.saturating_sub(4) as usize;
    let num_width = calculate_num_width(movies.len());
    let year_width = 4;
    let rating_width = 6;
    let fixed_width = 1 + num_width + 3 + 3 + year_width + 3 + rating_width;
    let title_width = content_width.saturating_sub(fixed_width);

    // Header as first item, selection offset accordingly
    let mut items = vec![
        ListItem::new(format!(
            " {:<num_width$}   {:<title_width$}   {:>year_width$}   {:>rating_width$}",
            "#", "Title", "Year", "Rating",
        ))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    ];

    let movie_items: Vec<ListItem> = movies
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            let style = if i == selected_index && is_focused {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if i == selected_index {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let year = movie
                .year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| "----".to_string());
            let title_str = truncate_string(&movie.title, title_width);

            ListItem::new(format!(
                " {:<num_width$}   {}   {:>year_width$}   ★ {:>4.1}",
                i + 1,
                title_str,
                year,
                movie.vote_average,
            ))
            .style(style)
        })
        .collect();
    items.extend(movie_items);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    render_scrollable_list(frame, area, items, selected_index + 1, block);
}

fn render_movie_detail(
    frame: &mut Frame,
    area: Rect,
    detail: Option<&MovieDetail>,
    video_index: usize,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let Some(detail) = detail else {
        // Distinct from an empty listing: the movie itself is missing.
        let not_found = Paragraph::new(
            "Movie not found\n\nThe movie could not be loaded. It may have been removed.\nPress Esc to go back.",
        )
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Movie ")
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        );
        frame.render_widget(not_found, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Details
            Constraint::Percentage(40), // Videos
        ])
        .split(area);

    let movie = &detail.movie;
    let mut meta = Vec::new();
    if let Some(year) = movie.year() {
        meta.push(Span::styled(
            format!("📅 {year}   "),
            Style::default().fg(Color::Gray),
        ));
    }
    if let Some(runtime) = movie.runtime {
        meta.push(Span::styled(
            format!("🕐 {}   ", format_runtime(runtime)),
            Style::default().fg(Color::Gray),
        ));
    }
    meta.push(Span::styled(
        format!("★ {:.1}", movie.vote_average),
        Style::default().fg(Color::Yellow),
    ));

    let genres = movie
        .genres
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(" · ");

    let mut lines = vec![
        Line::from(Span::styled(
            movie.title.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(meta),
    ];
    if !genres.is_empty() {
        lines.push(Line::from(Span::styled(
            genres,
            Style::default().fg(Color::Cyan),
        )));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        movie.overview.clone(),
        Style::default().fg(Color::White),
    )));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!(
            "Poster: {}",
            image_url(movie.poster_path.as_deref(), ImageSize::W500)
        ),
        Style::default().fg(Color::DarkGray),
    )));
    if movie.backdrop_path.is_some() {
        lines.push(Line::from(Span::styled(
            format!(
                "Backdrop: {}",
                image_url(movie.backdrop_path.as_deref(), ImageSize::Original)
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let details_widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Movie ")
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        );
    frame.render_widget(details_widget, chunks[0]);

    if detail.videos.is_empty() {
        let empty = Paragraph::new("  No videos available")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Videos ")
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let video_items: Vec<ListItem> = detail
        .videos
        .iter()
        .enumerate()
        .map(|(i, video)| {
            let style = if i == video_index && is_focused {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if i == video_index {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let official = if video.official { " ●" } else { "" };
            ListItem::new(format!("▶ {} ({}{})", video.name, video.kind, official)).style(style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Videos (Enter to open trailer) ")
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    render_scrollable_list(frame, chunks[1], video_items, video_index, block);
}
