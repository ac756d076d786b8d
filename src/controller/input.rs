//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{ActiveSection, ListingSource, SelectedItem};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;

        // Handle error message first (blocks all other interactions)
        if model.has_error().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    model.clear_error().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        // Handle help popup
        if model.is_help_popup_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
                    model.hide_help_popup().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        // Handle trailer popup
        if model.is_trailer_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    model.hide_trailer().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        let ui_state = model.get_ui_state().await;

        // Handle search input when in search section
        if ui_state.active_section == ActiveSection::Search {
            match key.code {
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        model.cycle_section_backward().await;
                    } else {
                        model.cycle_section_forward().await;
                    }
                    return Ok(());
                }
                KeyCode::Enter => {
                    let query = ui_state.search_query.trim().to_string();
                    drop(model);
                    if !query.is_empty() {
                        let controller = self.clone();
                        tokio::spawn(async move {
                            controller.perform_search(&query).await;
                        });
                    }
                    return Ok(());
                }
                KeyCode::Esc => {
                    model.update_search_query(String::new()).await;
                    return Ok(());
                }
                KeyCode::Backspace => {
                    model.backspace_search().await;
                    return Ok(());
                }
                KeyCode::Char(c) => {
                    // Q still quits even in search mode when Ctrl is pressed
                    if (c == 'q' || c == 'Q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        model.set_should_quit(true).await;
                        return Ok(());
                    }
                    model.append_to_search(c).await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Browse sidebar: Home / Popular / Top Rated entries
        if ui_state.active_section == ActiveSection::Browse {
            match key.code {
                KeyCode::Up => {
                    model.move_selection_up().await;
                    return Ok(());
                }
                KeyCode::Down => {
                    model.move_selection_down().await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    let index = model.get_selected_browse_index().await;
                    model.set_active_section(ActiveSection::MainContent).await;
                    drop(model);
                    let controller = self.clone();
                    tokio::spawn(async move {
                        match index {
                            0 => controller.load_home().await,
                            1 => {
                                controller
                                    .open_listing("Popular Movies", ListingSource::Popular)
                                    .await
                            }
                            2 => {
                                controller
                                    .open_listing("Top Rated Movies", ListingSource::TopRated)
                                    .await
                            }
                            _ => {}
                        }
                    });
                    return Ok(());
                }
                _ => {}
            }
        }

        // Genre sidebar
        if ui_state.active_section == ActiveSection::Genres {
            match key.code {
                KeyCode::Up => {
                    model.move_selection_up().await;
                    return Ok(());
                }
                KeyCode::Down => {
                    model.move_selection_down().await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    if let Some(genre) = model.get_selected_genre().await {
                        drop(model);
                        let controller = self.clone();
                        tokio::spawn(async move {
                            controller.open_genre(genre).await;
                        });
                    }
                    return Ok(());
                }
                _ => {}
            }
        }

        // Handle MainContent section navigation
        if ui_state.active_section == ActiveSection::MainContent {
            match key.code {
                KeyCode::Up => {
                    model.content_move_up().await;
                    return Ok(());
                }
                KeyCode::Down => {
                    model.content_move_down().await;
                    // Fetch the next page when close to the end (spawned so
                    // scrolling stays responsive)
                    if model.should_load_more().await {
                        let controller = self.clone();
                        tokio::spawn(async move {
                            controller.load_next_page().await;
                        });
                    }
                    return Ok(());
                }
                KeyCode::Left | KeyCode::Right => {
                    model.navigate_home_section().await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    let selected = model.get_selected_content_item().await;
                    drop(model);
                    if let Some(item) = selected {
                        self.handle_selected_item(item).await;
                    }
                    return Ok(());
                }
                KeyCode::Char('t') | KeyCode::Char('T') => {
                    if let Some(video) = model.get_preferred_trailer().await {
                        model.show_trailer(video).await;
                    }
                    return Ok(());
                }
                KeyCode::Char('m') | KeyCode::Char('M') => {
                    drop(model);
                    let controller = self.clone();
                    tokio::spawn(async move {
                        controller.load_next_page().await;
                    });
                    return Ok(());
                }
                KeyCode::Backspace | KeyCode::Esc => {
                    model.navigate_back().await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    model.cycle_section_backward().await;
                } else {
                    model.cycle_section_forward().await;
                }
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('/') => {
                model.set_active_section(ActiveSection::Search).await;
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                model.set_active_section(ActiveSection::Genres).await;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup().await;
            }
            _ => {}
        }

        Ok(())
    }

    pub(crate) async fn handle_selected_item(&self, item: SelectedItem) {
        match item {
            SelectedItem::Movie { id } => {
                let controller = self.clone();
                tokio::spawn(async move {
                    controller.open_movie(id).await;
                });
            }
            SelectedItem::Video { video } => {
                tracing::debug!(video_id = %video.id, key = %video.key, "Opening trailer popup");
                let model = self.model.lock().await;
                model.show_trailer(video).await;
            }
        }
    }
}
