//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, View};
use crate::config::Config;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::{library, lyrics_view, modal, player_bar, playlist_detail};

/// Main layout structure:
/// ┌─────────────────────────────────────────┐
/// │           Main Content                  │
/// │   (Library grid / Playlist detail)     │
/// │                                         │
/// ├─────────────────────────────────────────┤
/// │              Player bar                 │
/// └─────────────────────────────────────────┘
/// The lyrics view takes the whole frame; dialogs draw on top of everything.
pub fn render(frame: &mut Frame, cfg: &Config, state: &mut AppState) {
    let root = frame.area();
    let _ = cfg;

    match state.view {
        View::LyricsFullScreen => {
            lyrics_view::render(frame, state, root);
        }
        View::Library | View::PlaylistDetail => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(8),    // Main content
                    Constraint::Length(7), // Player bar
                ])
                .split(root);

            match state.view {
                View::Library => library::render(frame, state, rows[0]),
                _ => playlist_detail::render(frame, state, rows[0]),
            }
            player_bar::render(frame, state, rows[1]);
        }
    }

    modal::render(frame, state, root);
}
