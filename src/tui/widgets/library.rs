//! Library view - the playlist grid

use crate::app::state::AppState;
use crate::tui::theme::{get_theme, Palette};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Your Playlists ", icons.library))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Summary line
            Constraint::Length(1), // Spacing
            Constraint::Min(1),    // Playlist list
            Constraint::Length(1), // Key hints
        ])
        .split(inner);

    let summary = format!(
        "{} playlists {} {} songs total",
        state.store.len(),
        icons.bullet,
        state.store.total_songs()
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            summary,
            Style::default().fg(theme.palette.fg_secondary),
        ))),
        rows[0],
    );

    if state.store.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No playlists yet. Press n to create one.",
                Style::default().fg(theme.palette.fg_secondary),
            ))),
            rows[2],
        );
    }

    let items: Vec<ListItem> = state
        .store
        .playlists()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let is_selected = i == state.playlist_cursor;
            let marker = if is_selected {
                icons.selected
            } else {
                icons.unselected
            };
            let name_style = if is_selected {
                Style::default()
                    .fg(theme.palette.fg_primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_secondary)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(theme.palette.accent)),
                Span::styled(
                    format!("{} ", icons.folder(p.icon)),
                    Style::default().fg(Palette::folder_color(p.color)),
                ),
                Span::styled(p.name.clone(), name_style),
                Span::styled(
                    format!("  {} songs", p.song_count),
                    Style::default().fg(theme.palette.fg_secondary),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), rows[2]);

    let hints = format!(
        "enter open {b} n new playlist {b} space play/pause {b} 2 lyrics {b} q quit",
        b = icons.bullet
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(theme.palette.fg_secondary),
        ))),
        rows[3],
    );
}
