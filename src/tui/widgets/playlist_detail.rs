//! Playlist detail view - header card, search box and song list

use crate::app::state::{AppState, SearchFocus};
use crate::tui::theme::{get_theme, Palette};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::{format_time, truncate_str};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let Some(playlist) = state.selected_playlist() else {
        let p = Paragraph::new("No playlist selected")
            .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(p, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header card
            Constraint::Length(3), // Search box
            Constraint::Min(1),    // Song list
        ])
        .split(area);

    // Header card, tinted with the folder color
    let accent = Palette::folder_color(playlist.color);
    let header = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(accent))
        .title(format!(" {} {} ", icons.folder(playlist.icon), playlist.name))
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD));
    let header_inner = header.inner(rows[0]);
    frame.render_widget(header, rows[0]);

    let subtitle = Line::from(vec![
        Span::styled(
            format!("{} songs", playlist.song_count),
            Style::default().fg(theme.palette.fg_primary),
        ),
        Span::styled(
            format!(
                "  {b} esc back {b} e edit {b} D delete {b} o menu",
                b = icons.bullet
            ),
            Style::default().fg(theme.palette.fg_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(subtitle), header_inner);

    render_search_box(frame, state, rows[1]);
    render_song_list(frame, state, rows[2]);

    if state.header_menu_open {
        render_header_menu(frame, rows[0]);
    }
    if state.song_menu_open {
        render_song_menu(frame, rows[2]);
    }
}

fn render_search_box(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let is_focused = state.search_focus == SearchFocus::Input;
    let border_color = if is_focused {
        theme.palette.accent
    } else {
        theme.palette.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} Search ", icons.search))
        .title_style(Style::default().fg(theme.palette.accent));

    let cursor = if is_focused { "▏" } else { "" };
    let prompt = if state.search_query.is_empty() && !is_focused {
        "Search in this playlist... (/ to focus)".to_string()
    } else {
        format!("{}{}", state.search_query, cursor)
    };

    let style = if state.search_query.is_empty() && !is_focused {
        Style::default().fg(theme.palette.fg_secondary)
    } else {
        Style::default().fg(theme.palette.fg_primary)
    };

    let p = Paragraph::new(Line::from(prompt)).style(style).block(block);
    frame.render_widget(p, area);
}

fn render_song_list(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let Some(playlist) = state.selected_playlist() else {
        return;
    };
    let filtered = state.filtered_songs();

    if filtered.is_empty() {
        let p = Paragraph::new("No songs found")
            .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(p, area);
        return;
    }

    let width = area.width.saturating_sub(14) as usize;
    let playing_id = state.current_song.as_ref().map(|s| s.id.as_str());

    let items: Vec<ListItem> = filtered
        .iter()
        .enumerate()
        .filter_map(|(row, &idx)| playlist.songs.get(idx).map(|song| (row, song)))
        .map(|(row, song)| {
            let is_selected = row == state.song_cursor;
            let is_playing = playing_id == Some(song.id.as_str());

            let marker = if is_selected {
                icons.selected
            } else {
                icons.unselected
            };
            let note = if is_playing { icons.music } else { " " };
            let title_style = if is_selected {
                Style::default()
                    .fg(theme.palette.fg_primary)
                    .add_modifier(Modifier::BOLD)
            } else if is_playing {
                Style::default().fg(theme.palette.playing)
            } else {
                Style::default().fg(theme.palette.fg_secondary)
            };

            let display = truncate_str(&format!("{} - {}", song.title, song.artist), width);
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(theme.palette.accent)),
                Span::styled(format!("{note} "), Style::default().fg(theme.palette.playing)),
                Span::styled(display, title_style),
                Span::styled(
                    format!("  {}", format_time(song.duration)),
                    Style::default().fg(theme.palette.fg_secondary),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), area);
}

fn render_header_menu(frame: &mut Frame, anchor: Rect) {
    let theme = get_theme();
    let area = Rect {
        x: anchor.right().saturating_sub(26).max(anchor.x),
        y: anchor.y + 1,
        width: 24.min(anchor.width),
        height: 4,
    };
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            "e  Edit Playlist",
            Style::default().fg(theme.palette.fg_primary),
        )),
        Line::from(Span::styled(
            "D  Delete Playlist",
            Style::default().fg(theme.palette.fg_primary),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_song_menu(frame: &mut Frame, anchor: Rect) {
    let theme = get_theme();
    let area = Rect {
        x: anchor.right().saturating_sub(30).max(anchor.x),
        y: anchor.y,
        width: 28.min(anchor.width),
        height: 3,
    };
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "x  Remove from playlist",
            Style::default().fg(theme.palette.fg_primary),
        ))),
        inner,
    );
}
