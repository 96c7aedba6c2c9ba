//! Full-screen lyrics view with the translation overlay

use crate::app::state::{AppState, ToastKind};
use crate::translate::SUPPORTED_LANGUAGES;
use crate::tui::theme::{get_theme, LoadingSpinner};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::{format_time, progress_bar, truncate_str};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Now Playing ", icons.lyrics))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let padded = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(inner)[1];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Lyrics
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Song + translate controls
            Constraint::Length(1), // Progress bar
            Constraint::Length(1), // Time + transport
            Constraint::Length(1), // Toast / status
        ])
        .split(padded);

    render_lyrics(frame, state, rows[0]);
    render_song_row(frame, state, rows[2]);
    render_progress(frame, state, rows[3]);
    render_controls(frame, state, rows[4]);
    render_toast_line(frame, state, rows[5]);

    if state.language_menu_open {
        render_language_menu(frame, state, padded);
    }
}

fn render_lyrics(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();

    let Some(song) = &state.current_song else {
        let p = Paragraph::new("Nothing playing")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(p, area);
        return;
    };

    if song.lyrics.is_empty() {
        let p = Paragraph::new("No lyrics available")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(p, area);
        return;
    }

    let showing = state.overlay.is_showing();
    let rows_per_line = if showing { 2 } else { 1 };
    let capacity = ((area.height as usize) / rows_per_line).max(1);
    let active = state.active_line.unwrap_or(0);

    // Window the sheet so the active line sits near the middle
    let start = active.saturating_sub(capacity / 2);
    let end = (start + capacity).min(song.lyrics.len());
    let start = end.saturating_sub(capacity);

    let mut lines: Vec<Line> = Vec::with_capacity(capacity * rows_per_line);
    for (idx, lyric) in song.lyrics.iter().enumerate().take(end).skip(start) {
        let is_current = idx == active;
        let style = if is_current {
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.palette.fg_secondary)
        };
        lines.push(Line::from(Span::styled(lyric.text.clone(), style)).centered());

        if let Some(translated) = state.overlay.overlay_text(idx) {
            let overlay_style = if is_current {
                Style::default()
                    .fg(theme.palette.accent_alt)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default()
                    .fg(theme.palette.fg_secondary)
                    .add_modifier(Modifier::ITALIC | Modifier::DIM)
            };
            lines.push(Line::from(Span::styled(translated.to_string(), overlay_style)).centered());
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_song_row(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let (title, artist) = state
        .current_song
        .as_ref()
        .map(|s| (s.title.as_str(), s.artist.as_str()))
        .unwrap_or(("Not playing", ""));

    let heart_style = if state.is_liked() {
        Style::default().fg(theme.palette.accent)
    } else {
        Style::default().fg(theme.palette.fg_secondary).add_modifier(Modifier::DIM)
    };

    let lang = state
        .overlay
        .active_language()
        .and_then(|name| SUPPORTED_LANGUAGES.iter().find(|l| l.name == name))
        .map(|l| l.label)
        .unwrap_or(SUPPORTED_LANGUAGES[state.language_idx % SUPPORTED_LANGUAGES.len()].label);

    let translate_status = if state.overlay.is_requesting() {
        format!("{} Translating...", LoadingSpinner::frame(state.tick))
    } else if state.overlay.is_showing() {
        "t hide".to_string()
    } else if state.overlay.has_cached() {
        "t show".to_string()
    } else {
        "t translate".to_string()
    };

    let width = area.width as usize;
    let song_text = truncate_str(
        &if artist.is_empty() {
            title.to_string()
        } else {
            format!("{title} - {artist}")
        },
        width.saturating_sub(24),
    );

    let row = Line::from(vec![
        Span::styled(format!("{} ", icons.favorite), heart_style),
        Span::styled(
            song_text,
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} [{}] {}", icons.translate, lang, translate_status),
            Style::default().fg(theme.palette.fg_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(row), area);
}

fn render_progress(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let bar = progress_bar(area.width as usize, state.clock.progress(), &theme.icons);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            bar,
            Style::default().fg(theme.palette.accent),
        ))),
        area,
    );
}

fn render_controls(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let play_icon = if state.clock.is_playing() {
        icons.pause
    } else {
        icons.play
    };

    let row = Line::from(vec![
        Span::styled(
            format!(
                "{}/{}",
                format_time(state.clock.current_time()),
                format_time(state.clock.duration())
            ),
            Style::default().fg(theme.palette.fg_secondary),
        ),
        Span::raw("  "),
        Span::styled(icons.prev, Style::default().fg(theme.palette.fg_secondary)),
        Span::raw(" "),
        Span::styled(play_icon, Style::default().fg(theme.palette.playing)),
        Span::raw(" "),
        Span::styled(icons.next, Style::default().fg(theme.palette.fg_secondary)),
        Span::raw("   "),
        Span::styled(
            format!(
                "space pause {b} n/p song {b} 0-9 jump {b} L language {b} f like {b} esc back",
                b = icons.bullet
            ),
            Style::default().fg(theme.palette.fg_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(row), area);
}

fn render_toast_line(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    if let Some(toast) = &state.toast
        && !toast.is_expired()
    {
        let (prefix, color) = match toast.kind {
            ToastKind::Success => (icons.success, theme.palette.playing),
            ToastKind::Error => (icons.error, theme.palette.error),
            ToastKind::Info => (icons.info, theme.palette.fg_secondary),
        };
        let line = Line::from(vec![
            Span::styled(format!("{} ", prefix), Style::default().fg(color)),
            Span::styled(
                truncate_str(&toast.message, area.width.saturating_sub(3) as usize),
                Style::default().fg(color),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    } else if !state.status.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                truncate_str(&state.status, area.width as usize),
                Style::default().fg(theme.palette.fg_secondary),
            ))),
            area,
        );
    }
}

fn render_language_menu(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let height = (SUPPORTED_LANGUAGES.len() as u16) + 2;
    let menu = Rect {
        x: area.right().saturating_sub(22).max(area.x),
        y: area.bottom().saturating_sub(height + 4).max(area.y),
        width: 20.min(area.width),
        height: height.min(area.height),
    };
    frame.render_widget(Clear, menu);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Language ", icons.translate))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(menu);
    frame.render_widget(block, menu);

    let items: Vec<ListItem> = SUPPORTED_LANGUAGES
        .iter()
        .enumerate()
        .map(|(i, lang)| {
            let is_cursor = i == state.language_menu_cursor;
            let style = if is_cursor {
                Style::default()
                    .fg(theme.palette.fg_primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_secondary)
            };
            let marker = if is_cursor {
                icons.selected
            } else {
                icons.unselected
            };
            ListItem::new(Line::from(Span::styled(
                format!("{marker} {}  {}", lang.label, lang.name),
                style,
            )))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}
