//! Player bar - compact text-only player pinned below the library views

use crate::app::state::{AppState, ToastKind};
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
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
        .title(format!(" {} Player ", icons.music))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let padded = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner)[1];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Track title + artist
            Constraint::Length(1), // Progress bar
            Constraint::Length(1), // Time + controls
            Constraint::Min(0),    // Toast (if any)
        ])
        .split(padded);

    let content_width = padded.width.saturating_sub(1) as usize;

    let title_line = match &state.current_song {
        Some(song) => Line::from(vec![
            Span::styled(
                truncate_str(&song.title, content_width.saturating_sub(song.artist.len() + 3)),
                Style::default()
                    .fg(theme.palette.fg_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", song.artist),
                Style::default().fg(theme.palette.fg_secondary),
            ),
        ]),
        None => Line::from(Span::styled(
            "Not playing",
            Style::default().fg(theme.palette.fg_secondary),
        )),
    };
    frame.render_widget(Paragraph::new(title_line), rows[0]);

    let bar = progress_bar(rows[1].width as usize, state.clock.progress(), icons);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            bar,
            Style::default().fg(theme.palette.accent),
        ))),
        rows[1],
    );

    let play_icon = if state.clock.is_playing() {
        icons.pause
    } else {
        icons.play
    };
    let controls = Line::from(vec![
        Span::styled(
            format!(
                "{}/{}",
                format_time(state.clock.current_time()),
                format_time(state.clock.duration())
            ),
            Style::default().fg(theme.palette.fg_secondary),
        ),
        Span::raw(" "),
        Span::styled(icons.prev, Style::default().fg(theme.palette.fg_secondary)),
        Span::raw(" "),
        Span::styled(play_icon, Style::default().fg(theme.palette.playing)),
        Span::raw(" "),
        Span::styled(icons.next, Style::default().fg(theme.palette.fg_secondary)),
        Span::raw("  "),
        Span::styled(
            format!("2 open lyrics {} space pause", icons.bullet),
            Style::default().fg(theme.palette.fg_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(controls), rows[2]);

    if let Some(toast) = &state.toast
        && !toast.is_expired()
    {
        let (prefix, color) = match toast.kind {
            ToastKind::Success => (icons.success, theme.palette.playing),
            ToastKind::Error => (icons.error, theme.palette.error),
            ToastKind::Info => (icons.info, theme.palette.fg_secondary),
        };
        let toast_line = Line::from(vec![
            Span::styled(format!("{} ", prefix), Style::default().fg(color)),
            Span::styled(
                truncate_str(&toast.message, content_width.saturating_sub(3)),
                Style::default().fg(color),
            ),
        ]);
        frame.render_widget(Paragraph::new(toast_line), rows[3]);
    }
}
