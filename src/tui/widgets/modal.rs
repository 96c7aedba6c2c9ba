//! Modal dialogs - playlist create/edit form and confirmations

use crate::app::state::{AppState, FormField, PlaylistForm};
use crate::catalog::{FolderColor, FolderIcon};
use crate::tui::theme::{get_theme, Palette};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    if let Some(form) = &state.playlist_form {
        render_form(frame, form, area);
    } else if state.confirm_remove_song.is_some() {
        render_confirm(
            frame,
            area,
            "Remove from Playlist?",
            "This will remove the song from the playlist.",
        );
    } else if state.confirm_delete_playlist {
        let name = state
            .selected_playlist()
            .map(|p| p.name.clone())
            .unwrap_or_default();
        render_confirm(
            frame,
            area,
            "Delete Playlist?",
            &format!("Delete \"{name}\"? This cannot be undone."),
        );
    }
}

fn render_form(frame: &mut Frame, form: &PlaylistForm, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let title = if form.editing.is_some() {
        " Edit Playlist "
    } else {
        " Create New Playlist "
    };

    let modal = centered_rect(44, 12, area);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.accent))
        .title(title)
        .title_style(
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let label = |text: &str, focused: bool| {
        let style = if focused {
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.palette.fg_secondary)
        };
        Span::styled(text.to_string(), style)
    };

    let name_focused = form.field == FormField::Name;
    let cursor = if name_focused { "▏" } else { "" };
    let name_line = Line::from(vec![
        label("Name  ", name_focused),
        Span::styled(
            format!("{}{}", form.name, cursor),
            Style::default().fg(theme.palette.fg_primary),
        ),
    ]);

    // Icon picker row
    let icon_focused = form.field == FormField::Icon;
    let mut icon_spans = vec![label("Icon  ", icon_focused)];
    for (i, icon) in FolderIcon::ALL.iter().enumerate() {
        let is_picked = i == form.icon_idx % FolderIcon::ALL.len();
        let style = if is_picked {
            Style::default()
                .fg(theme.palette.fg_primary)
                .bg(theme.palette.bg_highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.palette.fg_secondary)
        };
        icon_spans.push(Span::styled(format!(" {} ", icons.folder(*icon)), style));
    }
    icon_spans.push(Span::styled(
        format!(" {}", form.icon().label()),
        Style::default().fg(theme.palette.fg_secondary),
    ));

    // Color picker row
    let color_focused = form.field == FormField::Color;
    let mut color_spans = vec![label("Color ", color_focused)];
    for (i, color) in FolderColor::ALL.iter().enumerate() {
        let is_picked = i == form.color_idx % FolderColor::ALL.len();
        let block_str = if is_picked { "[██]" } else { " ██ " };
        color_spans.push(Span::styled(
            block_str,
            Style::default().fg(Palette::folder_color(*color)),
        ));
    }

    let lines = vec![
        Line::default(),
        name_line,
        Line::default(),
        Line::from(icon_spans),
        Line::default(),
        Line::from(color_spans),
        Line::default(),
        Line::from(Span::styled(
            format!(
                "enter save {b} tab next field {b} ←/→ pick {b} esc cancel",
                b = icons.bullet
            ),
            Style::default().fg(theme.palette.fg_secondary),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_confirm(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let theme = get_theme();
    let icons = &theme.icons;

    let modal = centered_rect(46, 7, area);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.accent))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(theme.palette.fg_primary),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("y/enter confirm {} n/esc cancel", icons.bullet),
            Style::default().fg(theme.palette.fg_secondary),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
