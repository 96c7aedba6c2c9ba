pub mod library;
pub mod lyrics_view;
pub mod modal;
pub mod player_bar;
pub mod playlist_detail;
pub mod root;

use ratatui::layout::Rect;

/// mm:ss display
pub(crate) fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

pub(crate) fn truncate_str(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let char_count: usize = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// A fixed-size rect centered in `area`, clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// A unicode progress bar string for `width` cells at `ratio` in [0, 1].
pub(crate) fn progress_bar(width: usize, ratio: f64, icons: &crate::tui::theme::Icons) -> String {
    if width < 3 {
        return String::new();
    }

    let filled = ((width - 1) as f64 * ratio.clamp(0.0, 1.0)).round() as usize;
    let empty = width.saturating_sub(filled + 1);

    let mut bar = String::with_capacity(width * 3);

    for _ in 0..filled {
        bar.push_str(icons.progress_full);
    }

    bar.push_str(icons.progress_head);

    for _ in 0..empty {
        bar.push_str(icons.progress_empty);
    }

    bar
}
