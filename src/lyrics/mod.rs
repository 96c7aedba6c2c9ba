//! Timed lyric lines and the active-line locator
//!
//! A song carries an ordered sequence of timestamped lines; the locator maps
//! the playback clock to the line currently being sung.

use serde::{Deserialize, Serialize};

/// A single lyric line with its start time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LyricLine {
    /// Seconds from the start of the song
    pub time: u32,
    /// The lyric text
    pub text: String,
}

impl LyricLine {
    pub fn new(time: u32, text: impl Into<String>) -> Self {
        Self {
            time,
            text: text.into(),
        }
    }
}

/// Find the active line for `current_time`.
///
/// The active line is the last line whose interval `[time_i, time_{i+1})`
/// contains `current_time`; the final line's interval is open-ended. Returns
/// `None` when no line has started yet (or `lines` is empty).
pub fn locate(current_time: u32, lines: &[LyricLine]) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.time <= current_time)
        .map(|(i, _)| i)
        .next_back()
}

/// Sticky wrapper around [`locate`].
///
/// When the clock sits before the first line (e.g. right after a seek to 0
/// with a nonzero first timestamp), the previously resolved index is kept so
/// the highlight never regresses to nothing mid-song. Before any line has
/// ever resolved, index 0 is reported as long as lyrics exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct LyricCursor {
    last: Option<usize>,
}

impl LyricCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the active index for `current_time`, updating the sticky state.
    pub fn resolve(&mut self, current_time: u32, lines: &[LyricLine]) -> Option<usize> {
        if lines.is_empty() {
            self.last = None;
            return None;
        }
        if let Some(idx) = locate(current_time, lines) {
            self.last = Some(idx);
        }
        Some(self.last.unwrap_or(0))
    }

    /// Forget the sticky index (song changed).
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> Vec<LyricLine> {
        vec![
            LyricLine::new(4, "first"),
            LyricLine::new(8, "second"),
            LyricLine::new(12, "third"),
        ]
    }

    #[test]
    fn test_locate_interval_bounds() {
        let lines = sheet();
        assert_eq!(locate(4, &lines), Some(0));
        assert_eq!(locate(7, &lines), Some(0));
        assert_eq!(locate(8, &lines), Some(1));
        // Final line holds forever
        assert_eq!(locate(12, &lines), Some(2));
        assert_eq!(locate(500, &lines), Some(2));
    }

    #[test]
    fn test_locate_before_first_line() {
        let lines = sheet();
        assert_eq!(locate(0, &lines), None);
        assert_eq!(locate(3, &lines), None);
    }

    #[test]
    fn test_locate_empty() {
        assert_eq!(locate(10, &[]), None);
    }

    #[test]
    fn test_locate_deterministic() {
        let lines = sheet();
        assert_eq!(locate(9, &lines), locate(9, &lines));
    }

    #[test]
    fn test_cursor_sticks_before_first_line() {
        let lines = sheet();
        let mut cursor = LyricCursor::new();

        // Nothing resolved yet: default to the first line
        assert_eq!(cursor.resolve(0, &lines), Some(0));

        // Advance into the third line, then seek back before the first
        assert_eq!(cursor.resolve(13, &lines), Some(2));
        assert_eq!(cursor.resolve(1, &lines), Some(2));
    }

    #[test]
    fn test_cursor_reset_on_song_change() {
        let lines = sheet();
        let mut cursor = LyricCursor::new();
        cursor.resolve(13, &lines);
        cursor.reset();
        assert_eq!(cursor.resolve(0, &lines), Some(0));
    }

    #[test]
    fn test_cursor_empty_lyrics() {
        let mut cursor = LyricCursor::new();
        assert_eq!(cursor.resolve(10, &[]), None);
    }
}
