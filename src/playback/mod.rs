//! Simulated playback clock
//!
//! No audio is decoded; a 1 Hz tick fed by the session's timer task advances
//! this counter while playing. Reaching the song's duration wraps back to 0
//! (the song loops rather than stopping).

use crate::catalog::Song;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlaybackClock {
    current_time: u32,
    playing: bool,
    duration: u32,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one second of simulated playback. No effect while paused or
    /// with no song loaded.
    pub fn tick(&mut self) {
        if !self.playing || self.duration == 0 {
            return;
        }
        self.current_time += 1;
        if self.current_time >= self.duration {
            self.current_time = 0;
        }
    }

    /// Jump to `time`. Callers are expected to stay within `[0, duration]`;
    /// the value is taken as-is. Play/pause state is untouched.
    pub fn seek(&mut self, time: u32) {
        self.current_time = time;
    }

    /// Jump to a fraction of the song (progress-bar clicks, number keys).
    pub fn seek_fraction(&mut self, fraction: f64) {
        let f = fraction.clamp(0.0, 1.0);
        self.current_time = (f64::from(self.duration) * f) as u32;
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Switch to a new song: rewind to 0 and start playing immediately.
    pub fn load_song(&mut self, song: &Song) {
        self.current_time = 0;
        self.duration = song.duration;
        self.playing = true;
    }

    pub fn current_time(&self) -> u32 {
        self.current_time
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Progress in `[0, 1]` for the progress bar.
    pub fn progress(&self) -> f64 {
        if self.duration == 0 {
            return 0.0;
        }
        (f64::from(self.current_time) / f64::from(self.duration)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(duration: u32) -> PlaybackClock {
        let mut c = PlaybackClock::new();
        c.load_song(&crate::catalog::Song {
            id: "s".into(),
            title: "Song".into(),
            artist: "Artist".into(),
            album: None,
            duration,
            lyrics: Vec::new(),
        });
        c
    }

    #[test]
    fn test_tick_advances_while_playing() {
        let mut c = clock(200);
        c.tick();
        c.tick();
        assert_eq!(c.current_time(), 2);
    }

    #[test]
    fn test_tick_is_noop_while_paused() {
        let mut c = clock(200);
        c.set_playing(false);
        c.tick();
        assert_eq!(c.current_time(), 0);
    }

    #[test]
    fn test_clock_wraps_at_duration() {
        let mut c = clock(200);
        for _ in 0..200 {
            c.tick();
        }
        // Looped back to the start, not stopped at 200
        assert_eq!(c.current_time(), 0);
        assert!(c.is_playing());
    }

    #[test]
    fn test_seek_does_not_touch_playing() {
        let mut c = clock(200);
        c.set_playing(false);
        c.seek(120);
        assert_eq!(c.current_time(), 120);
        assert!(!c.is_playing());

        // Seek is visible to the next tick
        c.set_playing(true);
        c.tick();
        assert_eq!(c.current_time(), 121);
    }

    #[test]
    fn test_seek_fraction() {
        let mut c = clock(200);
        c.seek_fraction(0.5);
        assert_eq!(c.current_time(), 100);
        c.seek_fraction(2.0);
        assert_eq!(c.current_time(), 200);
    }

    #[test]
    fn test_load_song_restarts_playback() {
        let mut c = clock(200);
        c.seek(150);
        c.set_playing(false);
        c.load_song(&crate::catalog::Song {
            id: "other".into(),
            title: "Other".into(),
            artist: "Artist".into(),
            album: None,
            duration: 90,
            lyrics: Vec::new(),
        });
        assert_eq!(c.current_time(), 0);
        assert_eq!(c.duration(), 90);
        assert!(c.is_playing());
    }

    #[test]
    fn test_tick_without_song_is_noop() {
        let mut c = PlaybackClock::new();
        c.set_playing(true);
        c.tick();
        assert_eq!(c.current_time(), 0);
    }
}
