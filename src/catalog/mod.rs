//! Built-in song catalog
//!
//! Supplies the immutable playlists, songs and lyric sheets the player works
//! with. A real deployment would replace this with a content service; the
//! rest of the code only sees the model types.

use crate::lyrics::LyricLine;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    /// Length in seconds
    pub duration: u32,
    pub lyrics: Vec<LyricLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FolderIcon {
    Heart,
    Moon,
    Coffee,
    Sun,
    TrendingUp,
    Headphones,
    Cloud,
    Clock,
}

impl FolderIcon {
    pub const ALL: [FolderIcon; 8] = [
        FolderIcon::Heart,
        FolderIcon::Moon,
        FolderIcon::Coffee,
        FolderIcon::Sun,
        FolderIcon::TrendingUp,
        FolderIcon::Headphones,
        FolderIcon::Cloud,
        FolderIcon::Clock,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FolderIcon::Heart => "Heart",
            FolderIcon::Moon => "Moon",
            FolderIcon::Coffee => "Coffee",
            FolderIcon::Sun => "Sun",
            FolderIcon::TrendingUp => "Trending",
            FolderIcon::Headphones => "Headphones",
            FolderIcon::Cloud => "Cloud",
            FolderIcon::Clock => "Clock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FolderColor {
    Pink,
    Blue,
    Purple,
    Amber,
    Red,
    Teal,
    Violet,
    Slate,
}

impl FolderColor {
    pub const ALL: [FolderColor; 8] = [
        FolderColor::Pink,
        FolderColor::Blue,
        FolderColor::Purple,
        FolderColor::Amber,
        FolderColor::Red,
        FolderColor::Teal,
        FolderColor::Violet,
        FolderColor::Slate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FolderColor::Pink => "Pink",
            FolderColor::Blue => "Blue",
            FolderColor::Purple => "Purple",
            FolderColor::Amber => "Amber",
            FolderColor::Red => "Red",
            FolderColor::Teal => "Teal",
            FolderColor::Violet => "Violet",
            FolderColor::Slate => "Slate",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub icon: FolderIcon,
    pub color: FolderColor,
    pub songs: Vec<Song>,
    pub song_count: usize,
}

impl Playlist {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: FolderIcon,
        color: FolderColor,
        songs: Vec<Song>,
    ) -> Self {
        let song_count = songs.len();
        Self {
            id: id.into(),
            name: name.into(),
            icon,
            color,
            songs,
            song_count,
        }
    }
}

/// The shared demo lyric sheet used by the seed songs.
fn demo_lyrics() -> Vec<LyricLine> {
    vec![
        LyricLine::new(0, "Walking down the street"),
        LyricLine::new(4, "Thinking of the ways we meet"),
        LyricLine::new(8, "And the sky turns into gold"),
        LyricLine::new(12, "Like a story once was told"),
        LyricLine::new(16, "I can feel the rhythm slow"),
        LyricLine::new(20, "Watching as the flowers grow"),
        LyricLine::new(24, "Every beat is like a drum"),
        LyricLine::new(28, "Waiting for the day to come"),
        LyricLine::new(32, "In the whispers of the wind"),
        LyricLine::new(36, "Where the memories begin"),
        LyricLine::new(40, "Can you hear the melody?"),
        LyricLine::new(44, "Singing songs for you and me"),
    ]
}

fn song(id: &str, title: &str, artist: &str, duration: u32) -> Song {
    Song {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        album: None,
        duration,
        lyrics: demo_lyrics(),
    }
}

fn seed_songs() -> Vec<Song> {
    vec![
        song("1", "Golden Hour", "JVKE", 204),
        song("2", "Midnight City", "M83", 243),
        song("3", "Blinding Lights", "The Weeknd", 200),
        song("4", "Ocean Eyes", "Billie Eilish", 200),
        song("5", "Starboy", "The Weeknd", 230),
    ]
}

/// Seed playlists for a fresh session.
pub fn seed() -> Vec<Playlist> {
    let songs = seed_songs();
    vec![
        Playlist::new(
            "p1",
            "Chill Vibes",
            FolderIcon::Coffee,
            FolderColor::Amber,
            songs.clone(),
        ),
        Playlist::new(
            "p2",
            "Evening Stars",
            FolderIcon::Moon,
            FolderColor::Blue,
            songs[..3].to_vec(),
        ),
        Playlist::new(
            "p3",
            "Summer Hits",
            FolderIcon::Sun,
            FolderColor::Red,
            songs.clone(),
        ),
        Playlist::new(
            "p4",
            "Coding Flow",
            FolderIcon::Headphones,
            FolderColor::Purple,
            songs.clone(),
        ),
        Playlist::new(
            "p5",
            "Daily Mix",
            FolderIcon::Clock,
            FolderColor::Slate,
            songs.clone(),
        ),
        Playlist::new(
            "p6",
            "Favorites",
            FolderIcon::Heart,
            FolderColor::Pink,
            songs.clone(),
        ),
        Playlist::new(
            "p7",
            "On the Go",
            FolderIcon::TrendingUp,
            FolderColor::Teal,
            songs.clone(),
        ),
        Playlist::new(
            "p8",
            "Cloudy Days",
            FolderIcon::Cloud,
            FolderColor::Violet,
            songs,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_lyrics_are_time_ordered() {
        for playlist in seed() {
            for song in &playlist.songs {
                assert!(!song.lyrics.is_empty());
                for pair in song.lyrics.windows(2) {
                    assert!(pair[0].time < pair[1].time, "timestamps must ascend");
                }
            }
        }
    }

    #[test]
    fn test_seed_counts_match_songs() {
        for playlist in seed() {
            assert_eq!(playlist.song_count, playlist.songs.len());
        }
    }
}
