use std::collections::HashSet;

use crate::catalog::{FolderColor, FolderIcon, Playlist, Song};
use crate::library::PlaylistStore;
use crate::lyrics::LyricCursor;
use crate::playback::PlaybackClock;
use crate::translate::TranslationOverlay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Library,
    PlaylistDetail,
    LyricsFullScreen,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::Library => "library",
            View::PlaylistDetail => "playlist_detail",
            View::LyricsFullScreen => "lyrics",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "library" => Some(View::Library),
            "playlist_detail" => Some(View::PlaylistDetail),
            "lyrics" => Some(View::LyricsFullScreen),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    Input,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::of(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::of(message, ToastKind::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::of(message, ToastKind::Info)
    }

    fn of(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

/// Which part of the create/edit modal the cursor is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Icon,
    Color,
}

/// Form state for the playlist create/edit modal
#[derive(Debug, Clone)]
pub struct PlaylistForm {
    /// `Some(id)` while editing an existing playlist
    pub editing: Option<String>,
    pub name: String,
    pub icon_idx: usize,
    pub color_idx: usize,
    pub field: FormField,
}

impl PlaylistForm {
    pub fn create() -> Self {
        Self {
            editing: None,
            name: String::new(),
            icon_idx: 0,
            color_idx: 0,
            field: FormField::Name,
        }
    }

    pub fn edit(playlist: &Playlist) -> Self {
        Self {
            editing: Some(playlist.id.clone()),
            name: playlist.name.clone(),
            icon_idx: FolderIcon::ALL
                .iter()
                .position(|i| *i == playlist.icon)
                .unwrap_or(0),
            color_idx: FolderColor::ALL
                .iter()
                .position(|c| *c == playlist.color)
                .unwrap_or(0),
            field: FormField::Name,
        }
    }

    pub fn icon(&self) -> FolderIcon {
        FolderIcon::ALL[self.icon_idx % FolderIcon::ALL.len()]
    }

    pub fn color(&self) -> FolderColor {
        FolderColor::ALL[self.color_idx % FolderColor::ALL.len()]
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub tick: u64,

    pub view: View,
    pub store: PlaylistStore,

    // Library grid
    pub playlist_cursor: usize,

    // Playlist detail
    pub selected_playlist: Option<String>,
    pub song_cursor: usize,
    pub search_query: String,
    pub search_focus: SearchFocus,

    // Playback
    pub current_song: Option<Song>,
    pub clock: PlaybackClock,
    pub lyric_cursor: LyricCursor,
    pub active_line: Option<usize>,
    pub liked: HashSet<String>,

    // Translation
    pub overlay: TranslationOverlay,
    pub language_idx: usize,
    pub language_menu_open: bool,
    pub language_menu_cursor: usize,

    // Modals and menus
    pub playlist_form: Option<PlaylistForm>,
    pub confirm_remove_song: Option<String>,
    pub confirm_delete_playlist: bool,
    pub header_menu_open: bool,
    pub song_menu_open: bool,

    pub toast: Option<Toast>,
    pub status: String,
}

impl AppState {
    pub fn new(store: PlaylistStore) -> Self {
        Self {
            should_quit: false,
            tick: 0,
            view: View::Library,
            store,
            playlist_cursor: 0,
            selected_playlist: None,
            song_cursor: 0,
            search_query: String::new(),
            search_focus: SearchFocus::List,
            current_song: None,
            clock: PlaybackClock::new(),
            lyric_cursor: LyricCursor::new(),
            active_line: None,
            liked: HashSet::new(),
            overlay: TranslationOverlay::new(),
            language_idx: 0,
            language_menu_open: false,
            language_menu_cursor: 0,
            playlist_form: None,
            confirm_remove_song: None,
            confirm_delete_playlist: false,
            header_menu_open: false,
            song_menu_open: false,
            toast: None,
            status: String::new(),
        }
    }

    pub fn selected_playlist(&self) -> Option<&Playlist> {
        self.selected_playlist
            .as_deref()
            .and_then(|id| self.store.get(id))
    }

    /// The song list next/prev walks through: the open playlist, falling
    /// back to the first playlist.
    pub fn active_song_list(&self) -> &[Song] {
        if let Some(p) = self.selected_playlist() {
            return &p.songs;
        }
        self.store
            .playlists()
            .first()
            .map(|p| p.songs.as_slice())
            .unwrap_or(&[])
    }

    /// Indices into the open playlist's songs matching the search query.
    pub fn filtered_songs(&self) -> Vec<usize> {
        let Some(playlist) = self.selected_playlist() else {
            return Vec::new();
        };
        let query = self.search_query.to_lowercase();
        playlist
            .songs
            .iter()
            .enumerate()
            .filter(|(_, s)| {
                query.is_empty()
                    || s.title.to_lowercase().contains(&query)
                    || s.artist.to_lowercase().contains(&query)
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Recompute the active lyric line from the clock.
    pub fn refresh_active_line(&mut self) {
        let time = self.clock.current_time();
        self.active_line = match &self.current_song {
            Some(song) => self.lyric_cursor.resolve(time, &song.lyrics),
            None => None,
        };
    }

    pub fn is_liked(&self) -> bool {
        self.current_song
            .as_ref()
            .is_some_and(|s| self.liked.contains(&s.id))
    }
}
