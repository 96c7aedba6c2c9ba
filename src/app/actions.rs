use super::state::SearchFocus;

#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    Resize,

    // Navigation
    ShowLibrary,
    ShowLyrics,
    Back,

    // List movement (context-sensitive: library grid, song list, menus)
    ListUp,
    ListDown,
    GoTop,
    GoBottom,
    Activate,

    // Text entry (routed to the search box or the modal name field)
    InputChar(char),
    Backspace,
    ClearInput,
    SetSearchFocus(SearchFocus),

    // Playback
    TogglePause,
    NextSong,
    PrevSong,
    SeekForward,
    SeekBack,
    SeekFraction(f64),
    ToggleLike,

    // Playlist CRUD
    OpenCreateModal,
    OpenEditModal,
    CloseModal,
    FormFieldNext,
    FormFieldPrev,
    FormPickPrev,
    FormPickNext,
    SubmitModal,
    ToggleHeaderMenu,
    ToggleSongMenu,
    RequestRemoveSong,
    ConfirmRemoveSong,
    RequestDeletePlaylist,
    ConfirmDeletePlaylist,
    CancelDialog,

    // Translation overlay
    Translate,
    ToggleLanguageMenu,
    LanguageMenuUp,
    LanguageMenuDown,
    LanguageMenuSelect,
}
