pub mod actions;
pub mod events;
pub mod state;

use std::path::PathBuf;

use crate::catalog;
use crate::config::Config;
use crate::input;
use crate::library::PlaylistStore;
use crate::translate::{ApplyOutcome, RequestDecision, TranslateClient, SUPPORTED_LANGUAGES};
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, NetEvent};
use state::{AppState, FormField, PlaylistForm, SearchFocus, Toast, View};
use tokio::sync::mpsc;

pub struct App {
    cfg: Config,
    config_path: PathBuf,
    state: AppState,
    translator: TranslateClient,
}

impl App {
    pub fn new(cfg: Config, config_path: PathBuf) -> anyhow::Result<Self> {
        let translator = TranslateClient::new(
            cfg.translator.base_url.as_deref(),
            cfg.translator.api_key.clone(),
        );

        let mut state = AppState::new(PlaylistStore::new(catalog::seed()));

        // Boot with the first song loaded but paused, so the lyrics view has
        // something to show before any selection.
        if let Some(song) = state
            .store
            .playlists()
            .first()
            .and_then(|p| p.songs.first())
            .cloned()
        {
            state.clock.load_song(&song);
            state.clock.set_playing(false);
            state.current_song = Some(song);
            state.refresh_active_line();
        }

        // Restore last view where it makes sense without a live selection.
        if let Some(name) = &cfg.ui.last_view
            && let Some(view) = View::from_name(name)
            && view != View::PlaylistDetail
        {
            state.view = view;
        }

        Ok(Self {
            cfg,
            config_path,
            state,
            translator,
        })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);
        spawn_tick_task(tx.clone());

        // First draw
        tui::draw(terminal, &self.cfg, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                }
                Event::Tick => self.handle_tick(),
                Event::Net(ne) => self.handle_net(ne),
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &self.cfg, &mut self.state)?;
        }

        self.save_state_on_quit();

        Ok(())
    }

    fn save_state_on_quit(&mut self) {
        self.cfg.ui.last_view = Some(self.state.view.as_str().to_string());
        let _ = crate::config::save(&self.cfg, Some(&self.config_path));
    }

    fn handle_tick(&mut self) {
        self.state.tick += 1;
        self.state.clock.tick();
        self.state.refresh_active_line();
    }

    fn handle_net(&mut self, ne: NetEvent) {
        match ne {
            NetEvent::TranslationReady {
                song_id,
                language,
                lines,
            } => {
                let expected = self
                    .state
                    .current_song
                    .as_ref()
                    .map(|s| s.lyrics.len())
                    .unwrap_or(0);
                match self
                    .state
                    .overlay
                    .apply_success(&song_id, &language, lines, expected)
                {
                    ApplyOutcome::Shown => {
                        self.state.status = format!("Showing {language} translation");
                    }
                    ApplyOutcome::Stale => {
                        tracing::debug!(%song_id, %language, "discarding stale translation");
                    }
                    ApplyOutcome::ShapeMismatch { got, expected } => {
                        tracing::warn!(
                            %song_id,
                            %language,
                            got,
                            expected,
                            "translation line count mismatch, response rejected"
                        );
                        self.state.toast =
                            Some(Toast::info("Translation unavailable for this song"));
                    }
                }
            }
            NetEvent::TranslationFailed {
                song_id,
                language,
                error,
            } => {
                if self.state.overlay.apply_error(&song_id, &language) {
                    tracing::warn!(%song_id, %language, %error, "translation request failed");
                    self.state.toast = Some(Toast::error(format!("Translation failed: {error}")));
                } else {
                    tracing::debug!(%song_id, %language, "ignoring error from superseded request");
                }
            }
        }
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::Translate => self.request_translation(tx),
            Action::LanguageMenuSelect => {
                self.state.language_idx =
                    self.state.language_menu_cursor % SUPPORTED_LANGUAGES.len();
                self.state.language_menu_open = false;
                self.request_translation(tx);
            }
            _ => self.reduce(action),
        }
    }

    fn request_translation(&mut self, tx: &mpsc::Sender<Event>) {
        let Some(song) = self.state.current_song.clone() else {
            return;
        };
        if song.lyrics.is_empty() {
            self.state.toast = Some(Toast::info("No lyrics to translate"));
            return;
        }

        let language = SUPPORTED_LANGUAGES[self.state.language_idx % SUPPORTED_LANGUAGES.len()].name;
        match self.state.overlay.request(&song.id, language) {
            RequestDecision::Fetch => {
                self.state.status = format!("Translating to {language}...");

                let translator = self.translator.clone();
                let lines: Vec<String> = song.lyrics.iter().map(|l| l.text.clone()).collect();
                let song_id = song.id.clone();
                let language = language.to_string();
                let tx = tx.clone();

                tokio::spawn(async move {
                    match translator.translate(&lines, &language).await {
                        Ok(lines) => {
                            let _ = tx
                                .send(Event::Net(NetEvent::TranslationReady {
                                    song_id,
                                    language,
                                    lines,
                                }))
                                .await;
                        }
                        Err(e) => {
                            let _ = tx
                                .send(Event::Net(NetEvent::TranslationFailed {
                                    song_id,
                                    language,
                                    error: format!("{e:#}"),
                                }))
                                .await;
                        }
                    }
                });
            }
            RequestDecision::ToggledOn => {
                self.state.status = format!("Showing {language} translation");
            }
            RequestDecision::ToggledOff => {
                self.state.status = "Translation hidden".into();
            }
            RequestDecision::AlreadyRequesting => {}
        }
    }

    fn play_song(&mut self, song: crate::catalog::Song) {
        self.state.overlay.song_changed();
        self.state.lyric_cursor.reset();
        self.state.clock.load_song(&song);
        self.state.status = format!("Playing: {}", song.title);
        self.state.current_song = Some(song);
        self.state.refresh_active_line();
    }

    fn play_relative(&mut self, step: isize) {
        let list = self.state.active_song_list();
        if list.is_empty() {
            return;
        }
        let len = list.len() as isize;
        let current = self
            .state
            .current_song
            .as_ref()
            .and_then(|song| list.iter().position(|s| s.id == song.id))
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        let song = list[next].clone();
        self.play_song(song);
    }

    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::Resize => {}

            Action::ShowLibrary => {
                self.state.view = View::Library;
                self.state.header_menu_open = false;
                self.state.song_menu_open = false;
                self.state.language_menu_open = false;
            }
            Action::ShowLyrics => {
                if self.state.current_song.is_some() {
                    self.state.view = View::LyricsFullScreen;
                }
            }
            Action::Back => match self.state.view {
                View::LyricsFullScreen => {
                    self.state.language_menu_open = false;
                    self.state.view = if self.state.selected_playlist.is_some() {
                        View::PlaylistDetail
                    } else {
                        View::Library
                    };
                }
                View::PlaylistDetail => {
                    self.state.header_menu_open = false;
                    self.state.song_menu_open = false;
                    self.state.view = View::Library;
                }
                View::Library => {}
            },

            Action::ListUp => match self.state.view {
                View::Library => {
                    self.state.playlist_cursor = self.state.playlist_cursor.saturating_sub(1);
                }
                View::PlaylistDetail => {
                    self.state.song_cursor = self.state.song_cursor.saturating_sub(1);
                }
                View::LyricsFullScreen => {}
            },
            Action::ListDown => match self.state.view {
                View::Library => {
                    let max = self.state.store.len().saturating_sub(1);
                    self.state.playlist_cursor = (self.state.playlist_cursor + 1).min(max);
                }
                View::PlaylistDetail => {
                    let max = self.state.filtered_songs().len().saturating_sub(1);
                    self.state.song_cursor = (self.state.song_cursor + 1).min(max);
                }
                View::LyricsFullScreen => {}
            },
            Action::GoTop => match self.state.view {
                View::Library => self.state.playlist_cursor = 0,
                View::PlaylistDetail => self.state.song_cursor = 0,
                View::LyricsFullScreen => {}
            },
            Action::GoBottom => match self.state.view {
                View::Library => {
                    self.state.playlist_cursor = self.state.store.len().saturating_sub(1);
                }
                View::PlaylistDetail => {
                    self.state.song_cursor = self.state.filtered_songs().len().saturating_sub(1);
                }
                View::LyricsFullScreen => {}
            },

            Action::Activate => match self.state.view {
                View::Library => {
                    if let Some(p) = self
                        .state
                        .store
                        .playlists()
                        .get(self.state.playlist_cursor)
                    {
                        self.state.selected_playlist = Some(p.id.clone());
                        self.state.song_cursor = 0;
                        self.state.search_query.clear();
                        self.state.search_focus = SearchFocus::List;
                        self.state.view = View::PlaylistDetail;
                    }
                }
                View::PlaylistDetail => {
                    let filtered = self.state.filtered_songs();
                    let song = filtered
                        .get(self.state.song_cursor)
                        .and_then(|&i| self.state.selected_playlist().and_then(|p| p.songs.get(i)))
                        .cloned();
                    if let Some(song) = song {
                        self.play_song(song);
                        self.state.view = View::LyricsFullScreen;
                    }
                }
                View::LyricsFullScreen => {}
            },

            Action::InputChar(c) => {
                if let Some(form) = &mut self.state.playlist_form {
                    if form.field == FormField::Name {
                        form.name.push(c);
                    }
                } else if self.state.view == View::PlaylistDetail
                    && self.state.search_focus == SearchFocus::Input
                {
                    self.state.search_query.push(c);
                    self.state.song_cursor = 0;
                }
            }
            Action::Backspace => {
                if let Some(form) = &mut self.state.playlist_form {
                    if form.field == FormField::Name {
                        form.name.pop();
                    }
                } else if self.state.search_focus == SearchFocus::Input {
                    self.state.search_query.pop();
                    self.state.song_cursor = 0;
                }
            }
            Action::ClearInput => {
                if self.state.playlist_form.is_none() {
                    self.state.search_query.clear();
                    self.state.song_cursor = 0;
                }
            }
            Action::SetSearchFocus(f) => self.state.search_focus = f,

            Action::TogglePause => {
                if self.state.current_song.is_some() {
                    self.state.clock.toggle();
                }
            }
            Action::NextSong => self.play_relative(1),
            Action::PrevSong => self.play_relative(-1),
            Action::SeekForward => {
                let t = (self.state.clock.current_time() + 5).min(self.state.clock.duration());
                self.state.clock.seek(t);
                self.state.refresh_active_line();
            }
            Action::SeekBack => {
                let t = self.state.clock.current_time().saturating_sub(5);
                self.state.clock.seek(t);
                self.state.refresh_active_line();
            }
            Action::SeekFraction(f) => {
                self.state.clock.seek_fraction(f);
                self.state.refresh_active_line();
            }
            Action::ToggleLike => {
                if let Some(song) = &self.state.current_song {
                    if self.state.liked.remove(&song.id) {
                        self.state.toast =
                            Some(Toast::info(format!("Removed \"{}\" from favorites", song.title)));
                    } else {
                        self.state.liked.insert(song.id.clone());
                        self.state.toast =
                            Some(Toast::success(format!("Added \"{}\" to favorites", song.title)));
                    }
                }
            }

            Action::OpenCreateModal => {
                self.state.header_menu_open = false;
                self.state.playlist_form = Some(PlaylistForm::create());
            }
            Action::OpenEditModal => {
                self.state.header_menu_open = false;
                let form = self.state.selected_playlist().map(PlaylistForm::edit);
                if form.is_some() {
                    self.state.playlist_form = form;
                }
            }
            Action::CloseModal => self.state.playlist_form = None,
            Action::FormFieldNext => {
                if let Some(form) = &mut self.state.playlist_form {
                    form.field = match form.field {
                        FormField::Name => FormField::Icon,
                        FormField::Icon => FormField::Color,
                        FormField::Color => FormField::Name,
                    };
                }
            }
            Action::FormFieldPrev => {
                if let Some(form) = &mut self.state.playlist_form {
                    form.field = match form.field {
                        FormField::Name => FormField::Color,
                        FormField::Icon => FormField::Name,
                        FormField::Color => FormField::Icon,
                    };
                }
            }
            Action::FormPickPrev => {
                if let Some(form) = &mut self.state.playlist_form {
                    match form.field {
                        FormField::Icon => {
                            form.icon_idx = form
                                .icon_idx
                                .checked_sub(1)
                                .unwrap_or(crate::catalog::FolderIcon::ALL.len() - 1);
                        }
                        FormField::Color => {
                            form.color_idx = form
                                .color_idx
                                .checked_sub(1)
                                .unwrap_or(crate::catalog::FolderColor::ALL.len() - 1);
                        }
                        FormField::Name => {}
                    }
                }
            }
            Action::FormPickNext => {
                if let Some(form) = &mut self.state.playlist_form {
                    match form.field {
                        FormField::Icon => {
                            form.icon_idx =
                                (form.icon_idx + 1) % crate::catalog::FolderIcon::ALL.len();
                        }
                        FormField::Color => {
                            form.color_idx =
                                (form.color_idx + 1) % crate::catalog::FolderColor::ALL.len();
                        }
                        FormField::Name => {}
                    }
                }
            }
            Action::SubmitModal => self.submit_playlist_form(),

            Action::ToggleHeaderMenu => {
                if self.state.view == View::PlaylistDetail {
                    self.state.header_menu_open = !self.state.header_menu_open;
                    self.state.song_menu_open = false;
                }
            }
            Action::ToggleSongMenu => {
                if self.state.view == View::PlaylistDetail {
                    self.state.song_menu_open = !self.state.song_menu_open;
                    self.state.header_menu_open = false;
                }
            }
            Action::RequestRemoveSong => {
                let filtered = self.state.filtered_songs();
                let song_id = filtered
                    .get(self.state.song_cursor)
                    .and_then(|&i| self.state.selected_playlist().and_then(|p| p.songs.get(i)))
                    .map(|s| s.id.clone());
                if let Some(id) = song_id {
                    self.state.song_menu_open = false;
                    self.state.confirm_remove_song = Some(id);
                }
            }
            Action::ConfirmRemoveSong => {
                if let (Some(pid), Some(sid)) = (
                    self.state.selected_playlist.clone(),
                    self.state.confirm_remove_song.take(),
                ) {
                    match self.state.store.remove_song(&pid, &sid) {
                        Ok(()) => {
                            self.state.toast = Some(Toast::success("Song removed from playlist"));
                            let max = self.state.filtered_songs().len().saturating_sub(1);
                            self.state.song_cursor = self.state.song_cursor.min(max);
                        }
                        Err(e) => {
                            self.state.toast = Some(Toast::error(format!("{e:#}")));
                        }
                    }
                }
            }
            Action::RequestDeletePlaylist => {
                if self.state.selected_playlist.is_some() {
                    self.state.header_menu_open = false;
                    self.state.confirm_delete_playlist = true;
                }
            }
            Action::ConfirmDeletePlaylist => {
                self.state.confirm_delete_playlist = false;
                if let Some(id) = self.state.selected_playlist.take() {
                    if let Some(p) = self.state.store.delete(&id) {
                        self.state.toast =
                            Some(Toast::success(format!("Playlist \"{}\" deleted", p.name)));
                    }
                    self.state.playlist_cursor = self
                        .state
                        .playlist_cursor
                        .min(self.state.store.len().saturating_sub(1));
                    self.state.view = View::Library;
                }
            }
            Action::CancelDialog => {
                self.state.confirm_remove_song = None;
                self.state.confirm_delete_playlist = false;
            }

            Action::ToggleLanguageMenu => {
                self.state.language_menu_open = !self.state.language_menu_open;
                self.state.language_menu_cursor = self.state.language_idx;
            }
            Action::LanguageMenuUp => {
                self.state.language_menu_cursor =
                    self.state.language_menu_cursor.saturating_sub(1);
            }
            Action::LanguageMenuDown => {
                self.state.language_menu_cursor = (self.state.language_menu_cursor + 1)
                    .min(SUPPORTED_LANGUAGES.len().saturating_sub(1));
            }

            // Handled in handle_action (they need the event sender)
            Action::Translate | Action::LanguageMenuSelect => {}
        }
    }

    fn submit_playlist_form(&mut self) {
        let Some(form) = self.state.playlist_form.clone() else {
            return;
        };

        let result = match &form.editing {
            Some(id) => self
                .state
                .store
                .edit(id, &form.name, form.icon(), form.color())
                .map(|()| "Playlist updated successfully!"),
            None => self
                .state
                .store
                .create(&form.name, form.icon(), form.color())
                .map(|_| "Playlist created successfully!"),
        };

        match result {
            Ok(msg) => {
                self.state.toast = Some(Toast::success(msg));
                self.state.playlist_form = None;
            }
            Err(e) => {
                // Keep the modal open so the name can be fixed
                self.state.toast = Some(Toast::error(format!("{e:#}")));
            }
        }
    }
}

/// Drive the playback clock: one event per second of wall-clock time. The
/// clock itself decides whether a tick has effect, so pause does not tear
/// this down.
fn spawn_tick_task(tx: mpsc::Sender<Event>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(Event::Tick).await.is_err() {
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ToastKind;

    fn app() -> App {
        App::new(Config::default(), std::path::PathBuf::from("petal-test.toml"))
            .expect("app should construct")
    }

    #[test]
    fn test_create_playlist_validation_emits_one_error_toast() {
        let mut app = app();
        let before = app.state.store.len();

        app.reduce(Action::OpenCreateModal);
        app.reduce(Action::InputChar(' '));
        app.reduce(Action::InputChar(' '));
        app.reduce(Action::SubmitModal);

        assert_eq!(app.state.store.len(), before);
        let toast = app.state.toast.take().expect("one toast emitted");
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(app.state.toast.is_none());
        // The modal stays open so the name can be corrected
        assert!(app.state.playlist_form.is_some());
    }

    #[test]
    fn test_create_playlist_through_form() {
        let mut app = app();
        let before = app.state.store.len();

        app.reduce(Action::OpenCreateModal);
        for c in "Late Nights".chars() {
            app.reduce(Action::InputChar(c));
        }
        app.reduce(Action::FormFieldNext);
        app.reduce(Action::FormPickNext);
        app.reduce(Action::SubmitModal);

        assert_eq!(app.state.store.len(), before + 1);
        assert!(app.state.playlist_form.is_none());
        let toast = app.state.toast.take().expect("success toast");
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn test_activate_song_enters_lyrics_and_starts_playback() {
        let mut app = app();

        app.reduce(Action::Activate); // open first playlist
        assert_eq!(app.state.view, View::PlaylistDetail);

        app.reduce(Action::ListDown);
        app.reduce(Action::Activate); // play second song
        assert_eq!(app.state.view, View::LyricsFullScreen);
        assert!(app.state.clock.is_playing());
        assert_eq!(app.state.clock.current_time(), 0);
        assert_eq!(
            app.state.current_song.as_ref().map(|s| s.id.as_str()),
            Some("2")
        );
    }

    #[test]
    fn test_stale_translation_dropped_after_song_change() {
        let mut app = app();
        let first = app.state.current_song.clone().expect("song loaded at boot");
        let line_count = first.lyrics.len();

        app.state.overlay.request(&first.id, "Spanish");

        // Song changes while the request is in flight
        app.reduce(Action::NextSong);

        app.handle_net(NetEvent::TranslationReady {
            song_id: first.id,
            language: "Spanish".into(),
            lines: vec![String::from("hola"); line_count],
        });

        assert!(!app.state.overlay.is_showing());
        assert!(!app.state.overlay.has_cached());
    }

    #[test]
    fn test_shape_mismatch_surfaces_info_toast() {
        let mut app = app();
        let song = app.state.current_song.clone().expect("song loaded at boot");
        let line_count = song.lyrics.len();

        app.state.overlay.request(&song.id, "French");
        app.handle_net(NetEvent::TranslationReady {
            song_id: song.id.clone(),
            language: "French".into(),
            lines: vec![String::from("ligne"); line_count - 1],
        });

        assert!(!app.state.overlay.is_showing());
        let toast = app.state.toast.take().expect("info toast emitted");
        assert_eq!(toast.kind, ToastKind::Info);
    }

    #[test]
    fn test_transport_failure_surfaces_error_toast() {
        let mut app = app();
        let song = app.state.current_song.clone().expect("song loaded at boot");

        app.state.overlay.request(&song.id, "German");
        app.handle_net(NetEvent::TranslationFailed {
            song_id: song.id,
            language: "German".into(),
            error: "connection refused".into(),
        });

        assert!(!app.state.overlay.is_showing());
        let toast = app.state.toast.take().expect("error toast emitted");
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn test_next_prev_wrap_in_active_list() {
        let mut app = app();
        let len = app.state.active_song_list().len();
        assert!(len > 1);

        app.reduce(Action::PrevSong);
        let last = app.state.active_song_list().last().map(|s| s.id.clone());
        assert_eq!(
            app.state.current_song.as_ref().map(|s| s.id.clone()),
            last
        );

        app.reduce(Action::NextSong);
        let first = app.state.active_song_list().first().map(|s| s.id.clone());
        assert_eq!(
            app.state.current_song.as_ref().map(|s| s.id.clone()),
            first
        );
    }
}
