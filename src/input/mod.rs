use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, SearchFocus, View};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        let _ = mouse_enabled;
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                match event::read() {
                    Ok(CtEvent::Key(k)) => {
                        if k.kind == KeyEventKind::Press
                            && tx.blocking_send(Event::Input(InputEvent::Key(k))).is_err()
                        {
                            break;
                        }
                    }
                    Ok(CtEvent::Mouse(m)) => {
                        if tx.blocking_send(Event::Input(InputEvent::Mouse(m))).is_err() {
                            break;
                        }
                    }
                    Ok(CtEvent::Resize(_, _)) => {
                        if tx
                            .blocking_send(Event::Input(InputEvent::Resize))
                            .is_err()
                        {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => {}
                }
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollUp => Some(Action::ListUp),
            MouseEventKind::ScrollDown => Some(Action::ListDown),
            _ => None,
        },
        InputEvent::Key(k) => {
            // Dialogs and menus capture the keyboard first
            if state.playlist_form.is_some() {
                return handle_form(k);
            }
            if state.confirm_remove_song.is_some() || state.confirm_delete_playlist {
                return handle_confirm(state, k);
            }
            if state.language_menu_open {
                return handle_language_menu(k);
            }
            match state.view {
                View::Library => handle_library(k),
                View::PlaylistDetail => handle_detail(state, k),
                View::LyricsFullScreen => handle_lyrics(k),
            }
        }
    }
}

fn handle_form(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc => Some(Action::CloseModal),
        KeyCode::Enter => Some(Action::SubmitModal),
        KeyCode::Tab | KeyCode::Down => Some(Action::FormFieldNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FormFieldPrev),
        KeyCode::Left => Some(Action::FormPickPrev),
        KeyCode::Right => Some(Action::FormPickNext),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

fn handle_confirm(state: &AppState, k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            if state.confirm_remove_song.is_some() {
                Some(Action::ConfirmRemoveSong)
            } else {
                Some(Action::ConfirmDeletePlaylist)
            }
        }
        KeyCode::Char('n') | KeyCode::Esc => Some(Action::CancelDialog),
        _ => None,
    }
}

fn handle_language_menu(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc | KeyCode::Char('L') => Some(Action::ToggleLanguageMenu),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::LanguageMenuUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::LanguageMenuDown),
        KeyCode::Enter => Some(Action::LanguageMenuSelect),
        _ => None,
    }
}

fn handle_library(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ListUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ListDown),
        KeyCode::Char('g') => Some(Action::GoTop),
        KeyCode::Char('G') => Some(Action::GoBottom),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Some(Action::Activate),
        KeyCode::Char('n') => Some(Action::OpenCreateModal),
        KeyCode::Char('2') => Some(Action::ShowLyrics),
        KeyCode::Char(' ') => Some(Action::TogglePause),
        _ => None,
    }
}

fn handle_detail(state: &AppState, k: crossterm::event::KeyEvent) -> Option<Action> {
    if state.search_focus == SearchFocus::Input {
        return match k.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::SetSearchFocus(SearchFocus::List)),
            KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ClearInput)
            }
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::InputChar(c)),
            _ => None,
        };
    }

    if state.song_menu_open {
        return match k.code {
            KeyCode::Enter | KeyCode::Char('x') => Some(Action::RequestRemoveSong),
            KeyCode::Esc | KeyCode::Char('m') => Some(Action::ToggleSongMenu),
            _ => None,
        };
    }

    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => Some(Action::Back),
        KeyCode::Char('/') | KeyCode::Char('i') => {
            Some(Action::SetSearchFocus(SearchFocus::Input))
        }
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ListUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ListDown),
        KeyCode::Char('g') => Some(Action::GoTop),
        KeyCode::Char('G') => Some(Action::GoBottom),
        KeyCode::Enter | KeyCode::Char('l') => Some(Action::Activate),
        KeyCode::Char('m') => Some(Action::ToggleSongMenu),
        KeyCode::Char('x') => Some(Action::RequestRemoveSong),
        KeyCode::Char('e') => Some(Action::OpenEditModal),
        KeyCode::Char('D') => Some(Action::RequestDeletePlaylist),
        KeyCode::Char('o') => Some(Action::ToggleHeaderMenu),
        KeyCode::Char('2') => Some(Action::ShowLyrics),
        KeyCode::Char(' ') => Some(Action::TogglePause),
        _ => None,
    }
}

fn handle_lyrics(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Char('h') => Some(Action::Back),
        KeyCode::Char('1') => Some(Action::ShowLibrary),
        KeyCode::Char(' ') => Some(Action::TogglePause),
        KeyCode::Char('n') => Some(Action::NextSong),
        KeyCode::Char('p') => Some(Action::PrevSong),
        KeyCode::Right | KeyCode::Char(']') => Some(Action::SeekForward),
        KeyCode::Left | KeyCode::Char('[') => Some(Action::SeekBack),
        KeyCode::Char('t') => Some(Action::Translate),
        KeyCode::Char('L') => Some(Action::ToggleLanguageMenu),
        KeyCode::Char('f') => Some(Action::ToggleLike),
        // Number keys jump to a tenth of the song
        KeyCode::Char(c @ '0'..='9') => {
            let digit = u32::from(c) - u32::from('0');
            Some(Action::SeekFraction(f64::from(digit) / 10.0))
        }
        _ => None,
    }
}
