#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    /// One second of simulated playback elapsed.
    Tick,
    Net(NetEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug, Clone)]
pub enum NetEvent {
    /// Translation fetch settled successfully. Carries the originating
    /// song/language identity so stale results can be discarded.
    TranslationReady {
        song_id: String,
        language: String,
        lines: Vec<String>,
    },
    TranslationFailed {
        song_id: String,
        language: String,
        error: String,
    },
}
