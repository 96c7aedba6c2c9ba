//! Translation overlay state machine
//!
//! Owns the single cached translation and decides whether translated text is
//! displayed under the original lyric lines. Responses are applied only when
//! they match the outstanding request's song and language, so a stale result
//! arriving after a song change or a newer request is dropped on the floor.

/// A validated, cached translation of one song's full lyric sheet.
#[derive(Debug, Clone)]
pub struct TranslationSet {
    pub song_id: String,
    pub language: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Requesting,
    Showing,
    Hidden,
    Failed,
}

/// What the caller should do after a translation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestDecision {
    /// No cached set for this language: issue the network fetch.
    Fetch,
    /// Cached set re-shown; no network call.
    ToggledOn,
    /// Cached set hidden; no network call.
    ToggledOff,
    /// The same request is already in flight.
    AlreadyRequesting,
}

/// Result of feeding a service response into the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Response accepted; overlay now showing.
    Shown,
    /// Response no longer matches the outstanding request; dropped.
    Stale,
    /// Line count disagreed with the source lyrics; response rejected.
    ShapeMismatch { got: usize, expected: usize },
}

#[derive(Debug, Default)]
pub struct TranslationOverlay {
    phase: Phase,
    /// `(song_id, language)` of the in-flight request, if any.
    pending: Option<(String, String)>,
    cached: Option<TranslationSet>,
}

impl TranslationOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a translation of `song_id` into `language`.
    ///
    /// Re-requesting a language that is already cached toggles visibility
    /// instead of fetching again. Requesting a different language discards
    /// the cached set up front; only one set is ever retained.
    pub fn request(&mut self, song_id: &str, language: &str) -> RequestDecision {
        if self
            .pending
            .as_ref()
            .is_some_and(|(s, l)| s == song_id && l == language)
        {
            return RequestDecision::AlreadyRequesting;
        }

        if self
            .cached
            .as_ref()
            .is_some_and(|c| c.song_id == song_id && c.language == language)
        {
            return match self.phase {
                Phase::Showing => {
                    self.phase = Phase::Hidden;
                    RequestDecision::ToggledOff
                }
                _ => {
                    self.phase = Phase::Showing;
                    RequestDecision::ToggledOn
                }
            };
        }

        self.cached = None;
        self.pending = Some((song_id.to_string(), language.to_string()));
        self.phase = Phase::Requesting;
        RequestDecision::Fetch
    }

    /// Feed a successful service response into the machine.
    ///
    /// `expected_len` is the source song's lyric line count; a response of
    /// any other length is rejected wholesale and the displayed state keeps
    /// showing the original lyrics.
    pub fn apply_success(
        &mut self,
        song_id: &str,
        language: &str,
        lines: Vec<String>,
        expected_len: usize,
    ) -> ApplyOutcome {
        if !self
            .pending
            .as_ref()
            .is_some_and(|(s, l)| s == song_id && l == language)
        {
            return ApplyOutcome::Stale;
        }
        self.pending = None;

        if lines.len() != expected_len {
            self.phase = Phase::Failed;
            return ApplyOutcome::ShapeMismatch {
                got: lines.len(),
                expected: expected_len,
            };
        }

        self.cached = Some(TranslationSet {
            song_id: song_id.to_string(),
            language: language.to_string(),
            lines,
        });
        self.phase = Phase::Showing;
        ApplyOutcome::Shown
    }

    /// Feed a transport/credential failure into the machine. Returns false
    /// when the failure belongs to a superseded request.
    pub fn apply_error(&mut self, song_id: &str, language: &str) -> bool {
        if !self
            .pending
            .as_ref()
            .is_some_and(|(s, l)| s == song_id && l == language)
        {
            return false;
        }
        self.pending = None;
        self.phase = Phase::Failed;
        true
    }

    /// Flip between showing and hiding the cached set. No-op without one.
    pub fn toggle(&mut self) {
        if self.cached.is_none() {
            return;
        }
        self.phase = match self.phase {
            Phase::Showing => Phase::Hidden,
            Phase::Hidden => Phase::Showing,
            other => other,
        };
    }

    /// Translated text for line `index`, only while showing and in range.
    pub fn overlay_text(&self, index: usize) -> Option<&str> {
        if self.phase != Phase::Showing {
            return None;
        }
        self.cached
            .as_ref()
            .and_then(|c| c.lines.get(index))
            .map(String::as_str)
    }

    /// The current song is gone; drop everything.
    pub fn song_changed(&mut self) {
        *self = Self::default();
    }

    pub fn is_requesting(&self) -> bool {
        self.phase == Phase::Requesting
    }

    pub fn is_showing(&self) -> bool {
        self.phase == Phase::Showing
    }

    pub fn has_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Language shown in the UI badge: the in-flight request's target, else
    /// the cached set's.
    pub fn active_language(&self) -> Option<&str> {
        self.pending
            .as_ref()
            .map(|(_, l)| l.as_str())
            .or_else(|| self.cached.as_ref().map(|c| c.language.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translated(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn test_fetch_then_show() {
        let mut overlay = TranslationOverlay::new();
        assert_eq!(overlay.request("1", "French"), RequestDecision::Fetch);
        assert!(overlay.is_requesting());

        let outcome = overlay.apply_success("1", "French", translated(12), 12);
        assert_eq!(outcome, ApplyOutcome::Shown);
        assert!(overlay.is_showing());
        assert_eq!(overlay.overlay_text(0), Some("line 0"));
        assert_eq!(overlay.overlay_text(11), Some("line 11"));
        assert_eq!(overlay.overlay_text(12), None);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let mut overlay = TranslationOverlay::new();
        overlay.request("1", "French");

        let outcome = overlay.apply_success("1", "French", translated(11), 12);
        assert_eq!(
            outcome,
            ApplyOutcome::ShapeMismatch {
                got: 11,
                expected: 12
            }
        );
        // Nothing partially applied
        assert!(!overlay.is_showing());
        assert!(!overlay.has_cached());
        assert_eq!(overlay.overlay_text(0), None);
    }

    #[test]
    fn test_toggle_roundtrip_without_refetch() {
        let mut overlay = TranslationOverlay::new();
        overlay.request("1", "French");
        overlay.apply_success("1", "French", translated(12), 12);

        // Same language again: toggles, never Fetch
        assert_eq!(overlay.request("1", "French"), RequestDecision::ToggledOff);
        assert_eq!(overlay.overlay_text(3), None);
        assert_eq!(overlay.request("1", "French"), RequestDecision::ToggledOn);
        assert_eq!(overlay.overlay_text(3), Some("line 3"));
    }

    #[test]
    fn test_stale_response_after_song_change() {
        let mut overlay = TranslationOverlay::new();
        overlay.request("a", "Spanish");
        overlay.song_changed();

        let outcome = overlay.apply_success("a", "Spanish", translated(12), 12);
        assert_eq!(outcome, ApplyOutcome::Stale);
        assert!(!overlay.is_showing());
        assert!(!overlay.has_cached());
    }

    #[test]
    fn test_latest_request_wins() {
        let mut overlay = TranslationOverlay::new();
        overlay.request("1", "French");
        // A newer request supersedes the French one
        assert_eq!(overlay.request("1", "German"), RequestDecision::Fetch);

        assert_eq!(
            overlay.apply_success("1", "French", translated(12), 12),
            ApplyOutcome::Stale
        );
        assert_eq!(
            overlay.apply_success("1", "German", translated(12), 12),
            ApplyOutcome::Shown
        );
        assert_eq!(overlay.active_language(), Some("German"));
    }

    #[test]
    fn test_language_switch_discards_old_cache() {
        let mut overlay = TranslationOverlay::new();
        overlay.request("1", "French");
        overlay.apply_success("1", "French", translated(12), 12);

        assert_eq!(overlay.request("1", "German"), RequestDecision::Fetch);
        // Only one cached set at a time: the French one is gone
        assert!(!overlay.has_cached());
        assert_eq!(overlay.overlay_text(0), None);
    }

    #[test]
    fn test_duplicate_inflight_request() {
        let mut overlay = TranslationOverlay::new();
        assert_eq!(overlay.request("1", "French"), RequestDecision::Fetch);
        assert_eq!(
            overlay.request("1", "French"),
            RequestDecision::AlreadyRequesting
        );
    }

    #[test]
    fn test_error_keeps_original_display() {
        let mut overlay = TranslationOverlay::new();
        overlay.request("1", "French");
        assert!(overlay.apply_error("1", "French"));
        assert!(!overlay.is_showing());
        assert_eq!(overlay.overlay_text(0), None);

        // Stale error for a superseded request is ignored
        overlay.request("1", "German");
        assert!(!overlay.apply_error("1", "French"));
        assert!(overlay.is_requesting());
    }

    #[test]
    fn test_toggle_is_noop_without_cache() {
        let mut overlay = TranslationOverlay::new();
        overlay.toggle();
        assert!(!overlay.is_showing());
        overlay.request("1", "French");
        overlay.toggle();
        assert!(overlay.is_requesting());
    }
}
