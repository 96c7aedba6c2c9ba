//! Lyric translation: remote client and the display overlay
//!
//! The client talks to the translation service; the overlay decides what (if
//! anything) is shown under each original lyric line.

pub mod client;
pub mod overlay;

pub use client::TranslateClient;
pub use overlay::{ApplyOutcome, RequestDecision, TranslationOverlay, TranslationSet};

/// A target language offered in the UI.
#[derive(Debug, Clone, Copy)]
pub struct Language {
    pub name: &'static str,
    pub label: &'static str,
}

pub const SUPPORTED_LANGUAGES: [Language; 6] = [
    Language {
        name: "Indonesian",
        label: "ID",
    },
    Language {
        name: "Japanese",
        label: "JA",
    },
    Language {
        name: "Korean",
        label: "KO",
    },
    Language {
        name: "Spanish",
        label: "ES",
    },
    Language {
        name: "French",
        label: "FR",
    },
    Language {
        name: "German",
        label: "DE",
    },
];
