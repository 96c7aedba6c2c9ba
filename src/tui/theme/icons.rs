//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

use crate::catalog::FolderIcon;

/// Icon set using Nerd Font glyphs
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Icons {
    // Playback controls
    pub play: &'static str,
    pub pause: &'static str,
    pub next: &'static str,
    pub prev: &'static str,

    // Navigation
    pub search: &'static str,
    pub library: &'static str,

    // Status
    pub success: &'static str,
    pub error: &'static str,
    pub info: &'static str,

    // Music
    pub music: &'static str,
    pub playlist: &'static str,
    pub lyrics: &'static str,
    pub favorite: &'static str,
    pub translate: &'static str,

    // Selection
    pub selected: &'static str,
    pub unselected: &'static str,

    // Progress bar
    pub progress_full: &'static str,
    pub progress_empty: &'static str,
    pub progress_head: &'static str,

    // Separators
    pub bullet: &'static str,
}

impl Icons {
    /// Nerd Font icon set
    pub const fn nerd() -> Self {
        Self {
            // Playback - nf-fa-*
            play: "\u{f04b}",     // nf-fa-play
            pause: "\u{f04c}",    // nf-fa-pause
            next: "\u{f051}",     // nf-fa-step_forward
            prev: "\u{f048}",     // nf-fa-step_backward

            // Navigation
            search: "\u{f002}",   // nf-fa-search
            library: "\u{f02d}",  // nf-fa-book

            // Status
            success: "\u{f00c}",  // nf-fa-check
            error: "\u{f00d}",    // nf-fa-times
            info: "\u{f05a}",     // nf-fa-info_circle

            // Music
            music: "\u{f001}",    // nf-fa-music
            playlist: "\u{f0cb}", // nf-fa-list_ol
            lyrics: "\u{f15c}",   // nf-fa-file_text_o
            favorite: "\u{f004}", // nf-fa-heart
            translate: "\u{f1ab}", // nf-fa-language

            // Selection
            selected: "\u{f054}", // nf-fa-chevron_right
            unselected: " ",

            // Progress bar
            progress_full: "━",
            progress_empty: "─",
            progress_head: "●",

            // Separators
            bullet: "•",
        }
    }

    /// Glyph for a playlist folder icon
    pub fn folder(&self, icon: FolderIcon) -> &'static str {
        match icon {
            FolderIcon::Heart => "\u{f004}",      // nf-fa-heart
            FolderIcon::Moon => "\u{f186}",       // nf-fa-moon_o
            FolderIcon::Coffee => "\u{f0f4}",     // nf-fa-coffee
            FolderIcon::Sun => "\u{f185}",        // nf-fa-sun_o
            FolderIcon::TrendingUp => "\u{f201}", // nf-fa-line_chart
            FolderIcon::Headphones => "\u{f025}", // nf-fa-headphones
            FolderIcon::Cloud => "\u{f0c2}",      // nf-fa-cloud
            FolderIcon::Clock => "\u{f017}",      // nf-fa-clock_o
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}

/// Loading spinner frames
pub struct LoadingSpinner;

impl LoadingSpinner {
    /// Braille-based smooth spinner
    pub const BRAILLE: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

    pub fn frame(tick: u64) -> &'static str {
        let idx = tick as usize % Self::BRAILLE.len();
        Self::BRAILLE[idx]
    }
}
