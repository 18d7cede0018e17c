use ratatui::style::Color;

use mintfolio_core::{Availability, Rarity};

/// Dark gallery theme for the TUI
pub struct Theme;

impl Theme {
    // Backgrounds
    pub const BG: Color = Color::Rgb(13, 17, 23);
    pub const PANEL_BG: Color = Color::Rgb(24, 28, 40);

    // Canonical annotation ink colors: #4a90e2, #c0c0c0, #c79f60
    pub const BLUE_INK: Color = Color::Rgb(74, 144, 226);
    pub const SILVER_INK: Color = Color::Rgb(192, 192, 192);
    pub const GOLD_INK: Color = Color::Rgb(199, 159, 96);

    // Card colors
    pub const CARD_BORDER: Color = Color::Rgb(108, 117, 125);
    pub const CARD_SELECTED: Color = Color::Rgb(255, 214, 10);
    pub const PHOTO_FILL: Color = Color::Rgb(60, 60, 120);

    // Availability badges
    pub const AVAILABLE: Color = Color::Rgb(6, 214, 160);
    pub const COLLECTED: Color = Color::Rgb(114, 9, 183);
    pub const UNKNOWN_STATUS: Color = Color::Rgb(108, 117, 125);

    // Chart
    pub const BAR_TRACK: Color = Color::Rgb(45, 50, 62);

    // UI elements
    pub const GOLD: Color = Color::Rgb(255, 183, 3);
    pub const ERROR: Color = Color::Rgb(255, 107, 107);
    pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
    pub const BRIGHT_TEXT: Color = Color::Rgb(255, 255, 255);
    pub const MUTED_TEXT: Color = Color::Rgb(160, 160, 180);

    /// Display color of an annotation ink tier
    pub fn ink(tier: Rarity) -> Color {
        match tier {
            Rarity::Blue => Theme::BLUE_INK,
            Rarity::Silver => Theme::SILVER_INK,
            Rarity::Gold => Theme::GOLD_INK,
        }
    }

    /// Badge color for an availability status
    pub fn availability(status: Availability) -> Color {
        match status {
            Availability::Available => Theme::AVAILABLE,
            Availability::Collected => Theme::COLLECTED,
            Availability::Unknown => Theme::UNKNOWN_STATUS,
        }
    }
}
