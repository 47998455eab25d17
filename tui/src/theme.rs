//! Color theme and glyphs for the toss TUI.
//!
//! Uses a Kanagawa Wave derived palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use toss_engine::{Face, UiOptions};

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_STAGE: Color = Color::Rgb(37, 45, 61); // waveBlue1, dimmed
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Accents ===
    pub const PRIMARY: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const GOLD: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const SILVER: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_stage: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub heads: Color,
    pub tails: Color,
    pub success: Color,
    pub error: Color,
    pub danger: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_stage: colors::BG_STAGE,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            heads: colors::GOLD,
            tails: colors::SILVER,
            success: colors::GREEN,
            error: colors::RED,
            danger: colors::ORANGE,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_stage: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_muted: Color::Gray,
            primary: Color::Cyan,
            heads: Color::Yellow,
            tails: Color::White,
            success: Color::Green,
            error: Color::Red,
            danger: Color::Red,
        }
    }

    #[must_use]
    pub fn face(&self, face: Face) -> Color {
        match face {
            Face::Heads => self.heads,
            Face::Tails => self.tails,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for decorations.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub coin: &'static str,
    pub history: &'static str,
    pub error: &'static str,
    pub focus: &'static str,
    pub separator: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            coin: "(o)",
            history: "#",
            error: "!",
            focus: ">",
            separator: "|",
        }
    } else {
        Glyphs {
            coin: "🪙",
            history: "📜",
            error: "✗",
            focus: "▸",
            separator: "│",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.heads)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn state_ready(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.success)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn state_tossing(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.heads)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button(palette: &Palette, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(palette.bg_dark)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.primary)
        }
    }

    #[must_use]
    pub fn exit_button(palette: &Palette, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(palette.bg_dark)
                .bg(palette.danger)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.danger)
        }
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.heads)
            .add_modifier(Modifier::BOLD)
    }
}
