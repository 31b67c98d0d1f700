//! Light and dark color palettes
//!
//! Every widget takes its colors from the [`Palette`] of the session's
//! current display mode.

use crate::types::DisplayMode;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Color,

    /// Primary text
    pub text: Color,

    /// Placeholder and secondary text
    pub muted: Color,

    /// Titles and focused borders
    pub accent: Color,

    /// Panel borders
    pub border: Color,

    /// Resolution errors
    pub error: Color,

    /// Added entries and success notices
    pub success: Color,

    /// Transient-failure hints and busy indicator
    pub warning: Color,

    pub status_bg: Color,
    pub status_fg: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(0xfa, 0xfa, 0xfa),
        text: Color::Rgb(0x1f, 0x23, 0x28),
        muted: Color::Rgb(0x6e, 0x76, 0x81),
        accent: Color::Rgb(0x09, 0x69, 0xda),
        border: Color::Rgb(0xd0, 0xd7, 0xde),
        error: Color::Rgb(0xcf, 0x22, 0x2e),
        success: Color::Rgb(0x1a, 0x7f, 0x37),
        warning: Color::Rgb(0x9a, 0x67, 0x00),
        status_bg: Color::Rgb(0xe8, 0xe8, 0xe8),
        status_fg: Color::Rgb(0x1f, 0x23, 0x28),
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(0x1a, 0x1a, 0x1f),
        text: Color::Rgb(0xe6, 0xed, 0xf3),
        muted: Color::Rgb(0x8b, 0x94, 0x9e),
        accent: Color::Rgb(0x58, 0xa6, 0xff),
        border: Color::Rgb(0x30, 0x36, 0x3d),
        error: Color::Rgb(0xff, 0x6b, 0x6b),
        success: Color::Rgb(0x4a, 0xc2, 0x6b),
        warning: Color::Rgb(0xe5, 0xc0, 0x7b),
        status_bg: Color::Rgb(0x11, 0x12, 0x17),
        status_fg: Color::Rgb(0xe6, 0xed, 0xf3),
    };

    pub fn for_mode(mode: DisplayMode) -> &'static Palette {
        match mode {
            DisplayMode::Light => &Self::LIGHT,
            DisplayMode::Dark => &Self::DARK,
        }
    }

    /// Base style for the whole screen
    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status(&self) -> Style {
        Style::default().bg(self.status_bg).fg(self.status_fg)
    }
}
