//! Status glyphs with Nerd Font and plain Unicode fallbacks
//!
//! The selector cannot draw the SVG icons it collects inside a terminal, so
//! the list and status bar use these glyphs instead.
//!
//! # Environment Variables
//!
//! - `NERD_FONTS=1`: Force Nerd Font mode
//! - `NERD_FONTS_DISABLED=1`: Force plain mode

use std::sync::OnceLock;

/// Glyphs used by the terminal UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    pub success: &'static str,
    pub error: &'static str,
    pub pending: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
    pub entry: &'static str,
    pub prompt: &'static str,
}

/// Nerd Font glyphs (Font Awesome)
pub const NERD_ICONS: IconSet = IconSet {
    success: "\u{f00c}", // fa-check
    error: "\u{f00d}",   // fa-times
    pending: "\u{f021}", // fa-refresh
    light: "\u{f185}",   // fa-sun-o
    dark: "\u{f186}",    // fa-moon-o
    entry: "\u{f0c1}",   // fa-link
    prompt: "\u{f054}",  // fa-chevron-right
};

/// Plain Unicode glyphs, no special fonts needed
pub const PLAIN_ICONS: IconSet = IconSet {
    success: "✓",
    error: "✗",
    pending: "↻",
    light: "☀",
    dark: "☾",
    entry: "•",
    prompt: "›",
};

static ICONS: OnceLock<&'static IconSet> = OnceLock::new();

/// Detect if terminal supports Nerd Fonts
///
/// Conservative default (plain) to prevent rendering issues.
fn supports_nerd_fonts() -> bool {
    if let Ok(val) = std::env::var("NERD_FONTS") {
        return val == "1" || val.eq_ignore_ascii_case("true");
    }

    if std::env::var("NERD_FONTS_DISABLED").is_ok() {
        return false;
    }

    if let Ok(term_program) = std::env::var("TERM_PROGRAM") {
        let term_lower = term_program.to_lowercase();
        if term_lower.contains("iterm")
            || term_lower.contains("wezterm")
            || term_lower.contains("alacritty")
            || term_lower.contains("kitty")
        {
            return true;
        }
    }

    if let Ok(term) = std::env::var("TERM") {
        let term_lower = term.to_lowercase();
        if term_lower.contains("kitty") || term_lower.contains("alacritty") {
            return true;
        }
    }

    false
}

/// Get the active icon set (detected on first call)
pub fn icons() -> &'static IconSet {
    ICONS.get_or_init(|| {
        if supports_nerd_fonts() {
            &NERD_ICONS
        } else {
            &PLAIN_ICONS
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_icon_set_access() {
        let icons = icons();
        assert!(!icons.success.is_empty());
        assert!(!icons.error.is_empty());
        assert!(!icons.entry.is_empty());
    }

    #[test]
    #[serial]
    fn test_env_override() {
        std::env::set_var("NERD_FONTS", "1");
        assert!(supports_nerd_fonts());
        std::env::set_var("NERD_FONTS", "true");
        assert!(supports_nerd_fonts());
        std::env::remove_var("NERD_FONTS");

        std::env::set_var("NERD_FONTS_DISABLED", "1");
        assert!(!supports_nerd_fonts());
        std::env::remove_var("NERD_FONTS_DISABLED");
    }

    #[test]
    #[serial]
    fn test_explicit_opt_out_beats_terminal() {
        let previous_term = std::env::var("TERM").ok();
        std::env::set_var("NERD_FONTS", "0");
        std::env::set_var("TERM", "xterm-kitty");
        assert!(!supports_nerd_fonts());

        std::env::remove_var("NERD_FONTS");
        match previous_term {
            Some(term) => std::env::set_var("TERM", term),
            None => std::env::remove_var("TERM"),
        }
    }
}
