//! Global light/dark theme flag.
//!
//! The flag only influences styling; no behavior branches on it. Views read
//! it through the workspace and map [`Tone`] values onto their palette.

use crate::model::common::Tone;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// ANSI foreground code for a tone under this theme.
    ///
    /// Dark terminals get the bright variants, light terminals the plain
    /// ones; the mapping is presentation data, nothing more.
    pub fn ansi_code(self, tone: Tone) -> &'static str {
        match (self, tone) {
            (Theme::Light, Tone::Gray) => "90",
            (Theme::Light, Tone::Blue) => "34",
            (Theme::Light, Tone::Yellow) => "33",
            (Theme::Light, Tone::Orange) => "33;1",
            (Theme::Light, Tone::Red) => "31",
            (Theme::Light, Tone::Green) => "32",
            (Theme::Light, Tone::Purple) => "35",
            (Theme::Dark, Tone::Gray) => "37",
            (Theme::Dark, Tone::Blue) => "94",
            (Theme::Dark, Tone::Yellow) => "93",
            (Theme::Dark, Tone::Orange) => "93;1",
            (Theme::Dark, Tone::Red) => "91",
            (Theme::Dark, Tone::Green) => "92",
            (Theme::Dark, Tone::Purple) => "95",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn toggle_flips_both_ways() {
        let mut theme = Theme::Light;
        theme.toggle();
        assert!(theme.is_dark());
        theme.toggle();
        assert_eq!(theme, Theme::Light);
    }
}
