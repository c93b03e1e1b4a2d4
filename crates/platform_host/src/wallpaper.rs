//! Wallpaper presets and the light/dark theme shared by the desktop shell and the Settings app.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Built-in wallpaper preset identifier.
pub enum WallpaperId {
    /// Soft gradients with a radial glow.
    #[default]
    Aurora,
    /// Neon dusk gradient.
    Cyberwave,
    /// Emerald code grid.
    Matrix,
}

impl WallpaperId {
    /// Every preset, in Settings display order.
    pub const ALL: [Self; 3] = [Self::Aurora, Self::Cyberwave, Self::Matrix];

    /// Stable lowercase identifier used in persisted state.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aurora => "aurora",
            Self::Cyberwave => "cyberwave",
            Self::Matrix => "matrix",
        }
    }

    /// Parses a persisted identifier.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == raw)
    }

    /// Preset metadata for this identifier.
    pub fn preset(self) -> &'static WallpaperPreset {
        match self {
            Self::Aurora => &WALLPAPER_PRESETS[0],
            Self::Cyberwave => &WALLPAPER_PRESETS[1],
            Self::Matrix => &WALLPAPER_PRESETS[2],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Color scheme applied to the document root.
pub enum Theme {
    /// Light scheme.
    Light,
    /// Dark scheme (first-visit default).
    #[default]
    Dark,
}

impl Theme {
    /// Stable lowercase identifier used in storage and as the root CSS class.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored theme value.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite scheme.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns `true` for [`Theme::Dark`].
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Display metadata for one wallpaper preset.
pub struct WallpaperPreset {
    /// Preset identifier.
    pub id: WallpaperId,
    /// Short display name.
    pub label: &'static str,
    /// One-line description shown in Settings.
    pub description: &'static str,
    /// Accent color (`#rrggbb`) used by window chrome and the Settings grid.
    pub accent: &'static str,
    /// CSS `background` value for the light theme.
    pub light_background: &'static str,
    /// CSS `background` value for the dark theme.
    pub dark_background: &'static str,
}

impl WallpaperPreset {
    /// CSS `background` value for `theme`.
    pub const fn background(&self, theme: Theme) -> &'static str {
        match theme {
            Theme::Light => self.light_background,
            Theme::Dark => self.dark_background,
        }
    }
}

/// Built-in presets indexed in [`WallpaperId::ALL`] order.
pub const WALLPAPER_PRESETS: [WallpaperPreset; 3] = [
    WallpaperPreset {
        id: WallpaperId::Aurora,
        label: "Aurora",
        description: "Soft gradients with subtle radial glow.",
        accent: "#60a5fa",
        light_background: "radial-gradient(circle at top left, rgba(255,255,255,0.22) 0, transparent 55%), linear-gradient(to bottom right, #e9f1ff, #edf3ff, #f6f7fb)",
        dark_background: "radial-gradient(circle at top left, rgba(118,145,255,0.18) 0, transparent 55%), linear-gradient(to bottom right, #050708, #0d0f10, #111316)",
    },
    WallpaperPreset {
        id: WallpaperId::Cyberwave,
        label: "Cyberwave",
        description: "Neon dusk with vaporwave overtones.",
        accent: "#a855f7",
        light_background: "radial-gradient(circle at top left, rgba(255,255,255,0.35), transparent 55%), linear-gradient(to bottom right, #ffe8fc, #f0f0ff, #ffeef8)",
        dark_background: "radial-gradient(circle at bottom right, rgba(255,126,255,0.25), transparent 60%), linear-gradient(to bottom right, #12081e, #1a0f2b, #051125)",
    },
    WallpaperPreset {
        id: WallpaperId::Matrix,
        label: "Matrix",
        description: "Code rain inspired emerald grid.",
        accent: "#22c55e",
        light_background: "linear-gradient(rgba(34,197,94,0.12) 1px, transparent 1px) 0 0 / 24px 24px, linear-gradient(90deg, rgba(34,197,94,0.08) 1px, transparent 1px) 0 0 / 24px 24px, linear-gradient(to bottom right, #f4fff2, #e9ffef, #f2fff8)",
        dark_background: "linear-gradient(rgba(34,197,94,0.1) 1px, transparent 1px) 0 0 / 24px 24px, linear-gradient(90deg, rgba(34,197,94,0.1) 1px, transparent 1px) 0 0 / 24px 24px, linear-gradient(to bottom right, #020705, #03100b, #02160d)",
    },
];

/// Converts a `#rrggbb` (or `#rgb`) accent into a CSS `rgba(...)` string.
///
/// Unparseable input falls back to the Aurora accent.
pub fn accent_rgba(hex: &str, alpha: f32) -> String {
    let (r, g, b) = parse_hex_rgb(hex).unwrap_or((96, 165, 250));
    format!("rgba({r}, {g}, {b}, {alpha})")
}

fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().strip_prefix('#')?;
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn presets_are_indexed_by_id() {
        for id in WallpaperId::ALL {
            assert_eq!(id.preset().id, id);
            assert_eq!(WallpaperId::parse(id.as_str()), Some(id));
        }
        assert_eq!(WallpaperId::default(), WallpaperId::Aurora);
        assert_eq!(WallpaperId::parse("sunset"), None);
    }

    #[test]
    fn accent_rgba_parses_hex_and_falls_back() {
        assert_eq!(accent_rgba("#a855f7", 0.5), "rgba(168, 85, 247, 0.5)");
        assert_eq!(accent_rgba("#0f0", 1.0), "rgba(0, 255, 0, 1)");
        assert_eq!(accent_rgba("nope", 0.25), "rgba(96, 165, 250, 0.25)");
        assert_eq!(accent_rgba("#zzzzzz", 0.25), "rgba(96, 165, 250, 0.25)");
    }

    #[test]
    fn theme_serializes_lowercase_and_toggles() {
        assert_eq!(serde_json::to_string(&Theme::Light).expect("json"), "\"light\"");
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::parse(" light "), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
    }
}
