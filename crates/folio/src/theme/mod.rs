//! Skins: a fixed, ordered set of color palettes.
//!
//! The active skin is a user preference persisted in `state.toml`; see
//! `crate::state`. Cycling wraps around the declaration order.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Skin {
    #[default]
    Classic,
    Hacker,
    Light,
    Dogglatte,
    Groovy,
    Vampire,
    Neon,
    Pastel,
}

pub const SKINS: [Skin; 8] = [
    Skin::Classic,
    Skin::Hacker,
    Skin::Light,
    Skin::Dogglatte,
    Skin::Groovy,
    Skin::Vampire,
    Skin::Neon,
    Skin::Pastel,
];

impl Skin {
    pub fn name(self) -> &'static str {
        match self {
            Skin::Classic => "classic",
            Skin::Hacker => "hacker",
            Skin::Light => "light",
            Skin::Dogglatte => "dogglatte",
            Skin::Groovy => "groovy",
            Skin::Vampire => "vampire",
            Skin::Neon => "neon",
            Skin::Pastel => "pastel",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.trim().to_lowercase();
        SKINS.into_iter().find(|skin| skin.name() == lowered)
    }

    pub fn next(self) -> Self {
        let index = SKINS.iter().position(|skin| *skin == self).unwrap_or(0);
        SKINS[(index + 1) % SKINS.len()]
    }

    pub fn names() -> Vec<&'static str> {
        SKINS.iter().map(|skin| skin.name()).collect()
    }

    pub fn palette(self) -> Palette {
        match self {
            Skin::Classic => Palette {
                background: Color::Rgb(0, 0, 128),
                foreground: Color::Rgb(192, 192, 192),
                accent: Color::Rgb(255, 255, 255),
                selection_bg: Color::Rgb(0, 128, 128),
                selection_fg: Color::Rgb(0, 0, 0),
                border_focused: Color::Rgb(0, 255, 255),
                border: Color::Rgb(128, 128, 128),
                link: Color::Rgb(255, 255, 0),
                dim: Color::Rgb(128, 128, 128),
            },
            Skin::Hacker => Palette {
                background: Color::Rgb(0, 0, 0),
                foreground: Color::Rgb(0, 200, 0),
                accent: Color::Rgb(120, 255, 120),
                selection_bg: Color::Rgb(0, 90, 0),
                selection_fg: Color::Rgb(200, 255, 200),
                border_focused: Color::Rgb(0, 255, 0),
                border: Color::Rgb(0, 100, 0),
                link: Color::Rgb(170, 255, 170),
                dim: Color::Rgb(0, 110, 0),
            },
            Skin::Light => Palette {
                background: Color::Rgb(245, 245, 240),
                foreground: Color::Rgb(40, 40, 40),
                accent: Color::Rgb(0, 0, 0),
                selection_bg: Color::Rgb(200, 215, 240),
                selection_fg: Color::Rgb(0, 0, 0),
                border_focused: Color::Rgb(30, 90, 200),
                border: Color::Rgb(170, 170, 170),
                link: Color::Rgb(20, 80, 190),
                dim: Color::Rgb(130, 130, 130),
            },
            Skin::Dogglatte => Palette {
                background: Color::Rgb(59, 42, 32),
                foreground: Color::Rgb(230, 210, 185),
                accent: Color::Rgb(250, 235, 215),
                selection_bg: Color::Rgb(160, 110, 70),
                selection_fg: Color::Rgb(255, 250, 240),
                border_focused: Color::Rgb(215, 160, 100),
                border: Color::Rgb(120, 90, 65),
                link: Color::Rgb(240, 190, 120),
                dim: Color::Rgb(150, 125, 100),
            },
            Skin::Groovy => Palette {
                background: Color::Rgb(60, 20, 70),
                foreground: Color::Rgb(255, 200, 90),
                accent: Color::Rgb(255, 120, 60),
                selection_bg: Color::Rgb(230, 90, 140),
                selection_fg: Color::Rgb(255, 255, 220),
                border_focused: Color::Rgb(120, 220, 180),
                border: Color::Rgb(150, 90, 160),
                link: Color::Rgb(120, 220, 180),
                dim: Color::Rgb(170, 130, 160),
            },
            Skin::Vampire => Palette {
                background: Color::Rgb(15, 0, 5),
                foreground: Color::Rgb(210, 190, 190),
                accent: Color::Rgb(255, 60, 60),
                selection_bg: Color::Rgb(120, 0, 20),
                selection_fg: Color::Rgb(255, 230, 230),
                border_focused: Color::Rgb(200, 0, 30),
                border: Color::Rgb(90, 30, 40),
                link: Color::Rgb(255, 110, 110),
                dim: Color::Rgb(120, 90, 95),
            },
            Skin::Neon => Palette {
                background: Color::Rgb(10, 10, 25),
                foreground: Color::Rgb(0, 240, 255),
                accent: Color::Rgb(255, 0, 200),
                selection_bg: Color::Rgb(255, 0, 200),
                selection_fg: Color::Rgb(10, 10, 25),
                border_focused: Color::Rgb(255, 0, 200),
                border: Color::Rgb(60, 60, 140),
                link: Color::Rgb(255, 255, 0),
                dim: Color::Rgb(90, 110, 160),
            },
            Skin::Pastel => Palette {
                background: Color::Rgb(250, 240, 245),
                foreground: Color::Rgb(90, 80, 110),
                accent: Color::Rgb(120, 90, 170),
                selection_bg: Color::Rgb(200, 230, 215),
                selection_fg: Color::Rgb(60, 60, 80),
                border_focused: Color::Rgb(170, 140, 220),
                border: Color::Rgb(215, 200, 220),
                link: Color::Rgb(90, 150, 200),
                dim: Color::Rgb(165, 155, 175),
            },
        }
    }
}

/// Colors consumed by the render layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub border_focused: Color,
    pub border: Color,
    pub link: Color,
    pub dim: Color,
}
