use crate::app::state::Emphasis;
use ratatui::style::{Color, Modifier, Style};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// The fixed set of selectable themes. The name is also the value persisted
/// in the config file, so renames break stored choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    Light,
    #[default]
    Dark,
    Blue,
}

impl ThemeName {
    pub const ALL: [ThemeName; 3] = [ThemeName::Light, ThemeName::Dark, ThemeName::Blue];

    pub fn name(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
            ThemeName::Blue => "blue",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(ThemeName::Light),
            "dark" => Some(ThemeName::Dark),
            "blue" => Some(ThemeName::Blue),
            _ => None,
        }
    }
}

impl Serialize for ThemeName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// An unrecognized stored name falls back to the default theme rather than
// failing the whole config load.
impl<'de> Deserialize<'de> for ThemeName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(ThemeName::from_name(&name).unwrap_or_default())
    }
}

struct Palette {
    bg: Color,
    text: Color,
    text_muted: Color,
    /// Mid-emphasis highlight (the page's primary color).
    primary: Color,
    /// Success / high-emphasis highlight (the page's secondary color).
    secondary: Color,
    /// Error highlight (the page's accent color).
    accent: Color,
    border: Color,
    border_focused: Color,
}

const DARK: Palette = Palette {
    bg: Color::Rgb(24, 24, 32),
    text: Color::Rgb(220, 220, 228),
    text_muted: Color::Rgb(128, 130, 140),
    primary: Color::Rgb(97, 175, 239),
    secondary: Color::Rgb(110, 200, 120),
    accent: Color::Rgb(224, 108, 117),
    border: Color::Rgb(70, 72, 84),
    border_focused: Color::Rgb(97, 175, 239),
};

const LIGHT: Palette = Palette {
    bg: Color::Rgb(245, 245, 245),
    text: Color::Rgb(40, 40, 40),
    text_muted: Color::Rgb(130, 130, 130),
    primary: Color::Rgb(52, 101, 164),
    secondary: Color::Rgb(39, 140, 70),
    accent: Color::Rgb(192, 57, 43),
    border: Color::Rgb(175, 175, 175),
    border_focused: Color::Rgb(52, 101, 164),
};

const BLUE: Palette = Palette {
    bg: Color::Rgb(13, 27, 55),
    text: Color::Rgb(214, 226, 245),
    text_muted: Color::Rgb(122, 142, 172),
    primary: Color::Rgb(86, 156, 214),
    secondary: Color::Rgb(78, 201, 176),
    accent: Color::Rgb(231, 92, 76),
    border: Color::Rgb(45, 70, 110),
    border_focused: Color::Rgb(86, 156, 214),
};

/// Style accessors for the active palette. One instance lives in `AppState`
/// and is swapped wholesale when the theme changes.
pub struct Theme {
    pub name: ThemeName,
    palette: Palette,
}

impl Theme {
    pub fn new(name: ThemeName) -> Self {
        let palette = match name {
            ThemeName::Light => LIGHT,
            ThemeName::Dark => DARK,
            ThemeName::Blue => BLUE,
        };
        Self { name, palette }
    }

    pub fn root(&self) -> Style {
        Style::default().bg(self.palette.bg).fg(self.palette.text)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.palette.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.palette.border_focused)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.palette.text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.palette.text)
    }

    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(self.palette.primary)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.palette.secondary)
    }

    pub fn danger(&self) -> Style {
        Style::default().fg(self.palette.accent)
    }

    /// Length/value driven coloring: inherit, then primary, then secondary.
    pub fn emphasis(&self, level: Emphasis) -> Style {
        match level {
            Emphasis::Normal => self.text(),
            Emphasis::Elevated => self.highlight(),
            Emphasis::High => self.success(),
        }
    }

    pub fn button(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.palette.bg)
                .bg(self.palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.text)
        }
    }

    /// Presentation mark for a form field: error and valid are mutually
    /// exclusive; unmarked fields render as plain text.
    pub fn field_mark(&self, valid: Option<bool>) -> Style {
        match valid {
            Some(true) => self.success(),
            Some(false) => self.danger(),
            None => self.text(),
        }
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.palette.bg).bg(self.palette.text_muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for name in ThemeName::ALL {
            assert_eq!(ThemeName::from_name(name.name()), Some(name));
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert_eq!(ThemeName::from_name("sepia"), None);
        assert_eq!(ThemeName::from_name(""), None);
    }

    #[test]
    fn test_theme_carries_selected_name() {
        for name in ThemeName::ALL {
            assert_eq!(Theme::new(name).name, name);
        }
    }
}
