// Theme and tab state
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Accent used for the series, UTC tick hours and the disclaimer.
pub const ACCENT_COLOR: &str = "rgb(37, 150, 190)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Colors that change with the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub plot_bg_color: &'static str,
    pub dashed_line_color: &'static str,
    pub ticks_color: &'static str,
}

const LIGHT: Palette = Palette {
    plot_bg_color: "white",
    dashed_line_color: ACCENT_COLOR,
    ticks_color: "black",
};

const DARK: Palette = Palette {
    plot_bg_color: "#061d2c",
    dashed_line_color: "white",
    ticks_color: "white",
};

impl ThemeMode {
    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

/// MAIN/AUX selector. AUX only changes which button is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Main,
    Aux,
}

/// Declarative page state; the page derives every theme/tab class from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewState {
    pub theme: ThemeMode,
    pub tab: Tab,
}
