//! Viewer preferences shared across pages.
//!
//! The value is owned by whoever hosts the views (the API keeps one in its
//! application state) and passed to the code that needs it.

use serde::{Deserialize, Serialize};

/// Scroll offset in pixels past which the navigation bar is blurred.
pub const NAV_SCROLL_THRESHOLD: u32 = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Follow the operating system setting.
    System,
}

impl Theme {
    /// Flip between light and dark. `System` flips to light.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark | Theme::System => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub signed_in: bool,
}

impl Preferences {
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavStyle {
    Transparent,
    Blurred,
}

/// Navigation bar style for a vertical scroll offset.
pub fn nav_style(scroll_y: u32) -> NavStyle {
    if scroll_y > NAV_SCROLL_THRESHOLD {
        NavStyle::Blurred
    } else {
        NavStyle::Transparent
    }
}
