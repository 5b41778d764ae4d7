//! View state of a recommendation session.
//!
//! Everything here lives only as long as the session; nothing is persisted.

use std::fmt;
use std::str::FromStr;

use api_client::{MovieTitle, Recommendation};
use serde::Deserialize;

/// Colour scheme applied to the whole view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class put on the page body; dark is the unstyled default.
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Dark => "",
            Theme::Light => "light-theme",
        }
    }

    /// Label of the control that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to Light Mode",
            Theme::Light => "Switch to Dark Mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{}' (expected 'dark' or 'light')", other)),
        }
    }
}

impl TryFrom<String> for Theme {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Everything the view renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Titles offered for selection, in backend order
    pub movies: Vec<MovieTitle>,
    pub selected: Option<MovieTitle>,
    pub recommendations: Vec<Recommendation>,
    pub loading: bool,
    pub theme: Theme,
    /// Message of the most recent failed request
    pub last_error: Option<String>,
}

impl ViewState {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn recommend_label(&self) -> &'static str {
        if self.loading {
            "Finding..."
        } else {
            "Get Recommendations"
        }
    }

    /// The recommend control is disabled while a request is in flight.
    pub fn can_recommend(&self) -> bool {
        !self.loading
    }
}
