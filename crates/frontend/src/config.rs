//! Configuration loaded from the environment.
//!
//! Variables are prefixed with `MOVIE_RECS_` and may also come from a
//! `.env` file in the working directory:
//!
//! | variable               | default                                          |
//! |------------------------|--------------------------------------------------|
//! | `MOVIE_RECS_API_URL`   | `https://movie-recommender-app-185a.onrender.com` |
//! | `MOVIE_RECS_THEME`     | `dark`                                           |

use anyhow::{Context, Result};
use api_client::DEFAULT_API_URL;
use serde::Deserialize;

use crate::state::Theme;

pub const ENV_PREFIX: &str = "MOVIE_RECS_";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the recommendation service
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Theme the session starts with
    #[serde(default)]
    pub theme: Theme,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Load configuration from `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .context("Failed to load configuration from environment")
    }
}
