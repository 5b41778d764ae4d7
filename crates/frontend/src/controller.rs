//! # Recommendation Controller
//!
//! Drives the view state in response to user actions:
//! 1. On start, load the catalog and default the selection to its first title
//! 2. On recommend, mark loading, drop the old list, fetch, then settle
//! 3. On theme toggle, flip the colour scheme
//!
//! Failures never escape the controller. They are logged and stored in
//! `ViewState::last_error` for the view to show.
//!
//! The state sits behind a mutex so it can be observed while a request is
//! pending. The lock is never held across an `.await`, so a second
//! recommend started while one is in flight simply races it and the later
//! response wins.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use api_client::{MovieTitle, RecommenderApi};
use tracing::{debug, error, info};

use crate::state::{Theme, ViewState};

pub struct Controller<A> {
    api: Arc<A>,
    state: Arc<Mutex<ViewState>>,
}

// Clones share the api and the state; `A` itself need not be Clone
impl<A> Clone for Controller<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
        }
    }
}

impl<A: RecommenderApi> Controller<A> {
    pub fn new(api: A) -> Self {
        Self::with_theme(api, Theme::default())
    }

    pub fn with_theme(api: A, theme: Theme) -> Self {
        Self {
            api: Arc::new(api),
            state: Arc::new(Mutex::new(ViewState::with_theme(theme))),
        }
    }

    /// Copy of the current view state.
    pub fn snapshot(&self) -> ViewState {
        self.lock().clone()
    }

    /// Fetch the catalog and default the selection to its first entry.
    ///
    /// An empty catalog leaves the selection unset. On failure the catalog
    /// stays as it was and the error is recorded.
    pub async fn load_catalog(&self) {
        info!("Loading movie catalog");

        match self.api.fetch_movies().await {
            Ok(movies) => {
                info!("Loaded {} titles", movies.len());
                let mut state = self.lock();
                state.selected = movies.first().cloned();
                state.movies = movies;
                state.last_error = None;
            }
            Err(e) => {
                error!("Error fetching movie list: {}", e);
                self.lock().last_error = Some(format!(
                    "Could not load the movie list: {}",
                    e.user_message()
                ));
            }
        }
    }

    /// Select a title. Any title is accepted, not only catalog entries.
    pub fn select(&self, title: impl Into<MovieTitle>) {
        let title = title.into();
        debug!("Selected '{}'", title);
        self.lock().selected = Some(title);
    }

    /// Select the catalog entry at `index` (0-based).
    ///
    /// Returns the selected title, or `None` if the index is out of range.
    pub fn select_index(&self, index: usize) -> Option<MovieTitle> {
        let mut state = self.lock();
        let title = state.movies.get(index).cloned()?;
        debug!("Selected '{}' (#{})", title, index + 1);
        state.selected = Some(title.clone());
        Some(title)
    }

    /// Request recommendations for the current selection.
    ///
    /// Loading is set and the previous list dropped before the request is
    /// issued; loading is cleared once it settles, whatever the outcome.
    pub async fn recommend(&self) {
        let movie = {
            let mut state = self.lock();
            state.loading = true;
            state.recommendations.clear();
            state.last_error = None;
            state.selected.clone().unwrap_or_default()
        };

        info!("Requesting recommendations for '{}'", movie);
        let start = Instant::now();
        let result = self.api.fetch_recommendations(&movie).await;

        let mut state = self.lock();
        match result {
            Ok(recommendations) => {
                info!(
                    "Received {} recommendations for '{}' in {:.2?}",
                    recommendations.len(),
                    movie,
                    start.elapsed()
                );
                state.recommendations = recommendations;
            }
            Err(e) => {
                error!("Error fetching recommendations: {}", e);
                state.recommendations.clear();
                state.last_error = Some(format!(
                    "Could not get recommendations: {}",
                    e.user_message()
                ));
            }
        }
        state.loading = false;
    }

    /// Flip the theme and return the new one.
    pub fn toggle_theme(&self) -> Theme {
        let mut state = self.lock();
        state.theme = state.theme.toggled();
        debug!("Theme is now {}", state.theme);
        state.theme
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        // Plain data: a poisoned lock still holds a usable value
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
