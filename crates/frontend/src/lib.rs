//! # Frontend Crate
//!
//! View state and controller for browsing movie recommendations.
//!
//! ## Main Components
//!
//! - **state**: `ViewState` and `Theme`
//! - **controller**: `Controller`, which applies user actions to the state
//! - **view**: renders the state for a terminal
//! - **session**: interactive line commands on top of the controller
//! - **config**: settings from the environment
//!
//! ## Example Usage
//!
//! ```ignore
//! use api_client::HttpRecommenderClient;
//! use frontend::{Config, Controller, view};
//!
//! let config = Config::from_env()?;
//! let controller = Controller::with_theme(HttpRecommenderClient::new(&config.api_url)?, config.theme);
//!
//! controller.load_catalog().await;
//! controller.recommend().await;
//! println!("{}", view::render(&controller.snapshot()));
//! ```

pub mod config;
pub mod controller;
pub mod session;
pub mod state;
pub mod view;

pub use config::Config;
pub use controller::Controller;
pub use session::{Command, Flow, Session};
pub use state::{Theme, ViewState};
