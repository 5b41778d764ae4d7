//! Client for the movie recommendation service.
//!
//! This crate provides:
//! - Wire types for the catalog and recommendation responses
//! - The `RecommenderApi` trait the frontend is written against
//! - `HttpRecommenderClient`, a reqwest implementation of that trait
//!
//! ## Example Usage
//! ```ignore
//! use api_client::{HttpRecommenderClient, RecommenderApi, DEFAULT_API_URL};
//!
//! let client = HttpRecommenderClient::new(DEFAULT_API_URL)?;
//! let movies = client.fetch_movies().await?;
//! let recs = client.fetch_recommendations(&movies[0]).await?;
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::{HttpRecommenderClient, RecommenderApi, DEFAULT_API_URL};
pub use error::{ApiError, Result};
pub use types::{ErrorBody, MovieTitle, Recommendation};
