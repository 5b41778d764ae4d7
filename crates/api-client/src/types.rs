//! Wire types exchanged with the recommendation service.

use serde::{Deserialize, Serialize};

/// A movie title as offered by the catalog and sent back as the `movie`
/// query parameter.
pub type MovieTitle = String;

/// One recommended movie.
///
/// The poster is only a reference; nothing in this workspace downloads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: MovieTitle,
    pub poster: String,
}

impl Recommendation {
    pub fn new(title: impl Into<String>, poster: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            poster: poster.into(),
        }
    }
}

/// Body the service sends alongside 4xx/5xx responses.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
