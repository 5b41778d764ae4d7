//! Test doubles for the recommendation service.

#![allow(dead_code)]

use api_client::{ApiError, MovieTitle, Recommendation, RecommenderApi};
use async_trait::async_trait;
use mockall::mock;
use tokio::sync::{oneshot, Mutex};

mock! {
    pub Api {}

    #[async_trait]
    impl RecommenderApi for Api {
        async fn fetch_movies(&self) -> api_client::Result<Vec<MovieTitle>>;
        async fn fetch_recommendations(&self, movie: &str) -> api_client::Result<Vec<Recommendation>>;
    }
}

pub fn titles(names: &[&str]) -> Vec<MovieTitle> {
    names.iter().map(|n| n.to_string()).collect()
}

pub fn server_error(message: &str) -> ApiError {
    ApiError::Status {
        status: 500,
        message: message.to_string(),
    }
}

/// Backend whose recommend call blocks until the test releases it.
///
/// `started` fires once the request is in flight; the test then sends the
/// response through the paired sender.
pub struct GatedApi {
    started: Mutex<Option<oneshot::Sender<String>>>,
    response: Mutex<Option<oneshot::Receiver<api_client::Result<Vec<Recommendation>>>>>,
}

pub struct Gate {
    pub started: oneshot::Receiver<String>,
    pub respond: oneshot::Sender<api_client::Result<Vec<Recommendation>>>,
}

pub fn gated_api() -> (GatedApi, Gate) {
    let (started_tx, started_rx) = oneshot::channel();
    let (respond_tx, respond_rx) = oneshot::channel();
    let api = GatedApi {
        started: Mutex::new(Some(started_tx)),
        response: Mutex::new(Some(respond_rx)),
    };
    let gate = Gate {
        started: started_rx,
        respond: respond_tx,
    };
    (api, gate)
}

#[async_trait]
impl RecommenderApi for GatedApi {
    async fn fetch_movies(&self) -> api_client::Result<Vec<MovieTitle>> {
        Ok(titles(&["A", "B", "C"]))
    }

    async fn fetch_recommendations(&self, movie: &str) -> api_client::Result<Vec<Recommendation>> {
        if let Some(started) = self.started.lock().await.take() {
            let _ = started.send(movie.to_string());
        }
        let response = self
            .response
            .lock()
            .await
            .take()
            .expect("recommend called more than once");
        response.await.expect("test dropped the gate")
    }
}
