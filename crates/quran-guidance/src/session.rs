/// Latest-wins guidance state for one view.
///
/// Every fetch takes a new generation number. When its response arrives the
/// generation is compared under the state lock; if a newer fetch or a reset
/// happened in between, the response is dropped.
use std::sync::Arc;

use schemars::JsonSchema;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use guidance_common::client::GuidanceClient;
use guidance_common::guidance::{CategoryFilter, GuidanceResponse};

pub const INVALID_QUERY_MESSAGE: &str = "Please enter a valid query";

#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
pub struct SessionState {
    pub results: Option<GuidanceResponse>,
    pub loading: bool,
    pub error: Option<String>,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// This fetch's own result, already stored in the session.
    Completed(Result<GuidanceResponse, String>),
    /// A newer fetch or a reset started while this one was in flight.
    Superseded,
}

pub struct GuidanceSession {
    client: Arc<GuidanceClient>,
    state: RwLock<SessionState>,
}

impl GuidanceSession {
    pub fn new(client: Arc<GuidanceClient>) -> Self {
        Self {
            client,
            state: RwLock::new(SessionState::default()),
        }
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// A blank query only records an error; it does not supersede a fetch
    /// already in flight.
    pub async fn fetch(&self, query: &str, filter: &CategoryFilter) -> FetchOutcome {
        if query.trim().is_empty() {
            self.state.write().await.error = Some(INVALID_QUERY_MESSAGE.to_string());
            return FetchOutcome::Completed(Err(INVALID_QUERY_MESSAGE.to_string()));
        }

        let generation = {
            let mut state = self.state.write().await;
            state.generation += 1;
            state.loading = true;
            state.error = None;
            state.results = None;
            state.generation
        };

        let result = self
            .client
            .fetch_guidance(query, filter)
            .await
            .map_err(|e| {
                warn!(error = %e, "guidance request failed");
                e.user_message()
            });

        let mut state = self.state.write().await;
        if state.generation != generation {
            debug!(generation, current = state.generation, "dropping superseded guidance response");
            return FetchOutcome::Superseded;
        }

        state.loading = false;
        match &result {
            Ok(response) => {
                state.results = Some(response.clone());
                state.error = None;
            }
            Err(message) => {
                state.results = None;
                state.error = Some(message.clone());
            }
        }
        FetchOutcome::Completed(result)
    }

    /// Clears results and error. Any fetch still in flight is superseded.
    pub async fn reset(&self) -> SessionState {
        let mut state = self.state.write().await;
        *state = SessionState {
            generation: state.generation + 1,
            ..SessionState::default()
        };
        state.clone()
    }
}
