//! Shared handler state

use quiz_application::RunQuizTurnUseCase;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

/// State shared by every request handler
pub struct AppState {
    /// Turn orchestrator
    pub quiz: RunQuizTurnUseCase,
    /// Cancelled when the server starts shutting down
    pub shutdown: CancellationToken,
    started_at: Instant,
}

impl AppState {
    pub fn new(quiz: RunQuizTurnUseCase) -> Self {
        Self {
            quiz,
            shutdown: CancellationToken::new(),
            started_at: Instant::now(),
        }
    }

    /// Use an externally owned shutdown token
    pub fn with_shutdown(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
