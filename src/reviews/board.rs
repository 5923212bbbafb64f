//! Session state for the reviews section: mock data first, one fetch, one
//! transition to live or fallback, and that's it until the process restarts.

use super::mock::mock_reviews;
use super::model::Review;
use super::service::ReviewService;
use arc_swap::ArcSwap;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

/// Lifecycle of the single live-review fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewPhase {
    Initial,
    Pending,
    Live,
    Fallback,
}

impl ReviewPhase {
    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Live | Self::Fallback)
    }
}

#[derive(Debug)]
pub struct BoardState {
    pub phase: ReviewPhase,
    live: Option<Vec<Review>>,
}

impl BoardState {
    fn initial() -> Self {
        Self {
            phase: ReviewPhase::Initial,
            live: None,
        }
    }

    fn pending() -> Self {
        Self {
            phase: ReviewPhase::Pending,
            live: None,
        }
    }

    fn resolved(live: Vec<Review>) -> Self {
        if live.is_empty() {
            Self {
                phase: ReviewPhase::Fallback,
                live: None,
            }
        } else {
            Self {
                phase: ReviewPhase::Live,
                live: Some(live),
            }
        }
    }

    /// What the visitor should see right now: the live set once resolved
    /// successfully, the immutable mock catalog otherwise.
    pub fn reviews(&self) -> &[Review] {
        self.live.as_deref().unwrap_or_else(|| mock_reviews())
    }

    pub fn is_live(&self) -> bool {
        self.phase == ReviewPhase::Live
    }
}

/// The state machine itself. `ensure_started` is callable from any handler on
/// any request; only the first call launches the fetch, and resolution is
/// terminal for the life of the process.
pub struct ReviewBoard {
    state: ArcSwap<BoardState>,
    started: AtomicBool,
    resolved_tx: watch::Sender<bool>,
}

impl ReviewBoard {
    pub fn new() -> Self {
        let (resolved_tx, _) = watch::channel(false);
        Self {
            state: ArcSwap::from_pointee(BoardState::initial()),
            started: AtomicBool::new(false),
            resolved_tx,
        }
    }

    pub fn snapshot(&self) -> Arc<BoardState> {
        self.state.load_full()
    }

    /// Kick off the single fetch, fire-and-forget. Later calls are no-ops.
    pub fn ensure_started(self: Arc<Self>, service: Arc<ReviewService>) {
        self.ensure_started_with(async move { service.fetch_reviews().await });
    }

    /// Same single-shot contract with an arbitrary fetch future (test seam).
    pub fn ensure_started_with<F>(self: Arc<Self>, fetch: F)
    where
        F: Future<Output = Vec<Review>> + Send + 'static,
    {
        if self.started.swap(true, Ordering::SeqCst) {
            return;
        }
        self.state.store(Arc::new(BoardState::pending()));

        tokio::spawn(async move {
            let live = fetch.await;
            self.resolve(live);
        });
    }

    fn resolve(&self, live: Vec<Review>) {
        if live.is_empty() {
            tracing::info!("review fetch resolved without live data; keeping mock dataset");
        } else {
            tracing::info!(count = live.len(), "review fetch resolved with live data");
        }
        self.state.store(Arc::new(BoardState::resolved(live)));
        self.resolved_tx.send_replace(true);
    }

    /// Wait until the fetch has resolved; returns immediately if it already
    /// has. Callers must `ensure_started` first or this never completes.
    pub async fn resolved(&self) {
        let mut rx = self.resolved_tx.subscribe();
        // The sender lives inside self, so wait_for cannot fail here.
        let _ = rx.wait_for(|resolved| *resolved).await;
    }
}

impl Default for ReviewBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reviews::model::ReviewSource;
    use std::sync::atomic::AtomicUsize;

    fn live_review(author: &str) -> Review {
        Review {
            id: "google-live-0".into(),
            author: author.into(),
            rating: 5,
            text: "Fresh from the model.".into(),
            date: "Recent".into(),
            source: ReviewSource::Google,
            url: Some("https://maps.example/x".into()),
        }
    }

    #[tokio::test]
    async fn starts_in_initial_with_mock_reviews() {
        let board = ReviewBoard::new();
        let snapshot = board.snapshot();
        assert_eq!(snapshot.phase, ReviewPhase::Initial);
        assert!(!snapshot.is_live());
        assert_eq!(snapshot.reviews(), mock_reviews());
    }

    #[tokio::test]
    async fn live_result_replaces_mock_set() {
        let board = Arc::new(ReviewBoard::new());
        Arc::clone(&board).ensure_started_with(async { vec![live_review("Jane")] });
        board.resolved().await;

        let snapshot = board.snapshot();
        assert_eq!(snapshot.phase, ReviewPhase::Live);
        assert!(snapshot.is_live());
        assert_eq!(snapshot.reviews().len(), 1);
        assert_eq!(snapshot.reviews()[0].author, "Jane");
    }

    #[tokio::test]
    async fn empty_result_resolves_to_fallback_with_mock_intact() {
        let board = Arc::new(ReviewBoard::new());
        Arc::clone(&board).ensure_started_with(async { Vec::new() });
        board.resolved().await;

        let snapshot = board.snapshot();
        assert_eq!(snapshot.phase, ReviewPhase::Fallback);
        assert!(!snapshot.is_live());
        assert_eq!(snapshot.reviews(), mock_reviews());
    }

    #[tokio::test]
    async fn fetch_runs_exactly_once() {
        let board = Arc::new(ReviewBoard::new());
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let calls = Arc::clone(&calls);
            Arc::clone(&board).ensure_started_with(async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Vec::new()
            });
        }
        board.resolved().await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn pending_until_the_fetch_returns() {
        let board = Arc::new(ReviewBoard::new());
        let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();

        Arc::clone(&board).ensure_started_with(async move {
            let _ = release_rx.await;
            vec![live_review("Late")]
        });
        assert_eq!(board.snapshot().phase, ReviewPhase::Pending);
        assert_eq!(board.snapshot().reviews(), mock_reviews());

        release_tx.send(()).unwrap();
        board.resolved().await;
        assert_eq!(board.snapshot().phase, ReviewPhase::Live);
    }

    #[tokio::test]
    async fn mock_dataset_survives_any_number_of_sessions() {
        let before = mock_reviews().to_vec();

        let fallback_board = Arc::new(ReviewBoard::new());
        Arc::clone(&fallback_board).ensure_started_with(async { Vec::new() });
        fallback_board.resolved().await;

        let live_board = Arc::new(ReviewBoard::new());
        Arc::clone(&live_board).ensure_started_with(async { vec![live_review("Jane")] });
        live_board.resolved().await;

        assert_eq!(mock_reviews(), before.as_slice());
    }
}
