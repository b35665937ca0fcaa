//! Fetch/load state machine and the liveness guard around the async fetch

use crate::catalog::CatalogSource;
use crate::error::FetchError;
use crate::types::Catalog;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Outcome of a catalog fetch
pub type FetchOutcome = std::result::Result<Catalog, FetchError>;

/// `Loading` until the one fetch completes, then `Ready` or `Errored` for good
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Catalog),
    Errored(String),
}

/// Serializable summary of a [`LoadState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LoadStatus {
    Loading,
    Ready { books: usize },
    Errored { message: String },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            LoadState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Errored(message) => Some(message),
            _ => None,
        }
    }

    pub fn status(&self) -> LoadStatus {
        match self {
            LoadState::Loading => LoadStatus::Loading,
            LoadState::Ready(catalog) => LoadStatus::Ready {
                books: catalog.len(),
            },
            LoadState::Errored(message) => LoadStatus::Errored {
                message: message.clone(),
            },
        }
    }

    /// Apply a fetch outcome. Only `Loading` accepts one; returns whether the
    /// state changed.
    pub fn settle(&mut self, outcome: FetchOutcome) -> bool {
        if !self.is_loading() {
            tracing::warn!("Ignoring catalog outcome, load already settled");
            return false;
        }
        *self = match outcome {
            Ok(catalog) => LoadState::Ready(catalog),
            Err(err) => {
                tracing::error!("Failed to load catalog: {}", err);
                LoadState::Errored(err.to_string())
            }
        };
        true
    }
}

/// Liveness guard owned by a view. Dropping it (or calling
/// [`Liveness::tear_down`]) marks every issued token dead.
#[derive(Debug)]
pub struct Liveness {
    alive: Arc<AtomicBool>,
}

/// Handle given to background work so it can check the view is still there
#[derive(Debug, Clone)]
pub struct LiveToken {
    alive: Arc<AtomicBool>,
}

impl Liveness {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn token(&self) -> LiveToken {
        LiveToken {
            alive: Arc::clone(&self.alive),
        }
    }

    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn tear_down(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Liveness {
    fn drop(&mut self) {
        self.tear_down();
    }
}

impl LiveToken {
    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

/// A fetch running in the background.
///
/// Resolves to `Some(outcome)`, or `None` when the outcome was discarded
/// because the view was torn down first.
#[derive(Debug)]
pub struct PendingFetch {
    rx: oneshot::Receiver<FetchOutcome>,
}

impl Future for PendingFetch {
    type Output = Option<FetchOutcome>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(|received| received.ok())
    }
}

/// Run `source.fetch()` on the tokio runtime. The outcome is delivered only
/// while `token` is live.
pub fn spawn_fetch(source: Arc<dyn CatalogSource>, token: LiveToken) -> PendingFetch {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        tracing::debug!("Fetching catalog from {}", source.describe());
        let outcome = source.fetch().await.map(Catalog::new);
        if !token.is_live() {
            tracing::debug!("View torn down, discarding catalog outcome");
            return;
        }
        // Receiver gone means nobody is waiting any more
        let _ = tx.send(outcome);
    });
    PendingFetch { rx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Book;

    fn catalog() -> Catalog {
        Catalog::new(vec![Book::new("Frog and Toad", "Lobel", "frog.jpg", "1")])
    }

    #[test]
    fn test_loading_to_ready_is_terminal() {
        let mut state = LoadState::default();
        assert!(state.is_loading());
        assert!(state.settle(Ok(catalog())));
        assert_eq!(state.status(), LoadStatus::Ready { books: 1 });

        assert!(!state.settle(Err(FetchError::Status(500))));
        assert!(state.catalog().is_some());
    }

    #[test]
    fn test_loading_to_errored_is_terminal() {
        let mut state = LoadState::default();
        assert!(state.settle(Err(FetchError::Status(502))));
        assert!(state.catalog().is_none());
        assert!(state.error().unwrap().contains("502"));

        assert!(!state.settle(Ok(catalog())));
        assert!(state.error().is_some());
    }

    #[test]
    fn test_liveness_drop_kills_tokens() {
        let liveness = Liveness::new();
        let token = liveness.token();
        assert!(token.is_live());
        drop(liveness);
        assert!(!token.is_live());
    }
}
