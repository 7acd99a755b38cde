//! Shared world state for report resolution BDD scenarios.

use std::sync::Arc;

use amigo_fiel::{
    listing::domain::EditToken,
    media::adapters::memory::InMemoryImageStore,
    post::{
        adapters::memory::InMemoryPostRepository,
        domain::Post,
        services::{PostBoardError, PostBoardService},
    },
    vault::adapters::memory::InMemoryTokenVault,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoard = PostBoardService<InMemoryPostRepository, InMemoryImageStore, DefaultClock>;

/// Scenario world for report resolution behaviour tests.
pub struct ResolutionWorld {
    pub board: TestBoard,
    pub vault: InMemoryTokenVault,
    pub published: Option<Post>,
    pub pending_token: Option<EditToken>,
    pub last_result: Option<Result<Post, PostBoardError>>,
}

impl ResolutionWorld {
    /// Creates a world with an empty board and vault.
    #[must_use]
    pub fn new() -> Self {
        let board = PostBoardService::new(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryImageStore::new("http://localhost:8080")),
            Arc::new(DefaultClock),
        );

        Self {
            board,
            vault: InMemoryTokenVault::new(),
            published: None,
            pending_token: None,
            last_result: None,
        }
    }

    /// Returns the report published by the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error if no report was published yet.
    pub fn published(&self) -> Result<&Post, eyre::Report> {
        self.published
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing published report in scenario world"))
    }
}

impl Default for ResolutionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ResolutionWorld {
    ResolutionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
