//! Seam between the fetcher and the network

use crate::error::BoxError;
use crate::key::PuzzleKey;
use aoc_http_client::{AocClient, AocError, InputResponse};
use std::future::Future;

/// Performs the single network request behind a cache miss
///
/// Implementations report any status they receive; judging it is the
/// fetcher's job. Errors are handed to the caller unchanged inside
/// [`FetchError::Transport`](crate::FetchError::Transport).
pub trait Transport {
    type Error: Into<BoxError>;

    fn request_input(
        &self,
        key: PuzzleKey,
        session: &str,
    ) -> impl Future<Output = Result<InputResponse, Self::Error>> + Send;
}

impl Transport for AocClient {
    type Error = AocError;

    async fn request_input(&self, key: PuzzleKey, session: &str) -> Result<InputResponse, AocError> {
        self.fetch_input(key.year(), key.day(), session).await
    }
}
