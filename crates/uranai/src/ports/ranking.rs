//! Ranking Provider Port
//!
//! Abstract interface for fetching the daily ranking.

use async_trait::async_trait;

use crate::domain::{FetchError, RankingData};

/// Source of today's sign ranking
#[async_trait]
pub trait RankingProvider: Send + Sync {
    /// Fetch today's ranking in the given language.
    ///
    /// Exactly one attempt; no retry.
    async fn fetch_today(&self, lang: &str) -> Result<RankingData, FetchError>;
}
