//! Ranking - Daily sign ordering as served by the ranking API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the daily ranking.
///
/// `sign` stays a plain string: it comes from outside and is only
/// resolved against the visual table at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: u32,
    pub sign: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub lucky_item: String,
}

impl RankingEntry {
    pub fn new(
        rank: u32,
        sign: impl Into<String>,
        comment: impl Into<String>,
        lucky_item: impl Into<String>,
    ) -> Self {
        Self {
            rank,
            sign: sign.into(),
            comment: comment.into(),
            lucky_item: lucky_item.into(),
        }
    }
}

/// Body of `GET /api/today`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingData {
    pub date: NaiveDate,
    pub ranking: Vec<RankingEntry>,
}
