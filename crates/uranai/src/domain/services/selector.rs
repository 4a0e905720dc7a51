//! Top-N selection over a ranking

use crate::domain::entities::{RankingData, RankingEntry};

/// Number of decorated positions in the daily video set
pub const TOP_N: u32 = 3;

/// Entries with `1 <= rank <= n`, in source order.
///
/// This is a filter, not a sort: unsorted input stays unsorted. Rank 0 is
/// not a position and is dropped.
pub fn select_top(data: &RankingData, n: u32) -> Vec<RankingEntry> {
    data.ranking
        .iter()
        .filter(|entry| (1..=n).contains(&entry.rank))
        .cloned()
        .collect()
}
