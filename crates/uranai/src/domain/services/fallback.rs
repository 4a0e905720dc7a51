//! Embedded fallback ranking and fetch-result resolution

use chrono::NaiveDate;

use crate::domain::entities::{RankingData, RankingEntry};
use crate::domain::errors::FetchError;

const FALLBACK: [(u32, &str, &str, &str); 12] = [
    (1, "leo", "Your charm is at its peak. Step into the spotlight without hesitation.", "gold accessory"),
    (2, "pisces", "Intuition guides you well today. Trust the quiet voice inside.", "aquamarine stone"),
    (3, "aries", "Bold moves pay off. A fresh start brings unexpected rewards.", "red handkerchief"),
    (4, "sagittarius", "Curiosity opens a new door. Say yes to a spontaneous plan.", "travel guidebook"),
    (5, "libra", "Harmony in relationships lifts your mood. Share a kind word.", "rose-scented candle"),
    (6, "gemini", "Conversations spark great ideas. Write down what inspires you.", "yellow notebook"),
    (7, "taurus", "Steady effort is noticed. Treat yourself to something delicious.", "green tea"),
    (8, "cancer", "Time at home recharges you. Reach out to family.", "silver locket"),
    (9, "aquarius", "An unusual idea needs more time. Keep it close for now.", "blue pen"),
    (10, "virgo", "Small details demand attention. Double-check before you send.", "lavender sachet"),
    (11, "scorpio", "Hold back strong words today. Patience protects your plans.", "black umbrella"),
    (12, "capricorn", "Rest is progress too. Slow down and the path will clear.", "warm scarf"),
];

/// Hardcoded ranking used when the live fetch fails.
///
/// Covers all twelve signs ranked 1 to 12, dated to `date`.
pub fn fallback_ranking(date: NaiveDate) -> RankingData {
    RankingData {
        date,
        ranking: FALLBACK
            .iter()
            .map(|(rank, sign, comment, lucky_item)| {
                RankingEntry::new(*rank, *sign, *comment, *lucky_item)
            })
            .collect(),
    }
}

/// Where a ranking snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingOrigin {
    Live,
    Fallback,
}

impl std::fmt::Display for RankingOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankingOrigin::Live => write!(f, "live"),
            RankingOrigin::Fallback => write!(f, "fallback"),
        }
    }
}

/// The ranking a run proceeds with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingSnapshot {
    pub data: RankingData,
    pub origin: RankingOrigin,
}

/// Consume a fetch outcome: live data passes through, any failure becomes
/// the fallback dataset dated `today`.
pub fn resolve_ranking(
    fetched: Result<RankingData, FetchError>,
    today: NaiveDate,
) -> RankingSnapshot {
    match fetched {
        Ok(data) => RankingSnapshot {
            data,
            origin: RankingOrigin::Live,
        },
        Err(_) => RankingSnapshot {
            data: fallback_ranking(today),
            origin: RankingOrigin::Fallback,
        },
    }
}
