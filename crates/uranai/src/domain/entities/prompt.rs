//! PromptResult - One generated video prompt, as persisted to disk

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RankingEntry;
use crate::domain::value_objects::ZodiacSign;

/// A rendered prompt plus the context it was rendered from.
///
/// Ranking fields are absent in the all-signs variant and are then
/// omitted from the JSON record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    pub sign: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lucky_item: Option<String>,
    #[serde(rename = "sora_prompt")]
    pub prompt: String,
    pub date: NaiveDate,
}

impl PromptResult {
    /// Record for the all-signs variant
    pub fn for_sign(sign: impl Into<String>, prompt: String, date: NaiveDate) -> Self {
        Self {
            rank: None,
            sign: sign.into(),
            comment: None,
            lucky_item: None,
            prompt,
            date,
        }
    }

    /// Record for a ranking entry.
    ///
    /// The sign is stored as the identifier the renderer resolved it to, so
    /// "Leo" becomes "leo" and unknown signs become "aries".
    pub fn for_entry(entry: &RankingEntry, prompt: String, date: NaiveDate) -> Self {
        Self {
            rank: Some(entry.rank),
            sign: ZodiacSign::resolve(&entry.sign).as_str().to_string(),
            comment: Some(entry.comment.clone()),
            lucky_item: Some(entry.lucky_item.clone()),
            prompt,
            date,
        }
    }
}
