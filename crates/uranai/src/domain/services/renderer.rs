//! Prompt renderer
//!
//! Turns a sign (and optionally its ranking context) into one paragraph of
//! video-generation prompt text. Deterministic: same request, same text.

use super::{RankTheme, ZodiacVisual};
use crate::domain::entities::RankingEntry;

const OPENING: &str = "Create a stunning 10-second zodiac horoscope video.";
const DEFAULT_EFFECTS: &str =
    "gentle sparkles and radiant light particles floating, soft celestial glow surrounding the scene";
const STYLE: &str = "Style: cinematic, ethereal, anime-inspired celestial art.";
const CAMERA: &str = "Camera: slow dramatic zoom with gentle orbit.";

/// Inputs to [`render_prompt`].
///
/// `comment` is filled in by [`PromptRequest::from_entry`] but is not part
/// of the rendered text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptRequest<'a> {
    pub sign: &'a str,
    pub rank: Option<u32>,
    pub comment: Option<&'a str>,
    pub lucky_item: Option<&'a str>,
}

impl<'a> PromptRequest<'a> {
    pub fn new(sign: &'a str) -> Self {
        Self {
            sign,
            ..Default::default()
        }
    }

    pub fn from_entry(entry: &'a RankingEntry) -> Self {
        Self {
            sign: &entry.sign,
            rank: Some(entry.rank),
            comment: Some(&entry.comment),
            lucky_item: Some(&entry.lucky_item),
        }
    }

    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn with_lucky_item(mut self, lucky_item: &'a str) -> Self {
        self.lucky_item = Some(lucky_item);
        self
    }
}

/// Render the prompt paragraph.
///
/// Without a rank only the sign's visual theme is used; with a rank the
/// podium overlay, rank effects and an atmosphere sentence are added.
pub fn render_prompt(request: &PromptRequest<'_>) -> String {
    let visual = ZodiacVisual::lookup(request.sign);
    let theme = request.rank.map(RankTheme::for_rank);

    let mut clauses = vec![
        OPENING.to_string(),
        format!("Scene: {}.", visual.scene),
        format!(
            "In the sky above, a large glowing {} shines as a celestial emblem.",
            visual.glyph
        ),
    ];

    if let Some(theme) = &theme {
        clauses.push(format!("{}.", theme.overlay));
    }

    clauses.push(format!("Color palette: {}.", visual.color));
    clauses.push(format!("Mood: {}.", visual.mood));

    match &theme {
        Some(theme) => {
            clauses.push(format!("Visual effects: {}.", theme.effect));
            clauses.push(atmosphere(theme, request.lucky_item));
        }
        None => clauses.push(format!("Visual effects: {}.", DEFAULT_EFFECTS)),
    }

    clauses.push(STYLE.to_string());
    clauses.push(CAMERA.to_string());

    clauses.join(" ")
}

fn atmosphere(theme: &RankTheme, lucky_item: Option<&str>) -> String {
    match lucky_item.map(str::trim).filter(|item| !item.is_empty()) {
        Some(item) => format!(
            "The atmosphere radiates {} energy, with {} glinting in the scene as today's lucky charm.",
            theme.energy, item
        ),
        None => format!("The atmosphere radiates {} energy.", theme.energy),
    }
}
