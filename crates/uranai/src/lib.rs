//! Uranai Domain Library
//!
//! Core types for generating zodiac horoscope video prompts.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure data and logic, no I/O
//!   - `value_objects/`: Closed key types (ZodiacSign, Element, Podium)
//!   - `entities/`: Records exchanged with the ranking API and written to disk
//!   - `services/`: Theme tables, prompt renderer, top-N selector, fallback data
//!   - `errors/`: Error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `RankingProvider`: source of today's ranking
//!
//! # Usage
//!
//! ```rust
//! use uranai::{render_prompt, PromptRequest};
//!
//! let prompt = render_prompt(&PromptRequest::new("aries"));
//! assert!(prompt.contains("Mood: powerful, energetic, bold."));
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    fallback_ranking, jst_date, render_prompt, resolve_ranking, select_top, today_jst, Element,
    FetchError, Podium, PromptRequest, PromptResult, RankTheme, RankingData, RankingEntry,
    RankingOrigin, RankingSnapshot, VideoLink, ZodiacSign, ZodiacVisual, TOP_N,
};
pub use ports::RankingProvider;
