//! Domain Services
//!
//! Static theme tables and the pure functions built on them.

mod calendar;
mod fallback;
mod rank_theme;
mod renderer;
mod selector;
mod visuals;

pub use calendar::*;
pub use fallback::*;
pub use rank_theme::*;
pub use renderer::*;
pub use selector::*;
pub use visuals::*;
