//! Domain Entities

mod prompt;
mod ranking;
mod video;

pub use prompt::*;
pub use ranking::*;
pub use video::*;
