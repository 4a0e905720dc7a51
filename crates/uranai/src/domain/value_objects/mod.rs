//! Value Objects
//!
//! Closed key types for the lookup tables.

mod element;
mod podium;
mod zodiac_sign;

pub use element::*;
pub use podium::*;
pub use zodiac_sign::*;
