//! Podium - The three decorated positions of the daily ranking

use serde::{Deserialize, Serialize};

/// A top-three placement.
///
/// Any rank outside 1..=3 maps to [`Podium::Third`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Podium {
    First,
    Second,
    Third,
}

impl Podium {
    pub const ALL: [Podium; 3] = [Podium::First, Podium::Second, Podium::Third];

    pub fn from_rank(rank: u32) -> Self {
        match rank {
            1 => Podium::First,
            2 => Podium::Second,
            _ => Podium::Third,
        }
    }

    pub fn rank(self) -> u32 {
        match self {
            Podium::First => 1,
            Podium::Second => 2,
            Podium::Third => 3,
        }
    }
}
