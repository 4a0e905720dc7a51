//! Element - Classical element of a zodiac sign

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Fire => write!(f, "fire"),
            Element::Earth => write!(f, "earth"),
            Element::Air => write!(f, "air"),
            Element::Water => write!(f, "water"),
        }
    }
}
