//! Rank theme table for the three podium positions

use crate::domain::value_objects::Podium;

/// Decoration layered on top of a sign's scene when it places in the top three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankTheme {
    pub effect: &'static str,
    pub overlay_label: &'static str,
    pub overlay: &'static str,
    pub energy: &'static str,
}

impl RankTheme {
    pub fn of(podium: Podium) -> Self {
        match podium {
            Podium::First => Self {
                effect: "a brilliant golden aura bursting outward with shimmering fireworks and a cascade of golden stardust",
                overlay_label: "1st",
                overlay: "A radiant golden crown emblem bearing the text \"1st\" gleams in the upper corner",
                energy: "triumphant, unstoppable",
            },
            Podium::Second => Self {
                effect: "a silver halo pulsing gently with swirling moonlight ribbons and glittering silver sparkles",
                overlay_label: "2nd",
                overlay: "A polished silver medal emblem bearing the text \"2nd\" shines in the upper corner",
                energy: "uplifting, graceful",
            },
            Podium::Third => Self {
                effect: "warm bronze light rays sweeping across the scene with drifting amber embers and softly twinkling stars",
                overlay_label: "3rd",
                overlay: "A warm bronze medal emblem bearing the text \"3rd\" glows in the upper corner",
                energy: "hopeful, steady",
            },
        }
    }

    /// Lookup by raw rank; anything outside 1..=3 gets the third-place theme.
    pub fn for_rank(rank: u32) -> Self {
        Self::of(Podium::from_rank(rank))
    }
}
