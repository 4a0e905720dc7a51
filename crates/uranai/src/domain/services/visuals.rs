//! Visual theme table, one entry per sign

use crate::domain::value_objects::{Element, ZodiacSign};

/// Descriptive attributes used to paint a sign's scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacVisual {
    pub symbol: &'static str,
    pub glyph: &'static str,
    pub element: Element,
    pub color: &'static str,
    pub scene: &'static str,
    pub mood: &'static str,
}

impl ZodiacVisual {
    pub fn of(sign: ZodiacSign) -> Self {
        match sign {
            ZodiacSign::Aries => Self {
                symbol: "ram",
                glyph: "the Aries zodiac glyph (two curved horns symbol)",
                element: Element::Fire,
                color: "crimson red and gold",
                scene: "a majestic ram standing on a volcanic mountain peak at sunrise, flames dancing around its golden horns",
                mood: "powerful, energetic, bold",
            },
            ZodiacSign::Taurus => Self {
                symbol: "bull",
                glyph: "the Taurus zodiac glyph (a circle with horns symbol)",
                element: Element::Earth,
                color: "emerald green and bronze",
                scene: "a noble bull resting in a lush flower garden with cherry blossoms falling, golden light filtering through trees",
                mood: "serene, luxurious, grounded",
            },
            ZodiacSign::Gemini => Self {
                symbol: "twins",
                glyph: "the Gemini zodiac glyph (two vertical lines symbol)",
                element: Element::Air,
                color: "bright yellow and silver",
                scene: "twin ethereal figures dancing among floating books and glowing butterflies in a starlit sky",
                mood: "playful, intellectual, dynamic",
            },
            ZodiacSign::Cancer => Self {
                symbol: "crab",
                glyph: "the Cancer zodiac glyph (two curved shapes symbol)",
                element: Element::Water,
                color: "pearl white and moonlit silver",
                scene: "a luminous crab on a moonlit beach with gentle waves, the full moon reflecting on the ocean surface",
                mood: "nurturing, mystical, gentle",
            },
            ZodiacSign::Leo => Self {
                symbol: "lion",
                glyph: "the Leo zodiac glyph (a curved lion tail symbol)",
                element: Element::Fire,
                color: "royal gold and orange",
                scene: "a magnificent lion with a golden mane standing proudly on a sunlit savanna, sun rays creating a crown of light",
                mood: "regal, confident, radiant",
            },
            ZodiacSign::Virgo => Self {
                symbol: "maiden",
                glyph: "the Virgo zodiac glyph (an M with a loop symbol)",
                element: Element::Earth,
                color: "soft green and lavender",
                scene: "an elegant maiden in a wheat field holding a glowing crystal, surrounded by healing herbs and butterflies",
                mood: "graceful, pure, meticulous",
            },
            ZodiacSign::Libra => Self {
                symbol: "scales",
                glyph: "the Libra zodiac glyph (balanced scales symbol)",
                element: Element::Air,
                color: "pastel pink and sky blue",
                scene: "golden balance scales floating in a rose garden with rainbow light beams, petals swirling in harmony",
                mood: "harmonious, elegant, balanced",
            },
            ZodiacSign::Scorpio => Self {
                symbol: "scorpion",
                glyph: "the Scorpio zodiac glyph (an M with an arrow tail symbol)",
                element: Element::Water,
                color: "deep crimson and black",
                scene: "a mystical scorpion with glowing ruby eyes emerging from dark waters under a blood-red nebula sky",
                mood: "intense, mysterious, transformative",
            },
            ZodiacSign::Sagittarius => Self {
                symbol: "archer",
                glyph: "the Sagittarius zodiac glyph (an arrow pointing up-right symbol)",
                element: Element::Fire,
                color: "royal purple and indigo",
                scene: "a centaur archer shooting a flaming arrow across a vast galaxy, stars exploding into constellations",
                mood: "adventurous, free, philosophical",
            },
            ZodiacSign::Capricorn => Self {
                symbol: "sea-goat",
                glyph: "the Capricorn zodiac glyph (a V with a curved tail symbol)",
                element: Element::Earth,
                color: "dark brown and charcoal",
                scene: "a determined mountain goat climbing a snowy peak at dawn, reaching the summit as golden light breaks through clouds",
                mood: "ambitious, disciplined, triumphant",
            },
            ZodiacSign::Aquarius => Self {
                symbol: "water-bearer",
                glyph: "the Aquarius zodiac glyph (two wavy lines symbol)",
                element: Element::Air,
                color: "electric blue and turquoise",
                scene: "an ethereal figure pouring luminous water that transforms into lightning and digital streams across a futuristic cityscape",
                mood: "innovative, visionary, revolutionary",
            },
            ZodiacSign::Pisces => Self {
                symbol: "fish",
                glyph: "the Pisces zodiac glyph (two curved lines tied together symbol)",
                element: Element::Water,
                color: "ocean blue and iridescent violet",
                scene: "two koi fish swimming in a circle through an underwater galaxy, surrounded by bioluminescent coral and aurora light",
                mood: "dreamy, spiritual, enchanting",
            },
        }
    }

    /// Lookup by raw identifier; misses resolve to the default sign.
    pub fn lookup(sign: &str) -> Self {
        Self::of(ZodiacSign::resolve(sign))
    }
}
