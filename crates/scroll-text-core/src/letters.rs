use crate::random::{next_speed, RandomSource};

/// One rendered glyph and its parallax factor.
#[derive(Clone, Debug, PartialEq)]
pub struct LetterUnit {
    pub glyph: char,
    /// In [0, 1); fixed until the next render.
    pub speed: f64,
}

/// Split `text` into letter units, dropping whitespace and keeping order.
/// Each retained character gets a fresh speed from `source`.
pub fn split_letters<R: RandomSource + ?Sized>(text: &str, source: &mut R) -> Vec<LetterUnit> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|glyph| LetterUnit {
            glyph,
            speed: next_speed(source),
        })
        .collect()
}

pub fn glyphs(letters: &[LetterUnit]) -> String {
    letters.iter().map(|l| l.glyph).collect()
}
