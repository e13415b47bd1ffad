//! Block-art glyphs for the characters that appear in an `MM:SS` readout
pub const ROWS: usize = 5;

pub type Glyph = [&'static str; ROWS];

const ZERO: Glyph = ["██████", "██  ██", "██  ██", "██  ██", "██████"];
const ONE: Glyph = ["   ██ ", "  ███ ", "   ██ ", "   ██ ", "   ██ "];
const TWO: Glyph = ["██████", "    ██", "██████", "██    ", "██████"];
const THREE: Glyph = ["██████", "    ██", " █████", "    ██", "██████"];
const FOUR: Glyph = ["██  ██", "██  ██", "██████", "    ██", "    ██"];
const FIVE: Glyph = ["██████", "██    ", "██████", "    ██", "██████"];
const SIX: Glyph = ["██████", "██    ", "██████", "██  ██", "██████"];
const SEVEN: Glyph = ["██████", "    ██", "   ██ ", "  ██  ", "  ██  "];
const EIGHT: Glyph = [" ████ ", "██  ██", " ████ ", "██  ██", " ████ "];
const NINE: Glyph = ["██████", "██  ██", "██████", "    ██", " █████"];
const COLON: Glyph = ["  ", "██", "  ", "██", "  "];

pub fn glyph(ch: char) -> Option<&'static Glyph> {
    match ch {
        '0' => Some(&ZERO),
        '1' => Some(&ONE),
        '2' => Some(&TWO),
        '3' => Some(&THREE),
        '4' => Some(&FOUR),
        '5' => Some(&FIVE),
        '6' => Some(&SIX),
        '7' => Some(&SEVEN),
        '8' => Some(&EIGHT),
        '9' => Some(&NINE),
        ':' => Some(&COLON),
        _ => None,
    }
}
