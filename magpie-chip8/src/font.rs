//! Hex digit glyph tables
//!
//! Every style carries a small 5-byte-per-glyph table; styles from machines
//! that had large glyphs also carry a big 10-byte-per-glyph table, and the
//! rest get an all-zero big table so `Fx30` stays well-defined.

/// Size of the small font table (16 glyphs of 5 bytes)
pub(crate) const SMALL_BYTES: usize = 16 * 5;

/// Size of the big font table (16 glyphs of 10 bytes)
pub(crate) const BIG_BYTES: usize = 16 * 10;

/// Selects which glyph set [`crate::Chip8::reset`] writes at address 0
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum FontStyle {
    /// The Octo-style font, with big glyphs for all 16 digits
    #[default]
    Octo,
    /// COSMAC VIP
    Vip,
    /// DREAM 6800
    Dream6800,
    /// ETI-660
    Eti660,
    /// Fish'N'Chips, with its 7x9 big glyphs
    Fish,
    /// SCHIP: Octo small glyphs, big glyphs for digits 0-9 only
    Schip,
}

impl FontStyle {
    /// Small glyph table for this style
    pub(crate) fn small(&self) -> &'static [u8; SMALL_BYTES] {
        match self {
            FontStyle::Octo | FontStyle::Schip => &SMALL_OCTO,
            FontStyle::Vip => &SMALL_VIP,
            FontStyle::Dream6800 => &SMALL_DREAM6800,
            FontStyle::Eti660 => &SMALL_ETI660,
            FontStyle::Fish => &SMALL_FISH,
        }
    }

    /// Big glyph table for this style (all zero if the variant had none)
    pub(crate) fn big(&self) -> &'static [u8; BIG_BYTES] {
        match self {
            FontStyle::Octo => &BIG_OCTO,
            FontStyle::Schip => &BIG_SCHIP,
            FontStyle::Fish => &BIG_FISH,
            _ => &BIG_NONE,
        }
    }
}

const SMALL_OCTO: [u8; SMALL_BYTES] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

const SMALL_VIP: [u8; SMALL_BYTES] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, //
    0x60, 0x20, 0x20, 0x20, 0x70, //
    0xF0, 0x10, 0xF0, 0x80, 0xF0, //
    0xF0, 0x10, 0xF0, 0x10, 0xF0, //
    0xA0, 0xA0, 0xF0, 0x20, 0x20, //
    0xF0, 0x80, 0xF0, 0x10, 0xF0, //
    0xF0, 0x80, 0xF0, 0x90, 0xF0, //
    0xF0, 0x10, 0x10, 0x10, 0x10, //
    0xF0, 0x90, 0xF0, 0x90, 0xF0, //
    0xF0, 0x90, 0xF0, 0x10, 0xF0, //
    0xF0, 0x90, 0xF0, 0x90, 0x90, //
    0xF0, 0x50, 0x70, 0x50, 0xF0, //
    0xF0, 0x80, 0x80, 0x80, 0xF0, //
    0xF0, 0x50, 0x50, 0x50, 0xF0, //
    0xF0, 0x80, 0xF0, 0x80, 0xF0, //
    0xF0, 0x80, 0xF0, 0x80, 0x80, //
];

const SMALL_DREAM6800: [u8; SMALL_BYTES] = [
    0xE0, 0xA0, 0xA0, 0xA0, 0xE0, //
    0x40, 0x40, 0x40, 0x40, 0x40, //
    0xE0, 0x20, 0xE0, 0x80, 0xE0, //
    0xE0, 0x20, 0xE0, 0x20, 0xE0, //
    0x80, 0xA0, 0xA0, 0xE0, 0x20, //
    0xE0, 0x80, 0xE0, 0x20, 0xE0, //
    0xE0, 0x80, 0xE0, 0xA0, 0xE0, //
    0xE0, 0x20, 0x20, 0x20, 0x20, //
    0xE0, 0xA0, 0xE0, 0xA0, 0xE0, //
    0xE0, 0xA0, 0xE0, 0x20, 0xE0, //
    0xE0, 0xA0, 0xE0, 0xA0, 0xA0, //
    0xC0, 0xA0, 0xE0, 0xA0, 0xC0, //
    0xE0, 0x80, 0x80, 0x80, 0xE0, //
    0xC0, 0xA0, 0xA0, 0xA0, 0xC0, //
    0xE0, 0x80, 0xE0, 0x80, 0xE0, //
    0xE0, 0x80, 0xC0, 0x80, 0x80, //
];

const SMALL_ETI660: [u8; SMALL_BYTES] = [
    0xE0, 0xA0, 0xA0, 0xA0, 0xE0, //
    0x20, 0x20, 0x20, 0x20, 0x20, //
    0xE0, 0x20, 0xE0, 0x80, 0xE0, //
    0xE0, 0x20, 0xE0, 0x20, 0xE0, //
    0xA0, 0xA0, 0xE0, 0x20, 0x20, //
    0xE0, 0x80, 0xE0, 0x20, 0xE0, //
    0xE0, 0x80, 0xE0, 0xA0, 0xE0, //
    0xE0, 0x20, 0x20, 0x20, 0x20, //
    0xE0, 0xA0, 0xE0, 0xA0, 0xE0, //
    0xE0, 0xA0, 0xE0, 0x20, 0xE0, //
    0xE0, 0xA0, 0xE0, 0xA0, 0xA0, //
    0x80, 0x80, 0xE0, 0xA0, 0xE0, //
    0xE0, 0x80, 0x80, 0x80, 0xE0, //
    0x20, 0x20, 0xE0, 0xA0, 0xE0, //
    0xE0, 0x80, 0xE0, 0x80, 0xE0, //
    0xE0, 0x80, 0xC0, 0x80, 0x80, //
];

const SMALL_FISH: [u8; SMALL_BYTES] = [
    0x60, 0xA0, 0xA0, 0xA0, 0xC0, //
    0x40, 0xC0, 0x40, 0x40, 0xE0, //
    0xC0, 0x20, 0x40, 0x80, 0xE0, //
    0xC0, 0x20, 0x40, 0x20, 0xC0, //
    0x20, 0xA0, 0xE0, 0x20, 0x20, //
    0xE0, 0x80, 0xC0, 0x20, 0xC0, //
    0x40, 0x80, 0xC0, 0xA0, 0x40, //
    0xE0, 0x20, 0x60, 0x40, 0x40, //
    0x40, 0xA0, 0x40, 0xA0, 0x40, //
    0x40, 0xA0, 0x60, 0x20, 0x40, //
    0x40, 0xA0, 0xE0, 0xA0, 0xA0, //
    0xC0, 0xA0, 0xC0, 0xA0, 0xC0, //
    0x60, 0x80, 0x80, 0x80, 0x60, //
    0xC0, 0xA0, 0xA0, 0xA0, 0xC0, //
    0xE0, 0x80, 0xC0, 0x80, 0xE0, //
    0xE0, 0x80, 0xC0, 0x80, 0x80, //
];

const BIG_OCTO: [u8; BIG_BYTES] = [
    0xFF, 0xFF, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xFF, 0xFF, // 0
    0x18, 0x78, 0x78, 0x18, 0x18, 0x18, 0x18, 0x18, 0xFF, 0xFF, // 1
    0xFF, 0xFF, 0x03, 0x03, 0xFF, 0xFF, 0xC0, 0xC0, 0xFF, 0xFF, // 2
    0xFF, 0xFF, 0x03, 0x03, 0xFF, 0xFF, 0x03, 0x03, 0xFF, 0xFF, // 3
    0xC3, 0xC3, 0xC3, 0xC3, 0xFF, 0xFF, 0x03, 0x03, 0x03, 0x03, // 4
    0xFF, 0xFF, 0xC0, 0xC0, 0xFF, 0xFF, 0x03, 0x03, 0xFF, 0xFF, // 5
    0xFF, 0xFF, 0xC0, 0xC0, 0xFF, 0xFF, 0xC3, 0xC3, 0xFF, 0xFF, // 6
    0xFF, 0xFF, 0x03, 0x03, 0x06, 0x0C, 0x18, 0x18, 0x18, 0x18, // 7
    0xFF, 0xFF, 0xC3, 0xC3, 0xFF, 0xFF, 0xC3, 0xC3, 0xFF, 0xFF, // 8
    0xFF, 0xFF, 0xC3, 0xC3, 0xFF, 0xFF, 0x03, 0x03, 0xFF, 0xFF, // 9
    0x7E, 0xFF, 0xC3, 0xC3, 0xC3, 0xFF, 0xFF, 0xC3, 0xC3, 0xC3, // A
    0xFC, 0xFC, 0xC3, 0xC3, 0xFC, 0xFC, 0xC3, 0xC3, 0xFC, 0xFC, // B
    0x3C, 0xFF, 0xC3, 0xC0, 0xC0, 0xC0, 0xC0, 0xC3, 0xFF, 0x3C, // C
    0xFC, 0xFE, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xFE, 0xFC, // D
    0xFF, 0xFF, 0xC0, 0xC0, 0xFF, 0xFF, 0xC0, 0xC0, 0xFF, 0xFF, // E
    0xFF, 0xFF, 0xC0, 0xC0, 0xFF, 0xFF, 0xC0, 0xC0, 0xC0, 0xC0, // F
];

const BIG_SCHIP: [u8; BIG_BYTES] = [
    0x3C, 0x7E, 0xE7, 0xC3, 0xC3, 0xC3, 0xC3, 0xE7, 0x7E, 0x3C, //
    0x18, 0x38, 0x58, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, //
    0x3E, 0x7F, 0xC3, 0x06, 0x0C, 0x18, 0x30, 0x60, 0xFF, 0xFF, //
    0x3C, 0x7E, 0xC3, 0x03, 0x0E, 0x0E, 0x03, 0xC3, 0x7E, 0x3C, //
    0x06, 0x0E, 0x1E, 0x36, 0x66, 0xC6, 0xFF, 0xFF, 0x06, 0x06, //
    0xFF, 0xFF, 0xC0, 0xC0, 0xFC, 0xFE, 0x03, 0xC3, 0x7E, 0x3C, //
    0x3E, 0x7C, 0xE0, 0xC0, 0xFC, 0xFE, 0xC3, 0xC3, 0x7E, 0x3C, //
    0xFF, 0xFF, 0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x60, 0x60, //
    0x3C, 0x7E, 0xC3, 0xC3, 0x7E, 0x7E, 0xC3, 0xC3, 0x7E, 0x3C, //
    0x3C, 0x7E, 0xC3, 0xC3, 0x7F, 0x3F, 0x03, 0x03, 0x3E, 0x7C, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // no hex glyphs
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
];

const BIG_FISH: [u8; BIG_BYTES] = [
    0x7C, 0xC6, 0xCE, 0xDE, 0xD6, 0xF6, 0xE6, 0xC6, 0x7C, 0x00, // at most 7x9 pixels
    0x10, 0x30, 0xF0, 0x30, 0x30, 0x30, 0x30, 0x30, 0xFC, 0x00, //
    0x78, 0xCC, 0xCC, 0x0C, 0x18, 0x30, 0x60, 0xCC, 0xFC, 0x00, //
    0x78, 0xCC, 0x0C, 0x0C, 0x38, 0x0C, 0x0C, 0xCC, 0x78, 0x00, //
    0x0C, 0x1C, 0x3C, 0x6C, 0xCC, 0xFE, 0x0C, 0x0C, 0x1E, 0x00, //
    0xFC, 0xC0, 0xC0, 0xC0, 0xF8, 0x0C, 0x0C, 0xCC, 0x78, 0x00, //
    0x38, 0x60, 0xC0, 0xC0, 0xF8, 0xCC, 0xCC, 0xCC, 0x78, 0x00, //
    0xFE, 0xC6, 0xC6, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00, //
    0x78, 0xCC, 0xCC, 0xEC, 0x78, 0xDC, 0xCC, 0xCC, 0x78, 0x00, //
    0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0x18, 0x18, 0x30, 0x70, 0x00, //
    0x30, 0x78, 0xCC, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0xCC, 0x00, //
    0xFC, 0x66, 0x66, 0x66, 0x7C, 0x66, 0x66, 0x66, 0xFC, 0x00, //
    0x3C, 0x66, 0xC6, 0xC0, 0xC0, 0xC0, 0xC6, 0x66, 0x3C, 0x00, //
    0xF8, 0x6C, 0x66, 0x66, 0x66, 0x66, 0x66, 0x6C, 0xF8, 0x00, //
    0xFE, 0x62, 0x60, 0x64, 0x7C, 0x64, 0x60, 0x62, 0xFE, 0x00, //
    0xFE, 0x66, 0x62, 0x64, 0x7C, 0x64, 0x60, 0x60, 0xF0, 0x00, //
];

const BIG_NONE: [u8; BIG_BYTES] = [0; BIG_BYTES];
