//! Fixed word palette.
//!
//! Words are colored round-robin from 30 visually distinct colors, so the
//! color doubles as the word's identity when the rendered pixels are read
//! back. Past 30 words colors repeat and identity becomes ambiguous.

use crate::color::Rgb;

/// The 30-color palette, in assignment order.
pub const PALETTE: [Rgb; 30] = [
    Rgb::new(0x1f, 0x77, 0xb4),
    Rgb::new(0xff, 0x7f, 0x0e),
    Rgb::new(0x2c, 0xa0, 0x2c),
    Rgb::new(0xd6, 0x27, 0x28),
    Rgb::new(0x94, 0x67, 0xbd),
    Rgb::new(0x8c, 0x56, 0x4b),
    Rgb::new(0xe3, 0x77, 0xc2),
    Rgb::new(0x7f, 0x7f, 0x7f),
    Rgb::new(0xbc, 0xbd, 0x22),
    Rgb::new(0x17, 0xbe, 0xcf),
    Rgb::new(0xae, 0xc7, 0xe8),
    Rgb::new(0xff, 0xbb, 0x78),
    Rgb::new(0x98, 0xdf, 0x8a),
    Rgb::new(0xff, 0x98, 0x96),
    Rgb::new(0xc5, 0xb0, 0xd5),
    Rgb::new(0xc4, 0x9c, 0x94),
    Rgb::new(0xf7, 0xb6, 0xd3),
    Rgb::new(0xc7, 0xc7, 0xc7),
    Rgb::new(0xdb, 0xdb, 0x8d),
    Rgb::new(0x9e, 0xda, 0xe5),
    Rgb::new(0x6b, 0x8e, 0x23),
    Rgb::new(0xff, 0x63, 0x47),
    Rgb::new(0x46, 0x82, 0xb4),
    Rgb::new(0xff, 0xa5, 0x00),
    Rgb::new(0x32, 0xcd, 0x32),
    Rgb::new(0xff, 0x14, 0x93),
    Rgb::new(0x1e, 0x90, 0xff),
    Rgb::new(0xff, 0xd7, 0x00),
    Rgb::new(0x00, 0xce, 0xd1),
    Rgb::new(0xff, 0x69, 0xb4),
];

/// Color for the word at `index`.
#[must_use]
pub fn color_at(index: usize) -> Rgb {
    PALETTE
        .get(index % PALETTE.len())
        .copied()
        .unwrap_or(PALETTE[0])
}

/// Generate `count` colors, cycling through [`PALETTE`].
#[must_use]
pub fn generate_palette(count: usize) -> Vec<Rgb> {
    (0..count).map(color_at).collect()
}
