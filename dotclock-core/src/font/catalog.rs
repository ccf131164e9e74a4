//! Built-in font bitmaps
//!
//! Each glyph is an 8x8 bitmap packed into a `u64`, one byte per row with
//! row 0 in the least significant byte. Glyph order is the character set in
//! [`super::glyph`]: digits 0-9, `:`, `.`, `C`, `'`, `-`, `F`.
//!
//! Bitmaps were drawn with <https://xantorohara.github.io/led-matrix-editor/>.

use super::{Font, PackedGlyph, GLYPH_COUNT};

const STANDARD: [PackedGlyph; GLYPH_COUNT] = [
    0x00708898a8c88870,
    0x0070202020203020,
    0x00f8102040808870,
    0x00708880402040f8,
    0x004040f848506040,
    0x00708880807808f8,
    0x0070888878081060,
    0x00101010204088f8,
    0x0070888870888870,
    0x00304080f0888870,
    0x0000202000202000,
    0x0020000000000000,
    0x0070880808088870,
    0x0000000060909060,
    0x0000000070000000,
    0x00080808780808f8,
];

const BEAUTIFUL_BOOT: [PackedGlyph; GLYPH_COUNT] = [
    0x00708898a8c88870,
    0x0070202020203020,
    0x00f8081060808870,
    0x00708880604080f8,
    0x004040f848506040,
    0x00708880780808f8,
    0x00708888780808f0,
    0x00101010204080f8,
    0x0070888870888870,
    0x00384080f0888870,
    0x0000002000200000,
    0x0020000000000000,
    0x0070880808088870,
    0x0000000060909060,
    0x00000000f8000000,
    0x00080808780808f8,
];

const SKODA: [PackedGlyph; GLYPH_COUNT] = [
    0x0070888888888870,
    0x0070202020202030,
    0x00f8080870808078,
    0x0078808070808078,
    0x004040f848506040,
    0x00788080780808f8,
    0x0070888878080870,
    0x00101020408080f8,
    0x0070888870888870,
    0x00708080f0888870,
    0x0000202000202000,
    0x0020000000000000,
    0x0070880808088870,
    0x0000000060909060,
    0x00000000e0000000,
    0x00080808780808f8,
];

const BOLD: [PackedGlyph; GLYPH_COUNT] = [
    0x70c8c8c8c8c8c870,
    0xf060606060607060,
    0xf8183060c0c0c870,
    0x70c8c0c060c0c870,
    0xc0c0c0c0f8c8c8c8,
    0x70c8c0c0781818f8,
    0x7098989878189870,
    0x3030303060c0c0f8,
    0x70c8c8c870c8c870,
    0x70c8c0f0c8c8c870,
    0x0000606000606000,
    0x3030000000000000,
    0x7098981818189870,
    0x0000000060b0b060,
    0x0000000078000000,
    0x18181818781818f8,
];

const NEW_CENTURY: [PackedGlyph; GLYPH_COUNT] = [
    0x70d8d8d8d8d8d870,
    0x7830303030303830,
    0xf8f81060c0d8d870,
    0x70d8d8c060d8d870,
    0xe0c0f8c8d0d0e0e0,
    0x70d8d8c0781878f8,
    0x70d8d8d87818d870,
    0x606060404080f8f8,
    0x70d8d8d870d8d870,
    0x70d8c0f0d8d8d870,
    0x0060600060600000,
    0x6060000000000000,
    0x7098981818989870,
    0x00000070d8d8d870,
    0x0000007878000000,
    0x3c181858785898fc,
];

const LUCIDA_TYPEWRITER: [PackedGlyph; GLYPH_COUNT] = [
    0x0070d8d8d8d8d870,
    0x0060606060607860,
    0x00f8183060c0d870,
    0x0070d8c070c0d870,
    0x006060f868687060,
    0x0070d8c0781818f8,
    0x0070d8d87818d870,
    0x003030604080f8f8,
    0x0070d8d870d8d870,
    0x0070d8c0f0d8d870,
    0x0000606000606000,
    0x0060600000000000,
    0x00f038181818b8f0,
    0x0000000060b0b060,
    0x0000000078000000,
    0x00181818781818f8,
];

const HELVETICA: [PackedGlyph; GLYPH_COUNT] = [
    0x70d8d8d8d8d8d870,
    0x6060606060607860,
    0xf8183060c0c0d870,
    0x70d8c0c060c0d870,
    0xc0c0f8c8d0d0e0c0,
    0x70d8c8c0781818f8,
    0x70d8d8d87818d870,
    0x3030606060c0c0f8,
    0x70d8d8d870d8d870,
    0x70d8c0f0d8d8d870,
    0x0060600000606000,
    0x3030000000000000,
    0x70d818181818d870,
    0x00000070d8d8d870,
    0x00000000f0000000,
    0x18181818781818f8,
];

const RECTANGULAR: [PackedGlyph; GLYPH_COUNT] = [
    0x00f8888888f80000,
    0x0070202020300000,
    0x00f808f880f80000,
    0x00f880f080f80000,
    0x008080f888880000,
    0x00f880f808f80000,
    0x00f888f808f80000,
    0x0080808088f80000,
    0x00f888f888f80000,
    0x00f880f888f80000,
    0x0000200020000000,
    0x0020000000000000,
    0x00f8080888f80000,
    0x000000e0a0e00000,
    0x0000007000000000,
    0x0008087808f80000,
];

const SNAPIX: [PackedGlyph; GLYPH_COUNT] = [
    0x00f8888888f80000,
    0x00f8202020380000,
    0x00f808f080f80000,
    0x00f880f080780000,
    0x0040f84848080000,
    0x0078807808f80000,
    0x0070887808700000,
    0x0020204080f80000,
    0x0070887088700000,
    0x007080f088700000,
    0x0000200020000000,
    0x0020000000000000,
    0x00f8080808f80000,
    0x000000e0a0e00000,
    0x0000007000000000,
    0x0008087808f80000,
];

const NOKIA_BOLD: [PackedGlyph; GLYPH_COUNT] = [
    0x0070d8d8d8d8d870,
    0x0030303030303830,
    0x00f8181870c0c078,
    0x0078c0c060c0c078,
    0x00c0c0f8c8d0e0c0,
    0x0078c0c0c0780878,
    0x0070d8d8d8781870,
    0x003030306060c0f8,
    0x0070d8d870d8d870,
    0x0070c0f0d8d8d870,
    0x0000303000303000,
    0x0030300000000000,
    0x00f01818181818f0,
    0x0000000070d8d870,
    0x00000000f0000000,
    0x00181818187818f8,
];

const MEDIANOID: [PackedGlyph; GLYPH_COUNT] = [
    0x00f888888888f800,
    0x0080808080808000,
    0x00f80808f880f800,
    0x00f88080f080f800,
    0x0040f84848487800,
    0x00f88080f808f800,
    0x00f88888f808f800,
    0x008080808080f800,
    0x00f88888f888f800,
    0x00808080f888f800,
    0x0000200020000000,
    0x0020000000000000,
    0x00f808080808f800,
    0x00000000e0a0e000,
    0x0000007000000000,
    0x000808087808f800,
];

const TALL_ORDER: [PackedGlyph; GLYPH_COUNT] = [
    0xf8888888888888f8,
    0xf820202020203820,
    0xf808f880808080f8,
    0xf880e080808080f8,
    0x40f8480808080808,
    0xf880f808080808f8,
    0xf88888888888f808,
    0x80808080808080f8,
    0xf888f888888888f8,
    0x80f88888888888f8,
    0x0000200020000000,
    0x2000000000000000,
    0xf8080808080808f8,
    0x00000000f09090f0,
    0x00000000f8000000,
    0x08080808087808f8,
];

const HANDWRITTEN: [PackedGlyph; GLYPH_COUNT] = [
    0x3048888888889060,
    0x4040404050604040,
    0x6898102040808870,
    0x10284080604080f8,
    0x2020f84810102020,
    0x10284080780808f0,
    0x3048989868081060,
    0x101010202040c8b0,
    0x3048889060509060,
    0x10284090e8c89060,
    0x0020200020200000,
    0x2000000000000000,
    0x3048888808089060,
    0x000000007090e000,
    0x00000030c0000000,
    0x0808083808089060,
];

/// The font catalog, in [`super::FontId`] order
pub(super) static FONTS: [Font; super::FONT_COUNT] = [
    Font::new("Standard 5x7", STANDARD),
    Font::new("Beautiful Boot", BEAUTIFUL_BOOT),
    Font::new("Skoda", SKODA),
    Font::new("Bold 5x8", BOLD),
    Font::new("New Century Schoolbook", NEW_CENTURY),
    Font::new("Lucida Typewriter", LUCIDA_TYPEWRITER),
    Font::new("Helvetica", HELVETICA),
    Font::new("Rectangular 5x5", RECTANGULAR),
    Font::new("Snapix", SNAPIX),
    Font::new("Nokia Bold 5x7", NOKIA_BOLD),
    Font::new("Medianoid", MEDIANOID),
    Font::new("Tall Order", TALL_ORDER),
    Font::new("Handwritten", HANDWRITTEN),
];
