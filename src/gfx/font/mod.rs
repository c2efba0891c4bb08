mod glyphs;

use serde::{Deserialize, Serialize};

use super::bitmap::{Bitmap, Point};
use super::color::Color;
use crate::shared::constants::{FONT_ASCII_MAX, FONT_ASCII_MIN, FONT_FALLBACK_ASCII};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Sm,
    Md,
    Lg,
}

/// Glyph cell geometry and how each glyph's bitstream is chunked.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSizeDetails {
    pub name: FontSize,
    pub width: u32,
    pub height: u32,
    pub bits_per_chunk: u32,
    pub chunks_per_char: u32,
    pub spacing: u32,
}

pub const SM: FontSizeDetails = FontSizeDetails {
    name: FontSize::Sm,
    width: 3,
    height: 6,
    bits_per_chunk: 18,
    chunks_per_char: 1,
    spacing: 1,
};

pub const MD: FontSizeDetails = FontSizeDetails {
    name: FontSize::Md,
    width: 5,
    height: 8,
    bits_per_chunk: 8,
    chunks_per_char: 5,
    spacing: 1,
};

pub const LG: FontSizeDetails = FontSizeDetails {
    name: FontSize::Lg,
    width: 7,
    height: 12,
    bits_per_chunk: 28,
    chunks_per_char: 3,
    spacing: 1,
};

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Sm, FontSize::Md, FontSize::Lg];

    pub const fn details(self) -> FontSizeDetails {
        match self {
            FontSize::Sm => SM,
            FontSize::Md => MD,
            FontSize::Lg => LG,
        }
    }
}

pub const fn is_valid_ascii(ascii: u8) -> bool {
    ascii >= FONT_ASCII_MIN && ascii <= FONT_ASCII_MAX
}

/// Map a character onto the glyph table, substituting `?` for anything the
/// fonts do not cover.
pub fn glyph_code(ch: char) -> u8 {
    match u8::try_from(ch) {
        Ok(ascii) if is_valid_ascii(ascii) => ascii,
        _ => {
            crate::utils::logger::warn(&format!(
                "unsupported character {:?} (U+{:04X}), drawing `?`",
                ch, ch as u32
            ));
            FONT_FALLBACK_ASCII
        }
    }
}

/// One chunk of a glyph's bitstream. Out-of-range input reads as blank.
pub fn get_chunk(font: FontSize, ascii: u8, chunk: u32) -> u32 {
    if !is_valid_ascii(ascii) {
        return 0;
    }
    let idx = (ascii - FONT_ASCII_MIN) as usize;
    let chunk = chunk as usize;
    let row: &[u32] = match font {
        FontSize::Sm => &glyphs::SM[idx],
        FontSize::Md => &glyphs::MD[idx],
        FontSize::Lg => &glyphs::LG[idx],
    };
    row.get(chunk).copied().unwrap_or(0)
}

/// Paint one glyph with its top-left corner at `origin`.
///
/// Set bits take `color`; clear bits take the zero sentinel, so the glyph cell
/// is cleared behind the character. Bits are read most significant first and
/// fill the cell row by row, wrapping after `font.width` columns.
pub fn draw_glyph(bitmap: &mut Bitmap, font: &FontSizeDetails, ascii: u8, origin: Point, color: Color) {
    let mut column: i64 = 0;
    let mut row: i64 = 0;

    for chunk_idx in 0..font.chunks_per_char {
        let chunk = get_chunk(font.name, ascii, chunk_idx);

        for bit_n in 1..=font.bits_per_chunk {
            let set = chunk & (1 << (font.bits_per_chunk - bit_n)) != 0;
            let value = if set { color } else { Color::BLACK };
            bitmap.plot(origin.x as i64 + column, origin.y as i64 + row, value);

            column += 1;
            if column == font.width as i64 {
                column = 0;
                row += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(bitmap: &Bitmap) -> Vec<String> {
        (0..bitmap.height() as i32)
            .map(|y| {
                (0..bitmap.width() as i32)
                    .map(|x| match bitmap.pixel(x, y) {
                        Some(c) if !c.is_transparent() => '#',
                        _ => '.',
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_presets_cover_their_cells() {
        for size in FontSize::ALL {
            let font = size.details();
            assert_eq!(
                font.bits_per_chunk * font.chunks_per_char,
                font.width * font.height,
                "{:?}",
                size
            );
            assert!(font.bits_per_chunk <= 32);
        }
    }

    #[test]
    fn test_small_a_rasterizes() {
        let mut bitmap = Bitmap::new(3, 6);
        draw_glyph(&mut bitmap, &SM, b'A', Point::ORIGIN, Color::WHITE);
        assert_eq!(lit(&bitmap), vec![".#.", "#.#", "###", "#.#", "#.#", "..."]);
    }

    #[test]
    fn test_medium_zero_rasterizes() {
        let mut bitmap = Bitmap::new(5, 8);
        draw_glyph(&mut bitmap, &MD, b'0', Point::ORIGIN, Color::WHITE);
        assert_eq!(
            lit(&bitmap),
            vec![".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###.", "....."]
        );
    }

    #[test]
    fn test_clear_bits_paint_sentinel() {
        let mut bitmap = Bitmap::filled(crate::gfx::Size::new(3, 6), Color::RED);
        draw_glyph(&mut bitmap, &SM, b' ', Point::ORIGIN, Color::WHITE);
        assert!(bitmap.pixels().all(|c| c.is_transparent()));
    }

    #[test]
    fn test_unsupported_characters_become_question_mark() {
        assert_eq!(glyph_code('A'), b'A');
        assert_eq!(glyph_code('\n'), b'?');
        assert_eq!(glyph_code('é'), b'?');
        assert_eq!(glyph_code('\u{7f}'), b'?');
    }

    #[test]
    fn test_glyph_at_coordinate_limit_is_clipped() {
        let mut bitmap = Bitmap::new(4, 4);
        draw_glyph(&mut bitmap, &LG, b'W', Point::new(i32::MAX - 2, i32::MAX - 2), Color::WHITE);
        draw_glyph(&mut bitmap, &LG, b'W', Point::new(i32::MIN, 0), Color::WHITE);
        assert!(bitmap.pixels().all(|c| c.is_transparent()));
    }

    #[test]
    fn test_glyph_clips_at_canvas_edge() {
        let mut bitmap = Bitmap::new(4, 4);
        draw_glyph(&mut bitmap, &MD, b'#', Point::new(2, 1), Color::WHITE);
        assert_eq!(bitmap.len(), 16);
        assert_eq!(bitmap.pixel(0, 2), Some(Color::BLACK));
    }
}
