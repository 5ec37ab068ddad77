//! Text rasterization: one line of glyphs composed into a coverage bitmap

use std::path::Path;

use fontdue::{Font, FontSettings};

use crate::error::InitError;

/// A rasterized glyph positioned relative to the pen and baseline
#[derive(Debug, Clone)]
pub struct Glyph {
    pub xmin: i32,
    /// Offset of the bitmap's bottom edge above the baseline
    pub ymin: i32,
    pub width: usize,
    pub height: usize,
    pub advance: f32,
    pub coverage: Vec<u8>,
}

/// Single-channel coverage, row-major, top row first
#[derive(Debug, Clone, PartialEq)]
pub struct TextBitmap {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

/// Lay glyphs out on one baseline.
///
/// Returns `None` when nothing would be visible, e.g. an empty or all-space
/// string.
pub fn compose_line(glyphs: &[Glyph], ascent: f32, descent: f32) -> Option<TextBitmap> {
    let baseline = ascent.ceil() as i32;
    let height = (ascent - descent).ceil() as i32;

    let mut pen = 0.0f32;
    let mut placed = Vec::with_capacity(glyphs.len());
    let mut width = 0;
    for glyph in glyphs {
        let left = pen.round() as i32 + glyph.xmin;
        let top = baseline - glyph.ymin - glyph.height as i32;
        placed.push((left, top, glyph));
        pen += glyph.advance;
        width = width.max(left + glyph.width as i32).max(pen.ceil() as i32);
    }

    if width <= 0 || height <= 0 {
        return None;
    }

    let mut coverage = vec![0u8; (width * height) as usize];
    for (left, top, glyph) in placed {
        for row in 0..glyph.height {
            for col in 0..glyph.width {
                let x = left + col as i32;
                let y = top + row as i32;
                if x < 0 || y < 0 || x >= width || y >= height {
                    continue;
                }
                let dst = &mut coverage[(y * width + x) as usize];
                *dst = (*dst).max(glyph.coverage[row * glyph.width + col]);
            }
        }
    }

    if coverage.iter().all(|&c| c == 0) {
        return None;
    }

    Some(TextBitmap {
        width: width as u32,
        height: height as u32,
        coverage,
    })
}

/// Read and parse a TrueType font from disk
pub fn load_font(path: &Path) -> Result<Font, InitError> {
    let bytes = std::fs::read(path).map_err(|source| InitError::FontRead {
        path: path.to_path_buf(),
        source,
    })?;
    Font::from_bytes(bytes, FontSettings::default()).map_err(|reason| InitError::FontParse {
        path: path.to_path_buf(),
        reason,
    })
}

pub struct TextRasterizer {
    font: Font,
}

impl TextRasterizer {
    pub fn new(font: Font) -> Self {
        Self { font }
    }

    pub fn rasterize(&self, text: &str, size: f32) -> Option<TextBitmap> {
        let line = self.font.horizontal_line_metrics(size)?;
        let glyphs: Vec<Glyph> = text
            .chars()
            .map(|c| {
                let (metrics, coverage) = self.font.rasterize(c, size);
                Glyph {
                    xmin: metrics.xmin,
                    ymin: metrics.ymin,
                    width: metrics.width,
                    height: metrics.height,
                    advance: metrics.advance_width,
                    coverage,
                }
            })
            .collect();

        compose_line(&glyphs, line.ascent, line.descent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(width: usize, height: usize, ymin: i32, advance: f32) -> Glyph {
        Glyph {
            xmin: 0,
            ymin,
            width,
            height,
            advance,
            coverage: vec![255; width * height],
        }
    }

    fn space(advance: f32) -> Glyph {
        Glyph {
            xmin: 0,
            ymin: 0,
            width: 0,
            height: 0,
            advance,
            coverage: Vec::new(),
        }
    }

    #[test]
    fn test_glyphs_sit_on_baseline() {
        let bitmap = compose_line(&[block(2, 2, 0, 3.0), block(2, 2, 0, 3.0)], 4.0, -1.0).unwrap();

        assert_eq!((bitmap.width, bitmap.height), (6, 5));
        let at = |x: usize, y: usize| bitmap.coverage[y * 6 + x];
        // Baseline at row 4, so 2px tall glyphs fill rows 2 and 3
        assert_eq!(at(0, 1), 0);
        assert_eq!(at(0, 2), 255);
        assert_eq!(at(1, 3), 255);
        assert_eq!(at(2, 2), 0);
        assert_eq!(at(3, 2), 255);
        assert_eq!(at(4, 3), 255);
        assert_eq!(at(0, 4), 0);
    }

    #[test]
    fn test_descender_drops_below_baseline() {
        let bitmap = compose_line(&[block(1, 3, -1, 2.0)], 4.0, -1.0).unwrap();
        let column: Vec<u8> = (0..5).map(|y| bitmap.coverage[y * 2]).collect();
        assert_eq!(column, vec![0, 0, 255, 255, 255]);
    }

    #[test]
    fn test_spaces_only_produce_nothing() {
        assert_eq!(compose_line(&[space(5.0), space(5.0)], 4.0, -1.0), None);
        assert_eq!(compose_line(&[], 4.0, -1.0), None);
    }

    #[test]
    fn test_space_advances_pen() {
        let bitmap = compose_line(&[space(4.0), block(1, 1, 0, 2.0)], 2.0, 0.0).unwrap();
        assert_eq!(bitmap.width, 6);
        assert_eq!(bitmap.coverage[6 + 4], 255);
    }

    #[test]
    fn test_missing_font_is_reported() {
        let err = load_font(Path::new("does/not/exist.ttf")).unwrap_err();
        assert!(matches!(err, InitError::FontRead { .. }));
    }
}
