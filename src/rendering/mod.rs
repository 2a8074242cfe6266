use std::fmt;

use crate::sim::{Forest, ForestError, State};

/// Reinterpret patches as their state bytes without copying.
pub fn as_bytes(patches: &[State]) -> &[u8] {
    bytemuck::cast_slice(patches)
}

/// Write `patches` as text: one line per row of `width` glyphs, each line
/// terminated by `'\n'`.
pub fn write_patches(out: &mut impl fmt::Write, patches: &[State], width: usize) -> fmt::Result {
    for line in patches.chunks(width) {
        for &patch in line {
            out.write_char(patch.glyph())?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

impl<R> fmt::Display for Forest<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_patches(f, self.cells(), self.width() as usize)
    }
}

/// A layout parsed from the text rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub width: u32,
    pub height: u32,
    pub patches: Vec<State>,
}

/// Parse the text form produced by [`Forest::render`]. Blank lines and
/// surrounding whitespace on each line are ignored.
pub fn parse_patches(text: &str) -> Result<Pattern, ForestError> {
    let mut patches = Vec::new();
    let mut width = None;
    let mut height = 0usize;
    for (line_no, line) in text.lines().map(str::trim).enumerate() {
        if line.is_empty() {
            continue;
        }
        let before = patches.len();
        for glyph in line.chars() {
            patches.push(State::from_glyph(glyph)?);
        }
        let row_len = patches.len() - before;
        match width {
            None => width = Some(row_len),
            Some(expected) if expected != row_len => {
                return Err(ForestError::RaggedPattern {
                    line: line_no + 1,
                    expected,
                    actual: row_len,
                });
            }
            Some(_) => {}
        }
        height += 1;
    }
    let width = width.unwrap_or(0);
    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(ForestError::InvalidDimensions {
            width: u32::MAX,
            height: u32::MAX,
        });
    };
    if w == 0 || h == 0 {
        return Err(ForestError::InvalidDimensions {
            width: w,
            height: h,
        });
    }
    Ok(Pattern {
        width: w,
        height: h,
        patches,
    })
}
