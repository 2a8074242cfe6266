use std::fmt;

/// Errors raised while building a forest or decoding its cells.
#[derive(Debug, Clone, PartialEq)]
pub enum ForestError {
    /// A dimension was zero, or the cell count does not fit in memory.
    InvalidDimensions { width: u32, height: u32 },
    /// A probability was NaN or outside `[0, 1]`.
    InvalidParameter { name: &'static str, value: f64 },
    /// A seeded layout did not contain `width * height` cells.
    PatchCountMismatch { expected: usize, actual: usize },
    /// A byte that is not one of the `State` discriminants.
    InvalidState(u8),
    /// A character that is not one of the rendered glyphs.
    InvalidGlyph(char),
    /// A text pattern whose rows are not all the same length.
    RaggedPattern {
        line: usize,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for ForestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid forest dimensions {width}x{height}")
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "{name} must be within [0, 1], got {value}")
            }
            Self::PatchCountMismatch { expected, actual } => {
                write!(f, "expected {expected} patches, got {actual}")
            }
            Self::InvalidState(byte) => write!(f, "{byte} is not a valid patch state"),
            Self::InvalidGlyph(c) => write!(f, "{c:?} is not a valid patch glyph"),
            Self::RaggedPattern {
                line,
                expected,
                actual,
            } => write!(
                f,
                "pattern line {line} has {actual} patches, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for ForestError {}
