use super::{ForestError, State};

/// Number of cells in a `width x height` forest, rejecting empty or
/// unaddressable sizes.
pub(crate) fn cell_count(width: u32, height: u32) -> Result<usize, ForestError> {
    let invalid = ForestError::InvalidDimensions { width, height };
    if width == 0 || height == 0 {
        return Err(invalid);
    }
    match (width as usize).checked_mul(height as usize) {
        Some(count) if count <= isize::MAX as usize => Ok(count),
        _ => Err(invalid),
    }
}

/// Row-major offset of `(row, column)` in a `width x height` buffer.
/// Every cell lookup goes through here.
#[inline(always)]
pub(crate) fn patch_index(width: usize, height: usize, row: usize, column: usize) -> usize {
    debug_assert!(
        row < height && column < width,
        "patch ({row}, {column}) outside {width}x{height} forest"
    );
    row * width + column
}

/// Row-major cell storage with a second buffer of the same size that the
/// next generation is written into before the two are swapped.
pub(crate) struct Grid {
    width: u32,
    height: u32,
    current: Vec<State>,
    next: Vec<State>,
}

impl Grid {
    pub fn new(width: u32, height: u32, fill: State) -> Result<Self, ForestError> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            current: vec![fill; len],
            next: vec![fill; len],
        })
    }

    pub fn from_cells(width: u32, height: u32, cells: Vec<State>) -> Result<Self, ForestError> {
        let expected = cell_count(width, height)?;
        if cells.len() != expected {
            return Err(ForestError::PatchCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            next: cells.clone(),
            current: cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The current generation.
    pub fn cells(&self) -> &[State] {
        &self.current
    }

    /// The current generation alongside the buffer the next one goes into.
    pub fn staged(&mut self) -> (&[State], &mut [State]) {
        (&self.current, &mut self.next)
    }

    /// Promote the staged buffer to the current generation.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }
}
