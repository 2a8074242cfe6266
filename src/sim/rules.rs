use rayon::prelude::*;

use super::{
    RandomSource, SimulationParameters, State,
    grid::{Grid, patch_index},
};

// Small lookup table; will be fully inlined and optimized away.
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Whether any of the up to eight cells around `(row, col)` is burning.
/// Edges do not wrap.
#[inline(always)]
pub(crate) fn has_burning_neighbor(
    cells: &[State],
    width: usize,
    height: usize,
    row: usize,
    col: usize,
) -> bool {
    NEIGHBORHOOD.iter().any(|&(dr, dc)| {
        let nr = row as isize + dr;
        let nc = col as isize + dc;
        if nr < 0 || nr >= height as isize || nc < 0 || nc >= width as isize {
            return false;
        }
        cells[patch_index(width, height, nr as usize, nc as usize)] == State::Burning
    })
}

/// The part of the rule that needs no draw: fire burns out and spreads to
/// adjacent trees. Everything else is carried over unchanged.
fn spread_fire(current: &[State], next: &mut [State], width: usize, height: usize) {
    next.par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, out)| {
            for (col, slot) in out.iter_mut().enumerate() {
                *slot = match current[patch_index(width, height, row, col)] {
                    State::Burning => State::Empty,
                    State::Tree if has_burning_neighbor(current, width, height, row, col) => {
                        State::Burning
                    }
                    state => state,
                };
            }
        });
}

/// Lightning and regrowth. Draws are taken in row-major order, one per
/// tree that did not catch from a neighbor and one per empty cell.
fn apply_chance<R: RandomSource>(
    current: &[State],
    next: &mut [State],
    parameters: &SimulationParameters,
    rng: &mut R,
) {
    for (before, after) in current.iter().zip(next.iter_mut()) {
        match (*before, *after) {
            (State::Tree, State::Tree) => {
                if rng.next_unit() < parameters.lightning_probability() {
                    *after = State::Burning;
                }
            }
            (State::Empty, _) => {
                if rng.next_unit() < parameters.growth_probability() {
                    *after = State::Tree;
                }
            }
            _ => {}
        }
    }
}

/// Compute the next generation of `grid` and make it current.
pub(crate) fn advance<R: RandomSource>(
    grid: &mut Grid,
    parameters: &SimulationParameters,
    rng: &mut R,
) {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    {
        let (current, next) = grid.staged();
        spread_fire(current, next, width, height);
        apply_chance(current, next, parameters, rng);
    }
    grid.swap();
}
