use bytemuck::NoUninit;
use wasm_bindgen::prelude::*;

mod config;
mod error;
mod grid;
pub mod random;
mod rules;

pub use config::{ForestConfig, InitialPattern};
pub use error::ForestError;
pub use random::RandomSource;

use grid::Grid;

/// The state of a single patch of forest.
///
/// The discriminants are what [`Forest::patches`] hands out, so renderers
/// can key color tables off them. They must never change.
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, NoUninit)]
pub enum State {
    Tree = 0,
    Burning = 1,
    Empty = 2,
}

impl State {
    pub const ALL: [State; 3] = [State::Tree, State::Burning, State::Empty];

    /// The character used for this state in the text rendering.
    pub const fn glyph(self) -> char {
        match self {
            State::Tree => 'T',
            State::Burning => 'B',
            State::Empty => 'E',
        }
    }

    pub fn from_glyph(glyph: char) -> Result<State, ForestError> {
        State::ALL
            .into_iter()
            .find(|state| state.glyph() == glyph)
            .ok_or(ForestError::InvalidGlyph(glyph))
    }
}

impl TryFrom<u8> for State {
    type Error = ForestError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0 => Ok(State::Tree),
            1 => Ok(State::Burning),
            2 => Ok(State::Empty),
            other => Err(ForestError::InvalidState(other)),
        }
    }
}

/// The parameters controlling the simulation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    growth_probability: f64,
    lightning_probability: f64,
}

impl SimulationParameters {
    /// Both probabilities must lie in `[0, 1]`; anything else, NaN
    /// included, is rejected rather than clamped.
    pub fn new(
        growth_probability: f64,
        lightning_probability: f64,
    ) -> Result<SimulationParameters, ForestError> {
        Ok(Self {
            growth_probability: check_probability("growth_probability", growth_probability)?,
            lightning_probability: check_probability(
                "lightning_probability",
                lightning_probability,
            )?,
        })
    }

    /// The chance (0 - 1) that an empty patch grows a tree in one tick
    pub fn growth_probability(&self) -> f64 {
        self.growth_probability
    }

    /// The chance (0 - 1) that a tree ignites on its own in one tick
    pub fn lightning_probability(&self) -> f64 {
        self.lightning_probability
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<f64, ForestError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ForestError::InvalidParameter { name, value })
    }
}

/// How many patches of each state the current generation holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Census {
    pub trees: usize,
    pub burning: usize,
    pub empty: usize,
}

impl Census {
    pub fn of(cells: &[State]) -> Census {
        cells.iter().fold(Census::default(), |mut census, state| {
            match state {
                State::Tree => census.trees += 1,
                State::Burning => census.burning += 1,
                State::Empty => census.empty += 1,
            }
            census
        })
    }

    pub fn total(&self) -> usize {
        self.trees + self.burning + self.empty
    }
}

/// A forest-fire cellular automaton on a fixed `width x height` grid.
///
/// Each [`tick`](Forest::tick) computes the next generation from the
/// current one as a whole; no patch ever sees a neighbor's new state
/// within the same tick.
pub struct Forest<R = fastrand::Rng> {
    grid: Grid,
    parameters: SimulationParameters,
    rng: R,
    generation: u64,
}

impl Forest {
    /// A fully forested grid driven by an entropy-seeded random source.
    pub fn new(
        width: u32,
        height: u32,
        growth_probability: f64,
        lightning_probability: f64,
    ) -> Result<Forest, ForestError> {
        ForestConfig::new(width, height, growth_probability, lightning_probability).build()
    }

    /// Like [`Forest::new`], but reproducible.
    pub fn with_seed(
        width: u32,
        height: u32,
        growth_probability: f64,
        lightning_probability: f64,
        seed: u64,
    ) -> Result<Forest, ForestError> {
        ForestConfig::new(width, height, growth_probability, lightning_probability)
            .with_seed(seed)
            .build()
    }
}

impl<R: RandomSource> Forest<R> {
    pub fn with_source(
        width: u32,
        height: u32,
        parameters: SimulationParameters,
        initial: InitialPattern,
        rng: R,
    ) -> Result<Self, ForestError> {
        let grid = Grid::new(width, height, initial.fill())?;
        log::debug!("created {width}x{height} forest ({initial:?}), {parameters:?}");
        Ok(Self::from_grid(grid, parameters, rng))
    }

    /// Start from an explicit row-major layout of `width * height` patches.
    pub fn from_patches(
        width: u32,
        height: u32,
        parameters: SimulationParameters,
        patches: Vec<State>,
        rng: R,
    ) -> Result<Self, ForestError> {
        let grid = Grid::from_cells(width, height, patches)?;
        log::debug!("seeded {width}x{height} forest, {parameters:?}");
        Ok(Self::from_grid(grid, parameters, rng))
    }

    fn from_grid(grid: Grid, parameters: SimulationParameters, rng: R) -> Self {
        Self {
            grid,
            parameters,
            rng,
            generation: 0,
        }
    }

    /// Advance exactly one generation.
    pub fn tick(&mut self) {
        rules::advance(&mut self.grid, &self.parameters, &mut self.rng);
        self.generation += 1;
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("generation {}: {:?}", self.generation, self.census());
        }
    }
}

impl<R> Forest<R> {
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Number of ticks since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    /// The current generation, row-major. Borrowing the forest keeps the
    /// view from outliving the next tick.
    pub fn cells(&self) -> &[State] {
        self.grid.cells()
    }

    /// The current generation as raw state bytes, row-major.
    pub fn patches(&self) -> &[u8] {
        crate::rendering::as_bytes(self.cells())
    }

    /// The current generation as text, one line per row.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn census(&self) -> Census {
        Census::of(self.cells())
    }
}
