use super::{Forest, ForestError, SimulationParameters, State, random};

/// How every patch of a freshly built forest starts out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InitialPattern {
    /// Every patch holds a tree.
    #[default]
    Forested,
    /// Every patch is empty ground.
    Barren,
}

impl InitialPattern {
    pub fn fill(self) -> State {
        match self {
            InitialPattern::Forested => State::Tree,
            InitialPattern::Barren => State::Empty,
        }
    }
}

/// Everything needed to build a [`Forest`] with the default random source.
#[derive(Clone, Debug, PartialEq)]
pub struct ForestConfig {
    pub width: u32,
    pub height: u32,
    /// Chance (0 - 1) that an empty patch grows a tree each tick
    pub growth_probability: f64,
    /// Chance (0 - 1) that a tree with no burning neighbor is struck each tick
    pub lightning_probability: f64,
    pub initial: InitialPattern,
    /// Seed for the random source; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            growth_probability: 0.02,
            lightning_probability: 0.00001,
            initial: InitialPattern::Forested,
            seed: None,
        }
    }
}

impl ForestConfig {
    pub fn new(width: u32, height: u32, growth_probability: f64, lightning_probability: f64) -> Self {
        Self {
            width,
            height,
            growth_probability,
            lightning_probability,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_initial(mut self, initial: InitialPattern) -> Self {
        self.initial = initial;
        self
    }

    pub fn parameters(&self) -> Result<SimulationParameters, ForestError> {
        SimulationParameters::new(self.growth_probability, self.lightning_probability)
    }

    pub fn build(&self) -> Result<Forest, ForestError> {
        Forest::with_source(
            self.width,
            self.height,
            self.parameters()?,
            self.initial,
            random::default_source(self.seed),
        )
    }
}
