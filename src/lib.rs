use wasm_bindgen::prelude::*;

pub mod rendering;
pub mod sim;

pub use sim::{
    Census, Forest, ForestConfig, ForestError, InitialPattern, RandomSource,
    SimulationParameters, State,
};

#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    let _ = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::Output::call(console_log::log))
        .apply();
}

/// The forest as seen from JavaScript.
///
/// Drive it with `tick()` once per frame and read `patches()` or `render()`
/// afterwards.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = Forest)]
pub struct WasmForest {
    forest: Forest,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_class = Forest)]
impl WasmForest {
    /// Create a fully forested grid
    #[wasm_bindgen]
    pub fn new(
        width: u32,
        height: u32,
        growth_probability: f64,
        lightning_probability: f64,
    ) -> Result<WasmForest, JsValue> {
        Forest::new(width, height, growth_probability, lightning_probability)
            .map(|forest| Self { forest })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Create a fully forested grid with a reproducible random source
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(
        width: u32,
        height: u32,
        growth_probability: f64,
        lightning_probability: f64,
        seed: u64,
    ) -> Result<WasmForest, JsValue> {
        Forest::with_seed(width, height, growth_probability, lightning_probability, seed)
            .map(|forest| Self { forest })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Advance one generation
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        self.forest.tick();
    }

    #[wasm_bindgen]
    pub fn width(&self) -> u32 {
        self.forest.width()
    }

    #[wasm_bindgen]
    pub fn height(&self) -> u32 {
        self.forest.height()
    }

    #[wasm_bindgen]
    pub fn generation(&self) -> u64 {
        self.forest.generation()
    }

    /// The current generation's state bytes, row-major.
    ///
    /// The array aliases wasm memory. It is stale after the next `tick()`
    /// and detached if the memory grows, so read it before doing either.
    #[wasm_bindgen]
    pub fn patches(&self) -> js_sys::Uint8Array {
        // SAFETY: the view is handed straight to JS and no Rust code touches
        // the grid until the caller's next tick.
        unsafe { js_sys::Uint8Array::view(self.forest.patches()) }
    }

    /// The current generation as lines of `T`, `B` and `E`
    #[wasm_bindgen]
    pub fn render(&self) -> String {
        self.forest.render()
    }
}
