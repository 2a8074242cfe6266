use std::time::{Duration, Instant};

use anyhow::Context;
use forestfire::{ForestConfig, InitialPattern};

const FRAMES: u64 = 20;
const BENCH_TICKS: u32 = 200;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = config_from_env()?;
    let delay = frame_delay_from_env()?;
    run_text_simulation(&config, delay)?;
    run_benchmark(&config)
}

fn config_from_env() -> anyhow::Result<ForestConfig> {
    let mut config =
        ForestConfig::new(60, 20, 0.05, 0.0005).with_initial(InitialPattern::Barren);
    if let Ok(seed) = std::env::var("FOREST_SEED") {
        let seed = seed
            .parse()
            .with_context(|| format!("FOREST_SEED is not a number: {seed:?}"))?;
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn frame_delay_from_env() -> anyhow::Result<Duration> {
    match std::env::var("FOREST_FRAME_DELAY") {
        Ok(delay) => humantime::parse_duration(&delay)
            .with_context(|| format!("FOREST_FRAME_DELAY is not a duration: {delay:?}")),
        Err(_) => Ok(Duration::from_millis(100)),
    }
}

fn run_text_simulation(config: &ForestConfig, delay: Duration) -> anyhow::Result<()> {
    let mut forest = config.build()?;
    for _ in 0..FRAMES {
        forest.tick();
        let census = forest.census();
        println!(
            "generation {} (trees {}, burning {}, empty {})",
            forest.generation(),
            census.trees,
            census.burning,
            census.empty
        );
        println!("{forest}");
        std::thread::sleep(delay);
    }
    Ok(())
}

pub fn run_benchmark(config: &ForestConfig) -> anyhow::Result<()> {
    let mut bench = config.clone();
    bench.width = 500;
    bench.height = 500;
    let mut forest = bench.build()?;

    let start = Instant::now();
    for _ in 0..BENCH_TICKS {
        forest.tick();
    }
    let average = start.elapsed() / BENCH_TICKS;
    println!(
        "{}x{} forest took an average of {} per tick over {} ticks",
        bench.width,
        bench.height,
        humantime::format_duration(average),
        BENCH_TICKS
    );
    Ok(())
}
