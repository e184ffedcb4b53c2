pub mod cycle;
pub mod direction;
pub mod field;
pub mod generator;
pub mod shape;
pub mod simulator;

pub type Result<T> = std::result::Result<T, anyhow::Error>;

use cycle::{CycleDetector, Extrapolation};
use direction::{parse_push_pattern, Direction};
use shape::{standard_catalog, Shape};
use simulator::Simulation;

#[derive(Clone, Debug)]
pub struct Config {
    pub width: i64,
    /// Consecutive identical gaps required before a period is trusted.
    /// Lower values stop sooner but can mistake a coincidental repeat for
    /// the real period.
    pub confirmation_threshold: u32,
    pub detect_cycles: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            width: 7,
            confirmation_threshold: 100,
            detect_cycles: true,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.detect_cycles && self.confirmation_threshold == 0 {
            anyhow::bail!("confirmation threshold must be at least 1");
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Tower height after the requested number of shapes.
    pub height: i64,
    /// Shapes actually dropped to get there.
    pub simulated: i64,
    pub extrapolation: Option<Extrapolation>,
}

pub fn tower_height(
    config: &Config,
    catalog: Vec<Shape>,
    pattern: Vec<Direction>,
    shapes: i64,
) -> Result<Outcome> {
    config.validate()?;
    if shapes <= 0 {
        anyhow::bail!("number of shapes must be positive, got {}", shapes);
    }

    let mut sim = Simulation::new(config.width, catalog, pattern)?;
    let mut detector = config
        .detect_cycles
        .then(|| CycleDetector::new(shapes, config.confirmation_threshold));

    for iteration in 0..shapes {
        let settled = sim.drop_next()?;

        if let Some(detector) = detector.as_mut() {
            if let Some(e) = detector.observe(iteration, sim.fingerprint(), settled.height)? {
                log::info!(
                    "extrapolated {} shapes from shape {} (height {}) to height {}",
                    shapes,
                    e.from_iteration,
                    e.from_height,
                    e.height
                );
                return Ok(Outcome {
                    height: e.height,
                    simulated: iteration + 1,
                    extrapolation: Some(e),
                });
            }
        }
    }

    log::info!(
        "simulated all {} shapes, height {}",
        shapes,
        sim.field().height()
    );
    Ok(Outcome {
        height: sim.field().height(),
        simulated: shapes,
        extrapolation: None,
    })
}

/// Height after `shapes` rocks for a raw jet pattern, with the standard
/// rocks in a field of the configured width.
pub fn solve(config: &Config, input: &str, shapes: i64) -> Result<Outcome> {
    tower_height(config, standard_catalog()?, parse_push_pattern(input)?, shapes)
}
