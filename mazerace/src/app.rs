use std::io;

use mazecore::{
    algorithms::{new_rng, random_endpoints, GeneratorKind},
    harness::{compare, time_search},
    AlgorithmChoice, Dims, Grid, GridError,
};
use thiserror::Error;

use crate::{
    report,
    settings::{Settings, SettingsError},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

/// Everything a single run needs, resolved from the settings and the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub rows: usize,
    pub cols: usize,
    pub algorithm: AlgorithmChoice,
    pub generator: GeneratorKind,
    pub seed: Option<u64>,
    pub show_maze: bool,
}

impl RunConfig {
    /// Explicit `dims` (rows, cols) win over the size preset of the settings.
    pub fn from_settings(
        settings: &Settings,
        dims: Option<(usize, usize)>,
        seed: Option<u64>,
    ) -> Self {
        let (rows, cols) = dims.unwrap_or_else(|| {
            let side = settings.get_size().side();
            (side, side)
        });

        RunConfig {
            rows,
            cols,
            algorithm: settings.get_algorithm(),
            generator: settings.get_generator(),
            seed,
            show_maze: settings.get_show_maze(),
        }
    }
}

#[derive(Debug)]
pub struct Race {
    pub grid: Grid,
    pub start: Dims,
    pub goal: Dims,
    pub seed: u64,
}

impl Race {
    /// Generates the maze and picks endpoints on its left and right edge.
    pub fn prepare(config: &RunConfig) -> Result<Self, AppError> {
        let mut grid = Grid::new(config.rows, config.cols)?;
        let (mut rng, seed) = new_rng(config.seed);
        log::info!("Maze {}x{}, seed {}", config.rows, config.cols, seed);

        config.generator.generator().generate(&mut grid, &mut rng);
        let (start, goal) = random_endpoints(&grid, &mut rng);
        log::debug!("Start {}, goal {}", start, goal);

        Ok(Race {
            grid,
            start,
            goal,
            seed,
        })
    }
}

pub fn run(config: &RunConfig, out: &mut impl io::Write) -> Result<(), AppError> {
    let race = Race::prepare(config)?;
    writeln!(
        out,
        "Maze {}x{} (seed {}), start {}, goal {}",
        config.rows, config.cols, race.seed, race.start, race.goal
    )?;

    let shown_path = match config.algorithm {
        AlgorithmChoice::Single(algorithm) => {
            let result = time_search(algorithm, &race.grid, race.start, race.goal)?;
            if !result.found {
                log::warn!("{} did not reach the goal", result.label());
            }
            report::write_single(out, &result)?;
            result.path
        }
        AlgorithmChoice::CompareAll => {
            let results = compare(&race.grid, race.start, race.goal)?;
            report::write_comparison(out, &results)?;
            results
                .into_iter()
                .next()
                .map(|fastest| fastest.path)
                .unwrap_or_default()
        }
    };

    if config.show_maze {
        write!(
            out,
            "{}",
            report::draw_maze(&race.grid, race.start, race.goal, &shown_path)
        )?;
    }

    Ok(())
}
