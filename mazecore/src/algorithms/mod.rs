mod backtracker;
mod rnd_kruskals;

use std::{fmt, str::FromStr};

use rand::{thread_rng, Rng as _, SeedableRng as _};
use serde::{Deserialize, Serialize};

use crate::{dims::Dims, grid::Grid};

pub use backtracker::RandomBacktracker;
pub use rnd_kruskals::RndKruskals;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Carves passages into a grid whose cells are all still walled.
pub trait MazeGenerator: fmt::Debug + Sync + Send {
    fn generate(&self, grid: &mut Grid, rng: &mut Random);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    #[default]
    Backtracker,
    Kruskals,
}

impl GeneratorKind {
    pub fn generator(self) -> &'static dyn MazeGenerator {
        match self {
            GeneratorKind::Backtracker => &RandomBacktracker,
            GeneratorKind::Kruskals => &RndKruskals,
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "backtracker" | "dfs" => Ok(GeneratorKind::Backtracker),
            "kruskals" | "kruskal" => Ok(GeneratorKind::Kruskals),
            _ => Err(format!("unknown generator '{s}'")),
        }
    }
}

pub fn new_rng(seed: Option<u64>) -> (Random, u64) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    (Random::seed_from_u64(seed), seed)
}

/// Generates a maze with the randomized backtracker, returns the seed used.
pub fn generate_maze(grid: &mut Grid, seed: Option<u64>) -> u64 {
    generate_maze_with(GeneratorKind::Backtracker, grid, seed)
}

pub fn generate_maze_with(kind: GeneratorKind, grid: &mut Grid, seed: Option<u64>) -> u64 {
    let (mut rng, seed) = new_rng(seed);
    log::debug!(
        "Generating {}x{} maze with {:?}, seed {}",
        grid.rows(),
        grid.cols(),
        kind,
        seed
    );

    kind.generator().generate(grid, &mut rng);
    seed
}

/// Start on a random row of the first column, goal on a random row of the last one.
pub fn random_endpoints(grid: &Grid, rng: &mut Random) -> (Dims, Dims) {
    let rows = grid.rows() as i32;
    let last_col = grid.cols() as i32 - 1;

    let start = Dims::from_row_col(rng.gen_range(0..rows), 0);
    let goal = Dims::from_row_col(rng.gen_range(0..rows), last_col);
    (start, goal)
}
