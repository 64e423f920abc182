use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::pathfinding::Algorithm;

/// Preset square maze sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MazeSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl MazeSize {
    /// Rows and columns of the maze, the preset mazes are square.
    pub const fn side(self) -> usize {
        match self {
            MazeSize::Small => 20,
            MazeSize::Medium => 30,
            MazeSize::Large => 40,
        }
    }
}

impl FromStr for MazeSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" | "s" => Ok(MazeSize::Small),
            "medium" | "m" => Ok(MazeSize::Medium),
            "large" | "l" => Ok(MazeSize::Large),
            _ => Err(format!("unknown maze size '{s}'")),
        }
    }
}

/// What to do once the maze is generated.
///
/// Serialized with the same flat names the command line takes: `bfs`, `dfs`, `dijkstra`,
/// `astar` or `compare`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ChoiceName", into = "ChoiceName")]
pub enum AlgorithmChoice {
    Single(Algorithm),
    #[default]
    CompareAll,
}

impl AlgorithmChoice {
    pub const BFS: Self = Self::Single(Algorithm::Bfs);
    pub const DFS: Self = Self::Single(Algorithm::Dfs);
    pub const DIJKSTRA: Self = Self::Single(Algorithm::Dijkstra);
    pub const ASTAR: Self = Self::Single(Algorithm::AStar);
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ChoiceName {
    Bfs,
    Dfs,
    Dijkstra,
    #[serde(alias = "a_star")]
    Astar,
    #[serde(alias = "compare_all", alias = "all")]
    Compare,
}

impl From<ChoiceName> for AlgorithmChoice {
    fn from(name: ChoiceName) -> Self {
        match name {
            ChoiceName::Bfs => AlgorithmChoice::BFS,
            ChoiceName::Dfs => AlgorithmChoice::DFS,
            ChoiceName::Dijkstra => AlgorithmChoice::DIJKSTRA,
            ChoiceName::Astar => AlgorithmChoice::ASTAR,
            ChoiceName::Compare => AlgorithmChoice::CompareAll,
        }
    }
}

impl From<AlgorithmChoice> for ChoiceName {
    fn from(choice: AlgorithmChoice) -> Self {
        match choice {
            AlgorithmChoice::Single(Algorithm::Bfs) => ChoiceName::Bfs,
            AlgorithmChoice::Single(Algorithm::Dfs) => ChoiceName::Dfs,
            AlgorithmChoice::Single(Algorithm::Dijkstra) => ChoiceName::Dijkstra,
            AlgorithmChoice::Single(Algorithm::AStar) => ChoiceName::Astar,
            AlgorithmChoice::CompareAll => ChoiceName::Compare,
        }
    }
}

impl FromStr for AlgorithmChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compare" | "compare-all" | "all" => Ok(AlgorithmChoice::CompareAll),
            other => other.parse().map(AlgorithmChoice::Single),
        }
    }
}

impl fmt::Display for AlgorithmChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmChoice::Single(algorithm) => fmt::Display::fmt(algorithm, f),
            AlgorithmChoice::CompareAll => f.write_str("compare all"),
        }
    }
}
