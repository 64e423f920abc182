use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use mazecore::{algorithms::GeneratorKind, AlgorithmChoice, MazeSize};
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::base_path;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no preference directory on this platform")]
    NoConfigDir,
    #[error("cannot access settings file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid settings file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("cannot serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub size: Option<MazeSize>,
    #[serde(default)]
    pub algorithm: Option<AlgorithmChoice>,
    #[serde(default)]
    pub generator: Option<GeneratorKind>,
    #[serde(default)]
    pub show_maze: Option<bool>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_path() -> Result<PathBuf, SettingsError> {
        base_path()
            .map(|dir| dir.join("settings.ron"))
            .ok_or(SettingsError::NoConfigDir)
    }

    pub fn set_size(mut self, value: MazeSize) -> Self {
        self.size = Some(value);
        self
    }

    pub fn get_size(&self) -> MazeSize {
        self.size.unwrap_or_default()
    }

    pub fn set_algorithm(mut self, value: AlgorithmChoice) -> Self {
        self.algorithm = Some(value);
        self
    }

    pub fn get_algorithm(&self) -> AlgorithmChoice {
        self.algorithm.unwrap_or_default()
    }

    pub fn set_generator(mut self, value: GeneratorKind) -> Self {
        self.generator = Some(value);
        self
    }

    pub fn get_generator(&self) -> GeneratorKind {
        self.generator.unwrap_or_default()
    }

    pub fn set_show_maze(mut self, value: bool) -> Self {
        self.show_maze = Some(value);
        self
    }

    pub fn get_show_maze(&self) -> bool {
        self.show_maze.unwrap_or(false)
    }

    pub fn get_log_level(&self) -> log::LevelFilter {
        match self.log_level.as_deref().map(log::LevelFilter::from_str) {
            None => log::LevelFilter::Warn,
            Some(Ok(level)) => level,
            Some(Err(_)) => {
                log::warn!("Invalid log level in settings, using 'warn'");
                log::LevelFilter::Warn
            }
        }
    }

    fn ron_options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn from_ron(source: &str) -> Result<Self, SettingsError> {
        Ok(Self::ron_options().from_str(source)?)
    }

    pub fn to_ron(&self) -> Result<String, SettingsError> {
        let config = ron::ser::PrettyConfig::default();
        Ok(Self::ron_options().to_string_pretty(self, config)?)
    }

    /// Loads the settings, writing the defaults first if the file doesn't exist yet.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(source) => Self::from_ron(&source),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Self::reset_config(path)?;
                Self::from_ron(DEFAULT_SETTINGS)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        Self::write(path, &self.to_ron()?)
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        Self::write(path, DEFAULT_SETTINGS)
    }

    fn write(path: &Path, contents: &str) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        Ok(())
    }
}
