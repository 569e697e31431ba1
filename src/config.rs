use crate::consts;
use crate::game::Grid;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Board geometry & timing
    #[serde(default)]
    pub(crate) game: GameConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("torsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized or describe an unplayable game.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Validated settings for the game itself
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    pub(crate) grid: Grid,

    /// Number of frames between movements of the snake
    pub(crate) move_interval: u32,

    /// Frames per second
    pub(crate) frame_rate: u16,
}

impl GameConfig {
    /// Time between one frame and the next
    pub(crate) fn frame_period(&self) -> Duration {
        Duration::from_secs(1) / u32::from(self.frame_rate.max(1))
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            grid: Grid::default(),
            move_interval: consts::DEFAULT_MOVE_INTERVAL,
            frame_rate: consts::DEFAULT_FRAME_RATE,
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    canvas_size: u16,
    cell_size: u16,
    move_interval: u32,
    frame_rate: u16,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            canvas_size: consts::DEFAULT_CANVAS_SIZE,
            cell_size: consts::DEFAULT_CELL_SIZE,
            move_interval: consts::DEFAULT_MOVE_INTERVAL,
            frame_rate: consts::DEFAULT_FRAME_RATE,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = InvalidGameConfig;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, InvalidGameConfig> {
        if value.cell_size == 0 {
            return Err(InvalidGameConfig::ZeroCellSize);
        }
        if value.move_interval == 0 {
            return Err(InvalidGameConfig::ZeroMoveInterval);
        }
        if value.frame_rate == 0 {
            return Err(InvalidGameConfig::ZeroFrameRate);
        }
        let grid = Grid::new(value.canvas_size, value.cell_size).ok_or(
            InvalidGameConfig::TooFewTiles {
                canvas_size: value.canvas_size,
                cell_size: value.cell_size,
            },
        )?;
        Ok(GameConfig {
            grid,
            move_interval: value.move_interval,
            frame_rate: value.frame_rate,
        })
    }
}

/// Error returned when the `[game]` table describes a game that can't be
/// played
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum InvalidGameConfig {
    #[error("cell-size must be greater than zero")]
    ZeroCellSize,
    #[error("move-interval must be greater than zero")]
    ZeroMoveInterval,
    #[error("frame-rate must be greater than zero")]
    ZeroFrameRate,
    #[error(
        "canvas-size {canvas_size} with cell-size {cell_size} leaves fewer than {min} cells per side",
        min = consts::MIN_TILE_COUNT
    )]
    TooFewTiles { canvas_size: u16, cell_size: u16 },
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
