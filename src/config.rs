use crate::color::SnakeColor;
use crate::consts;
use crate::score::BestScoreStore;
use crate::util::{best_score_file_path, config_file_path};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Settings for the game itself
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        config_file_path().ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                log::debug!("No configuration file at {}; using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        log::debug!("Read configuration from {}", path.display());
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return where the best score should be kept: the file given in the
    /// configuration or, if that is not set, the default best score file
    /// path.
    ///
    /// If `self.files.save_best_score` is `false`, the best score is not
    /// kept.
    pub(crate) fn best_score_store(&self) -> BestScoreStore {
        if self.files.save_best_score {
            BestScoreStore::File(
                self.files
                    .best_score_file
                    .clone()
                    .or_else(best_score_file_path),
            )
        } else {
            BestScoreStore::Disabled
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    /// Width & height of the board, in cells
    pub(crate) board_size: BoardSize,

    /// Initial color of the snake
    pub(crate) snake_color: SnakeColor,
}

/// The number of cells along each side of the board
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "u16")]
pub(crate) struct BoardSize(u16);

impl BoardSize {
    pub(crate) fn get(self) -> u16 {
        self.0
    }
}

impl Default for BoardSize {
    fn default() -> BoardSize {
        BoardSize(consts::DEFAULT_BOARD_SIZE)
    }
}

impl TryFrom<u16> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(value: u16) -> Result<BoardSize, BoardSizeError> {
        if (consts::MIN_BOARD_SIZE..=consts::MAX_BOARD_SIZE).contains(&value) {
            Ok(BoardSize(value))
        } else {
            Err(BoardSizeError(value))
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}×{0}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error(
    "board size must be between {min} and {max}, got {0}",
    min = consts::MIN_BOARD_SIZE,
    max = consts::MAX_BOARD_SIZE
)]
pub(crate) struct BoardSizeError(u16);

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawFileConfig")]
pub(crate) struct FileConfig {
    /// Path at which the best score should be stored
    best_score_file: Option<PathBuf>,

    /// Whether to load & save the best score in a file
    save_best_score: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            best_score_file: None,
            save_best_score: true,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawFileConfig {
    best_score_file: Option<String>,
    save_best_score: bool,
}

impl Default for RawFileConfig {
    fn default() -> RawFileConfig {
        RawFileConfig {
            best_score_file: None,
            save_best_score: true,
        }
    }
}

impl TryFrom<RawFileConfig> for FileConfig {
    type Error = std::io::Error;

    fn try_from(value: RawFileConfig) -> Result<FileConfig, std::io::Error> {
        Ok(FileConfig {
            best_score_file: value
                .best_score_file
                .map(expanduser::expanduser)
                .transpose()?,
            save_best_score: value.save_best_score,
        })
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty() {
        let config = toml::from_str::<Config>("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.game.board_size.get(), 10);
        assert_eq!(config.game.snake_color, SnakeColor::Green);
        assert!(config.files.save_best_score);
    }

    #[test]
    fn full() {
        let config = toml::from_str::<Config>(concat!(
            "[game]\n",
            "board-size = 14\n",
            "snake-color = \"magenta\"\n",
            "\n",
            "[files]\n",
            "best-score-file = \"/var/games/snake.json\"\n",
            "save-best-score = true\n",
        ))
        .unwrap();
        assert_eq!(
            config,
            Config {
                game: GameConfig {
                    board_size: BoardSize(14),
                    snake_color: SnakeColor::Magenta,
                },
                files: FileConfig {
                    best_score_file: Some(PathBuf::from("/var/games/snake.json")),
                    save_best_score: true,
                },
            }
        );
        assert_eq!(
            config.best_score_store(),
            BestScoreStore::File(Some(PathBuf::from("/var/games/snake.json")))
        );
    }

    #[test]
    fn saving_disabled() {
        let config = toml::from_str::<Config>(concat!(
            "[files]\n",
            "best-score-file = \"/var/games/snake.json\"\n",
            "save-best-score = false\n",
        ))
        .unwrap();
        assert_eq!(config.best_score_store(), BestScoreStore::Disabled);
    }

    #[test]
    fn board_size_out_of_range() {
        let e = toml::from_str::<Config>("[game]\nboard-size = 40\n").unwrap_err();
        assert!(
            e.to_string()
                .contains("board size must be between 6 and 18, got 40"),
            "unexpected error message: {e}"
        );
        assert!(toml::from_str::<Config>("[game]\nboard-size = 5\n").is_err());
        assert!(toml::from_str::<Config>("[game]\nboard-size = 6\n").is_ok());
    }

    #[test]
    fn unknown_color() {
        assert!(toml::from_str::<Config>("[game]\nsnake-color = \"plaid\"\n").is_err());
    }

    #[test]
    fn load_missing() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_file() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[game]\nsnake-color = \"cyan\"\n").unwrap();
        let config = Config::load(&path, false).unwrap();
        assert_eq!(config.game.snake_color, SnakeColor::Cyan);
        assert_eq!(config.game.board_size, BoardSize::default());
    }

    #[test]
    fn load_invalid() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[game\n").unwrap();
        assert!(matches!(
            Config::load(&path, true),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn board_size_display() {
        assert_eq!(BoardSize::default().to_string(), "10×10");
    }
}
