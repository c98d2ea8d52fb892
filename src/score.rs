//! Persistent storage of the best score
use std::path::PathBuf;
use thiserror::Error;

/// Something that can remember the best score across runs of the program
pub(crate) trait ScoreStore {
    /// Return the stored best score, or 0 if nothing has been stored yet
    fn load(&mut self) -> Result<u32, LoadError>;

    /// Store `score` as the new best score
    fn save(&mut self, score: u32) -> Result<(), SaveError>;
}

/// Where the best score is kept
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum BestScoreStore {
    /// Keep the best score as a JSON integer in a file.  `None` means that a
    /// path was wanted but none could be determined.
    File(Option<PathBuf>),

    /// Do not remember the best score between runs
    Disabled,
}

impl ScoreStore for BestScoreStore {
    fn load(&mut self) -> Result<u32, LoadError> {
        let path = match &*self {
            BestScoreStore::File(Some(path)) => path,
            BestScoreStore::File(None) => return Err(LoadError::no_path()),
            BestScoreStore::Disabled => return Ok(0),
        };
        let src = match fs_err::read(path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::read(e)),
        };
        serde_json::from_slice(&src).map_err(LoadError::deserialize)
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        let path = match &*self {
            BestScoreStore::File(Some(path)) => path,
            BestScoreStore::File(None) => return Err(SaveError::no_path()),
            BestScoreStore::Disabled => return Ok(()),
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string(&score).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(path, &src).map_err(SaveError::write)?;
        log::info!("Saved best score {score} to {}", path.display());
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save best score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn no_path() -> Self {
        SaveError(SaveErrorSource::NoPath)
    }

    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    pub(crate) fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize best score")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write best score to disk")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read best score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn no_path() -> Self {
        LoadError(LoadErrorSource::NoPath)
    }

    pub(crate) fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to read best score file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize best score")]
    Deserialize(#[source] serde_json::Error),
}

/// An in-memory [`ScoreStore`] that can be told to fail
#[cfg(test)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct MemoryStore {
    pub(crate) value: u32,
    pub(crate) saves: usize,
    pub(crate) broken: bool,
}

#[cfg(test)]
impl ScoreStore for MemoryStore {
    fn load(&mut self) -> Result<u32, LoadError> {
        if self.broken {
            Err(LoadError::read(std::io::Error::other("disk on fire")))
        } else {
            Ok(self.value)
        }
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        if self.broken {
            Err(SaveError::write(std::io::Error::other("disk on fire")))
        } else {
            self.value = score;
            self.saves += 1;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_zero() {
        let tmpdir = tempdir().unwrap();
        let mut store = BestScoreStore::File(Some(tmpdir.path().join("best-score.json")));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn save_then_load() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("nested").join("best-score.json");
        let mut store = BestScoreStore::File(Some(path.clone()));
        store.save(42).unwrap();
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "42\n");
        assert_eq!(store.load().unwrap(), 42);
        store.save(0).unwrap();
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn load_garbage() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("best-score.json");
        fs_err::write(&path, "{\"best\": \"lots\"}\n").unwrap();
        let mut store = BestScoreStore::File(Some(path));
        let e = store.load().unwrap_err();
        assert_eq!(e.to_string(), "Failed to read best score from disk");
        let src = std::error::Error::source(&e).unwrap();
        assert_eq!(src.to_string(), "failed to deserialize best score");
    }

    #[test]
    fn load_negative() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("best-score.json");
        fs_err::write(&path, "-3\n").unwrap();
        let mut store = BestScoreStore::File(Some(path));
        assert!(store.load().is_err());
    }

    #[test]
    fn no_path() {
        let mut store = BestScoreStore::File(None);
        assert!(store.load().is_err());
        let e = store.save(3).unwrap_err();
        let src = std::error::Error::source(&e).unwrap();
        assert_eq!(
            src.to_string(),
            "failed to determine path to local data directory"
        );
    }

    #[test]
    fn disabled() {
        let mut store = BestScoreStore::Disabled;
        store.save(17).unwrap();
        assert_eq!(store.load().unwrap(), 0);
    }
}
