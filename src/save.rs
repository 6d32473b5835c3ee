//! Single-value persistence for the best-score record.
//!
//! Each key lives in its own small TOML file (`value = <integer>`) inside a
//! `data_folder` under the store's base directory.  The folder and the file
//! are created on first use.  Reading never fails from the caller's point of
//! view: a missing, empty or unreadable entry yields the supplied default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::RECORD_KEY;
use crate::error::SaveError;

const DATA_FOLDER: &str = "data_folder";
const FILE_EXTENSION: &str = "toml";

#[derive(Serialize, Deserialize, Debug, Default)]
struct Entry {
    value: Option<i64>,
}

#[derive(Clone, Debug)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    /// Store rooted at `base` (the data folder is created beneath it).
    pub fn new(base: impl AsRef<Path>) -> Self {
        SaveStore {
            dir: base.as_ref().join(DATA_FOLDER),
        }
    }

    /// `$HOME/.fly_rush`, or the working directory when `HOME` is unset.
    pub fn default_location() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Self::new(PathBuf::from(home).join(".fly_rush"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{FILE_EXTENSION}"))
    }

    /// Read `key`; `Ok(None)` when the entry is missing or empty.  Creates
    /// the data folder and an empty entry file if they don't exist yet.
    pub fn try_load(&self, key: &str) -> Result<Option<i64>, SaveError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path(key);
        if !path.exists() {
            fs::write(&path, "")?;
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        let entry: Entry = toml::from_str(&contents).map_err(|err| SaveError::Parse {
            key: key.to_string(),
            message: err.to_string(),
        })?;
        Ok(entry.value)
    }

    pub fn load(&self, key: &str, default: i64) -> i64 {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                log::warn!("failed to load '{key}' from {}: {err}", self.dir.display());
                default
            }
        }
    }

    pub fn save(&self, key: &str, value: i64) -> Result<(), SaveError> {
        fs::create_dir_all(&self.dir)?;
        let contents = toml::to_string(&Entry { value: Some(value) })
            .map_err(|err| SaveError::Serialize(err.to_string()))?;
        fs::write(self.path(key), contents)?;
        Ok(())
    }

    // ── Best score ───────────────────────────────────────────────────────────

    pub fn load_record(&self) -> u32 {
        let value = self.load(RECORD_KEY, 0);
        u32::try_from(value).unwrap_or(0)
    }

    /// Persist `score` if it beats `previous`; reports whether it did.
    pub fn save_record_if_beaten(&self, score: u32, previous: u32) -> Result<bool, SaveError> {
        if score <= previous {
            return Ok(false);
        }
        self.save(RECORD_KEY, i64::from(score))?;
        log::info!("record {score} saved to {}", self.dir.display());
        Ok(true)
    }
}
