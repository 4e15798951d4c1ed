//! Filesystem store for the board blob.
//!
//! One JSON file under a fixed logical key, written atomically
//! (write to .tmp, fsync, rename).

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::types::{Board, BOARD_STORE_KEY};

use super::{BoardStore, StoreError};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store rooted in `dir`; the blob lives at `<dir>/columns.json`.
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{BOARD_STORE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Atomic write: write to .tmp, fsync, rename over the target.
    fn atomic_write(path: &Path, content: &str) -> Result<(), io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl BoardStore for JsonFileStore {
    fn load(&self) -> Result<Option<Board>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, board: &Board) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(board)?;
        Self::atomic_write(&self.path, &json)?;
        Ok(())
    }
}
