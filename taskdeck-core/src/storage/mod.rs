pub mod local;

use std::sync::Mutex;

use crate::types::Board;

/// Abstract persistence for the board blob.
///
/// The controller calls `save` after every successful board mutation with
/// the full snapshot; `load` returns `None` when no prior state exists.
/// Implementations: `JsonFileStore` (filesystem), `MemoryStore`
/// (tests/ephemeral).
pub trait BoardStore: Send + Sync {
    fn load(&self) -> Result<Option<Board>, StoreError>;
    fn save(&self, board: &Board) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("stored board is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Keeps the board in memory only. Useful for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    board: Mutex<Option<Board>>,
}

impl BoardStore for MemoryStore {
    fn load(&self) -> Result<Option<Board>, StoreError> {
        Ok(self.board.lock().unwrap().clone())
    }

    fn save(&self, board: &Board) -> Result<(), StoreError> {
        *self.board.lock().unwrap() = Some(board.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::default();
        assert!(store.load().unwrap().is_none());

        let board = Board::default();
        store.save(&board).unwrap();
        assert_eq!(store.load().unwrap(), Some(board));
    }
}
