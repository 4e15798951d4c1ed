//! The application controller: owns the board state, the persistence
//! store, and the id generator, and wires them together.
//!
//! Every mutating call applies the corresponding pure [`BoardState`]
//! operation and, when the board actually changed, hands the new snapshot
//! to the store. Persistence is fire-and-forget: a failed save is logged
//! and the in-memory state stays authoritative. Selection-only changes are
//! not persisted — the selection is transient UI state.

use log::warn;

use crate::board::{visible_tasks, BoardState, Selection};
use crate::ids::TimestampIds;
use crate::storage::{BoardStore, StoreError};
use crate::types::{Board, Task, TaskFilter};

pub struct TaskBoard<S: BoardStore> {
    state: BoardState,
    store: S,
    ids: TimestampIds,
}

impl<S: BoardStore> TaskBoard<S> {
    /// Load prior state from the store; a store with no prior state yields
    /// an empty board.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let board = store.load()?.unwrap_or_default();
        Ok(Self {
            state: BoardState::new(board),
            store,
            ids: TimestampIds::default(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Adopt the next state; persist the snapshot when the board changed.
    fn commit(&mut self, next: BoardState) {
        let board_changed = next.board != self.state.board;
        self.state = next;
        if board_changed {
            if let Err(e) = self.store.save(&self.state.board) {
                warn!("failed to persist board: {e}");
            }
        }
    }

    pub fn add_column(&mut self, title: &str) {
        let next = self.state.add_column(title, &mut self.ids);
        self.commit(next);
    }

    pub fn delete_column(&mut self, column_id: &str) {
        let next = self.state.delete_column(column_id);
        self.commit(next);
    }

    pub fn update_column_title(&mut self, column_id: &str, title: &str) {
        let next = self.state.update_column_title(column_id, title);
        self.commit(next);
    }

    pub fn reorder_columns(&mut self, from_index: usize, to_index: usize) {
        let next = self.state.reorder_columns(from_index, to_index);
        self.commit(next);
    }

    pub fn add_task(&mut self, column_id: &str, text: &str) {
        let next = self.state.add_task(column_id, text, &mut self.ids);
        self.commit(next);
    }

    pub fn delete_task(&mut self, task_id: &str) {
        let next = self.state.delete_task(task_id);
        self.commit(next);
    }

    pub fn edit_task(&mut self, task_id: &str, text: &str) {
        let next = self.state.edit_task(task_id, text);
        self.commit(next);
    }

    pub fn toggle_task_completion(&mut self, task_id: &str) {
        let next = self.state.toggle_task_completion(task_id);
        self.commit(next);
    }

    pub fn move_task(
        &mut self,
        task_id: &str,
        source_column_id: &str,
        target_column_id: &str,
        target_index: usize,
    ) {
        let next = self
            .state
            .move_task(task_id, source_column_id, target_column_id, target_index);
        self.commit(next);
    }

    pub fn toggle_task_selection(&mut self, task_id: &str) {
        let next = self.state.toggle_task_selection(task_id);
        self.commit(next);
    }

    pub fn select_all_tasks_in_column(&mut self, column_id: &str) {
        let next = self.state.select_all_tasks_in_column(column_id);
        self.commit(next);
    }

    pub fn deselect_all_tasks_in_column(&mut self, column_id: &str) {
        let next = self.state.deselect_all_tasks_in_column(column_id);
        self.commit(next);
    }

    pub fn is_column_fully_selected(&self, column_id: &str) -> bool {
        self.state.is_column_fully_selected(column_id)
    }

    pub fn delete_selected_tasks(&mut self) {
        let next = self.state.delete_selected_tasks();
        self.commit(next);
    }

    pub fn update_selected_tasks_completion(&mut self, completed: bool) {
        let next = self.state.update_selected_tasks_completion(completed);
        self.commit(next);
    }

    pub fn move_selected_tasks_to_column(&mut self, target_column_id: &str) {
        let next = self.state.move_selected_tasks_to_column(target_column_id);
        self.commit(next);
    }

    /// Tasks of a column after search and completion filtering, in column
    /// order. Unknown columns display as empty.
    pub fn visible_tasks(
        &self,
        column_id: &str,
        search_query: &str,
        filter: TaskFilter,
    ) -> Vec<&Task> {
        self.state
            .board
            .column(column_id)
            .map(|column| visible_tasks(column, search_query, filter))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::local::JsonFileStore;
    use crate::storage::MemoryStore;

    fn column_id(board: &TaskBoard<impl BoardStore>, index: usize) -> String {
        board.board().columns[index].id.clone()
    }

    fn task_id_of(board: &TaskBoard<impl BoardStore>, text: &str) -> String {
        board
            .board()
            .columns
            .iter()
            .flat_map(|c| c.tasks.iter())
            .find(|t| t.text == text)
            .map(|t| t.id.clone())
            .unwrap()
    }

    #[test]
    fn test_open_with_empty_store_yields_empty_board() {
        let board = TaskBoard::open(MemoryStore::default()).unwrap();
        assert!(board.board().columns.is_empty());
        assert!(board.selection().is_empty());
    }

    #[test]
    fn test_mutations_persist_snapshots() {
        let mut board = TaskBoard::open(MemoryStore::default()).unwrap();
        board.add_column("To Do");
        let col = column_id(&board, 0);
        board.add_task(&col, "Write spec");

        let saved = board.store.load().unwrap().unwrap();
        assert_eq!(&saved, board.board());
    }

    #[test]
    fn test_selection_changes_are_not_persisted() {
        let mut board = TaskBoard::open(MemoryStore::default()).unwrap();
        board.add_column("To Do");
        let col = column_id(&board, 0);
        board.add_task(&col, "a");
        let snapshot = board.store.load().unwrap().unwrap();

        let task = task_id_of(&board, "a");
        board.toggle_task_selection(&task);
        assert_eq!(board.selection().len(), 1);
        // The stored board is untouched by a selection-only change.
        assert_eq!(board.store.load().unwrap().unwrap(), snapshot);
    }

    #[test]
    fn test_end_to_end_move_scenario() {
        let mut board = TaskBoard::open(MemoryStore::default()).unwrap();
        board.add_column("To Do");
        board.add_column("In Progress");
        let todo = column_id(&board, 0);
        let progress = column_id(&board, 1);

        board.add_task(&todo, "Write spec");
        board.add_task(&todo, "Write tests");
        let tests = task_id_of(&board, "Write tests");
        board.move_task(&tests, &todo, &progress, 0);

        let columns = &board.board().columns;
        assert_eq!(columns[0].tasks.len(), 1);
        assert_eq!(columns[0].tasks[0].text, "Write spec");
        assert_eq!(columns[1].tasks[0].text, "Write tests");
    }

    #[test]
    fn test_bulk_move_scenario() {
        let mut board = TaskBoard::open(MemoryStore::default()).unwrap();
        board.add_column("A");
        board.add_column("B");
        let col_a = column_id(&board, 0);
        let col_b = column_id(&board, 1);

        board.add_task(&col_a, "one");
        board.add_task(&col_b, "two");
        let one = task_id_of(&board, "one");
        let two = task_id_of(&board, "two");

        board.toggle_task_selection(&one);
        board.toggle_task_selection(&two);
        board.move_selected_tasks_to_column(&col_a);

        let texts: Vec<_> = board.board().columns[0]
            .tasks
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(texts, vec!["one", "two"]);
        assert!(board.board().columns[1].tasks.is_empty());
        assert!(board.selection().is_empty());
    }

    #[test]
    fn test_reopen_from_file_store_restores_board() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut board = TaskBoard::open(JsonFileStore::new(dir.path())).unwrap();
            board.add_column("To Do");
            let col = column_id(&board, 0);
            board.add_task(&col, "Buy milk");
            board.toggle_task_completion(&task_id_of(&board, "Buy milk"));
        }

        let board = TaskBoard::open(JsonFileStore::new(dir.path())).unwrap();
        assert_eq!(board.board().columns.len(), 1);
        assert_eq!(board.board().columns[0].tasks[0].text, "Buy milk");
        assert!(board.board().columns[0].tasks[0].completed);
        // Selection is transient and comes back empty.
        assert!(board.selection().is_empty());
    }

    #[test]
    fn test_visible_tasks_through_controller() {
        let mut board = TaskBoard::open(MemoryStore::default()).unwrap();
        board.add_column("To Do");
        let col = column_id(&board, 0);
        board.add_task(&col, "Buy milk");
        board.add_task(&col, "Call mom");

        let hits = board.visible_tasks(&col, "milk", TaskFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "Buy milk");
        assert!(board.visible_tasks("nope", "", TaskFilter::All).is_empty());
    }
}
