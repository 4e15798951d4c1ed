//! The board state engine: columns, tasks, and the multi-select set.
//!
//! Every operation is a pure transformation `(Board, Selection) ->
//! (Board, Selection)`: the receiver is never mutated, a new state value is
//! returned. Referencing a column or task id that no longer exists is a
//! silent no-op — stale UI references (e.g. a drag event for an
//! already-deleted task) must not desync the board. Out-of-range indices
//! are clamped into the valid range.
//!
//! Invariants preserved across all operations:
//! - a task id lives in the task list of exactly one column;
//! - every id in the selection references a task present on the board.

use std::collections::BTreeSet;

use crate::ids::IdGenerator;
use crate::search::fuzzy_match;
use crate::types::{Board, Column, Task, TaskFilter, UNTITLED_COLUMN};

/// Task ids currently marked for bulk action.
pub type Selection = BTreeSet<String>;

/// Board plus selection, the complete mutable state of the application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    pub board: Board,
    pub selection: Selection,
}

impl BoardState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            selection: Selection::new(),
        }
    }

    /// Append a new empty column. A blank title is stored as-is; the
    /// display layer falls back to a default.
    pub fn add_column(&self, title: &str, ids: &mut dyn IdGenerator) -> Self {
        let mut next = self.clone();
        next.board.columns.push(Column {
            id: ids.next_id("col"),
            title: title.trim().to_string(),
            tasks: Vec::new(),
        });
        next
    }

    /// Remove a column and drop all of its tasks from the selection.
    pub fn delete_column(&self, column_id: &str) -> Self {
        let Some(pos) = self.board.columns.iter().position(|c| c.id == column_id) else {
            return self.clone();
        };
        let mut next = self.clone();
        let removed = next.board.columns.remove(pos);
        for task in &removed.tasks {
            next.selection.remove(&task.id);
        }
        next
    }

    /// Set a column title to the trimmed value, or the default when the
    /// trim comes out empty.
    pub fn update_column_title(&self, column_id: &str, title: &str) -> Self {
        let mut next = self.clone();
        if let Some(column) = next.board.column_mut(column_id) {
            let trimmed = title.trim();
            column.title = if trimmed.is_empty() {
                UNTITLED_COLUMN.to_string()
            } else {
                trimmed.to_string()
            };
        }
        next
    }

    /// List-splice reorder: remove at `from_index`, reinsert at `to_index`
    /// (the insertion index applies to the list with the column already
    /// removed). Indices are clamped into the valid range.
    pub fn reorder_columns(&self, from_index: usize, to_index: usize) -> Self {
        let len = self.board.columns.len();
        if len == 0 {
            return self.clone();
        }
        let from = from_index.min(len - 1);
        let to = to_index.min(len - 1);
        if from == to {
            return self.clone();
        }
        let mut next = self.clone();
        let column = next.board.columns.remove(from);
        next.board.columns.insert(to, column);
        next
    }

    /// Append a fresh task to a column. Blank text is discarded.
    pub fn add_task(&self, column_id: &str, text: &str, ids: &mut dyn IdGenerator) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        if let Some(column) = next.board.column_mut(column_id) {
            column.tasks.push(Task {
                id: ids.next_id("task"),
                text: trimmed.to_string(),
                completed: false,
            });
        }
        next
    }

    /// Remove a task from whichever column holds it, and from the selection.
    pub fn delete_task(&self, task_id: &str) -> Self {
        let mut next = self.clone();
        for column in &mut next.board.columns {
            column.tasks.retain(|t| t.id != task_id);
        }
        next.selection.remove(task_id);
        next
    }

    /// Replace a task's text with the trimmed value. An edit that trims to
    /// empty is discarded, not applied.
    pub fn edit_task(&self, task_id: &str, text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        if let Some(task) = next.board.task_mut(task_id) {
            task.text = trimmed.to_string();
        }
        next
    }

    pub fn toggle_task_completion(&self, task_id: &str) -> Self {
        let mut next = self.clone();
        if let Some(task) = next.board.task_mut(task_id) {
            task.completed = !task.completed;
        }
        next
    }

    /// Move a task out of `source_column_id` and insert it at
    /// `target_index` in the target column, clamped to the list length
    /// after removal (so same-column moves past the task's own slot land
    /// where the caller expects). If the task is not actually in the
    /// source column the whole operation is a no-op — a desynced drag
    /// event must not duplicate or lose the task.
    pub fn move_task(
        &self,
        task_id: &str,
        source_column_id: &str,
        target_column_id: &str,
        target_index: usize,
    ) -> Self {
        let mut next = self.clone();
        let Some(task) = next.board.column_mut(source_column_id).and_then(|column| {
            let pos = column.tasks.iter().position(|t| t.id == task_id)?;
            Some(column.tasks.remove(pos))
        }) else {
            return self.clone();
        };

        let Some(target) = next.board.column_mut(target_column_id) else {
            // Unknown target: abandon the half-applied move.
            return self.clone();
        };
        let index = target_index.min(target.tasks.len());
        target.tasks.insert(index, task);
        next
    }

    /// Add the task to the selection if absent, remove it if present.
    /// Unknown ids are ignored so the selection never holds dangling ids.
    pub fn toggle_task_selection(&self, task_id: &str) -> Self {
        let mut next = self.clone();
        if !next.selection.remove(task_id) && self.board.find_task(task_id).is_some() {
            next.selection.insert(task_id.to_string());
        }
        next
    }

    pub fn select_all_tasks_in_column(&self, column_id: &str) -> Self {
        let mut next = self.clone();
        if let Some(column) = self.board.column(column_id) {
            for task in &column.tasks {
                next.selection.insert(task.id.clone());
            }
        }
        next
    }

    pub fn deselect_all_tasks_in_column(&self, column_id: &str) -> Self {
        let mut next = self.clone();
        if let Some(column) = self.board.column(column_id) {
            for task in &column.tasks {
                next.selection.remove(&task.id);
            }
        }
        next
    }

    /// True iff the column has at least one task and every one of them is
    /// selected. An empty column is never "fully selected".
    pub fn is_column_fully_selected(&self, column_id: &str) -> bool {
        match self.board.column(column_id) {
            Some(column) => {
                !column.tasks.is_empty()
                    && column.tasks.iter().all(|t| self.selection.contains(&t.id))
            }
            None => false,
        }
    }

    /// Remove every selected task from the board and clear the selection.
    pub fn delete_selected_tasks(&self) -> Self {
        if self.selection.is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        let selected = std::mem::take(&mut next.selection);
        for column in &mut next.board.columns {
            column.tasks.retain(|t| !selected.contains(&t.id));
        }
        next
    }

    /// Set the completed flag on every selected task, wherever it lives.
    pub fn update_selected_tasks_completion(&self, completed: bool) -> Self {
        if self.selection.is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        for column in &mut next.board.columns {
            for task in &mut column.tasks {
                if self.selection.contains(&task.id) {
                    task.completed = completed;
                }
            }
        }
        next
    }

    /// Move every selected task to the end of the target column, in board
    /// encounter order, then clear the selection. Tasks already in the
    /// target column move to its end.
    pub fn move_selected_tasks_to_column(&self, target_column_id: &str) -> Self {
        if self.selection.is_empty() || self.board.column(target_column_id).is_none() {
            return self.clone();
        }
        let mut next = self.clone();
        let selected = std::mem::take(&mut next.selection);

        let mut moved = Vec::new();
        for column in &mut next.board.columns {
            let mut kept = Vec::with_capacity(column.tasks.len());
            for task in column.tasks.drain(..) {
                if selected.contains(&task.id) {
                    moved.push(task);
                } else {
                    kept.push(task);
                }
            }
            column.tasks = kept;
        }
        if let Some(target) = next.board.column_mut(target_column_id) {
            target.tasks.extend(moved);
        }
        next
    }
}

/// Read-only display composition: tasks matching the search query (all
/// tasks when the trimmed query is blank), further restricted by the
/// completion filter. Column order is preserved.
pub fn visible_tasks<'a>(
    column: &'a Column,
    search_query: &str,
    filter: TaskFilter,
) -> Vec<&'a Task> {
    let query = search_query.trim();
    column
        .tasks
        .iter()
        .filter(|task| query.is_empty() || fuzzy_match(&task.text, query).is_some())
        .filter(|task| filter.keeps(task))
        .collect()
}
