use serde::{Deserialize, Serialize};

/// Logical key the persisted board blob is stored under.
pub const BOARD_STORE_KEY: &str = "columns";

/// Title shown for columns whose stored title is blank.
pub const UNTITLED_COLUMN: &str = "Untitled";

/// A unit of work. Ids are generated once at creation and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub completed: bool,
}

/// A named, ordered list of tasks. Task order is significant — it drives
/// both display order and move-target indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl Column {
    /// Stored titles may be blank; the display layer falls back to a default.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED_COLUMN
        } else {
            &self.title
        }
    }
}

/// The full board: an ordered sequence of columns.
///
/// Invariant: a task id appears in the task list of exactly one column
/// across the whole board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn column_mut(&mut self, column_id: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.id == column_id)
    }

    /// Find a task anywhere on the board, together with its owning column.
    pub fn find_task(&self, task_id: &str) -> Option<(&Column, &Task)> {
        self.columns.iter().find_map(|column| {
            let task = column.tasks.iter().find(|t| t.id == task_id)?;
            Some((column, task))
        })
    }

    pub fn task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.columns
            .iter_mut()
            .flat_map(|c| c.tasks.iter_mut())
            .find(|t| t.id == task_id)
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}

/// Display-time completion predicate, applied on top of the search result.
/// Not part of persisted state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl TaskFilter {
    pub fn keeps(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Incomplete => !task.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str) -> Task {
        Task {
            id: id.to_string(),
            text: format!("task {id}"),
            completed: false,
        }
    }

    #[test]
    fn test_display_title_fallback() {
        let mut column = Column {
            id: "c1".into(),
            title: "  ".into(),
            tasks: vec![],
        };
        assert_eq!(column.display_title(), UNTITLED_COLUMN);
        column.title = "Backlog".into();
        assert_eq!(column.display_title(), "Backlog");
    }

    #[test]
    fn test_find_task_reports_owning_column() {
        let board = Board {
            columns: vec![
                Column {
                    id: "c1".into(),
                    title: "Todo".into(),
                    tasks: vec![task("t1")],
                },
                Column {
                    id: "c2".into(),
                    title: "Done".into(),
                    tasks: vec![task("t2")],
                },
            ],
        };
        let (column, found) = board.find_task("t2").unwrap();
        assert_eq!(column.id, "c2");
        assert_eq!(found.id, "t2");
        assert!(board.find_task("missing").is_none());
    }

    #[test]
    fn test_completed_skipped_when_false() {
        let json = serde_json::to_string(&task("t1")).unwrap();
        assert!(!json.contains("completed"));
        let back: Task = serde_json::from_str(&json).unwrap();
        assert!(!back.completed);
    }
}
