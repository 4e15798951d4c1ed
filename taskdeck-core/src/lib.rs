//! Core engine for a personal task board: columns of tasks, reorderable,
//! searchable, and bulk-editable.
//!
//! Two independent pieces, composed only by the caller:
//! - the board state engine ([`board::BoardState`], driven through the
//!   [`app::TaskBoard`] controller), a pure invariant-preserving state
//!   machine over columns, tasks, and the multi-select set;
//! - the search/highlight pipeline ([`search::fuzzy_match`] feeding
//!   [`highlight::highlight_segments`]).
//!
//! Rendering, drag gesture handling, and the persistence transport are out
//! of scope; persistence goes through the [`storage::BoardStore`] trait.

pub mod app;
pub mod board;
pub mod distance;
pub mod highlight;
pub mod ids;
pub mod search;
pub mod storage;
pub mod types;

pub use app::TaskBoard;
pub use board::{visible_tasks, BoardState, Selection};
pub use distance::levenshtein;
pub use highlight::{highlight_segments, Segment, SegmentKind};
pub use ids::{IdGenerator, TimestampIds};
pub use search::{fuzzy_match, FuzzyResult};
pub use storage::{local::JsonFileStore, BoardStore, MemoryStore, StoreError};
pub use types::{Board, Column, Task, TaskFilter};
