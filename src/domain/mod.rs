//! Domain models for the kanban board
//!
//! Contains the core board logic without any I/O concerns.

mod id;
mod list;
mod task;
mod board;
mod drag;
mod snapshot;
mod intent;
pub mod seed;

pub use id::{IdError, IdGenerator, ListId, TaskId};
pub use list::{validate_list_title, List, ListTitleError, LIST_TITLE_HINT};
pub use task::Task;
pub use board::{Board, BoardError, TaskDropTarget};
pub use drag::{DragController, DragItem, DragState};
pub use snapshot::{BoardSnapshot, Column, DragOverlay, TaskView};
pub use intent::{Applied, Intent, Session};
