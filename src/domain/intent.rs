//! User intents and the session that applies them
//!
//! An [`Intent`] is one discrete thing the presentation layer asks for:
//! a CRUD edit or a drag lifecycle event. [`Session`] owns the board and
//! the drag controller and applies intents one at a time; each runs to
//! completion before the next is accepted.

use serde::{Deserialize, Serialize};

use super::board::{Board, BoardError};
use super::drag::{DragController, DragItem};
use super::id::{ListId, TaskId};
use super::list::List;
use super::snapshot::{BoardSnapshot, DragOverlay};
use super::task::Task;

/// Inbound operation from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Intent {
    CreateList {
        title: String,
    },
    DeleteList {
        id: ListId,
    },
    UpdateListTitle {
        id: ListId,
        title: String,
    },
    CreateTask {
        list_id: ListId,
        /// Accepted for callers that send the column label along; the
        /// status is always taken from the list itself
        #[serde(default, skip_serializing_if = "Option::is_none")]
        list_title: Option<String>,
        title: String,
        #[serde(default)]
        description: String,
    },
    UpdateTask {
        id: TaskId,
        title: String,
        #[serde(default)]
        description: String,
    },
    DeleteTask {
        id: TaskId,
    },
    DragStart {
        item: DragItem,
    },
    DragOver {
        active: DragItem,
        #[serde(default)]
        over: Option<DragItem>,
    },
    DragEnd {
        active: DragItem,
        #[serde(default)]
        over: Option<DragItem>,
    },
    DragCancel,
}

impl Intent {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Intent::CreateList { .. } => "create_list",
            Intent::DeleteList { .. } => "delete_list",
            Intent::UpdateListTitle { .. } => "update_list_title",
            Intent::CreateTask { .. } => "create_task",
            Intent::UpdateTask { .. } => "update_task",
            Intent::DeleteTask { .. } => "delete_task",
            Intent::DragStart { .. } => "drag_start",
            Intent::DragOver { .. } => "drag_over",
            Intent::DragEnd { .. } => "drag_end",
            Intent::DragCancel => "drag_cancel",
        }
    }
}

/// What applying an intent did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    ListCreated(List),
    TaskCreated(Task),
    /// The board changed
    Changed,
    /// The board is unchanged: unknown id, hovering self, and so on
    Unchanged,
    /// Drag state changed without touching the board
    DragStarted(DragItem),
    DragEnded,
}

impl Applied {
    pub fn changed_board(&self) -> bool {
        matches!(
            self,
            Applied::ListCreated(_) | Applied::TaskCreated(_) | Applied::Changed
        )
    }
}

fn changed(flag: bool) -> Applied {
    if flag {
        Applied::Changed
    } else {
        Applied::Unchanged
    }
}

/// A board plus its drag controller
#[derive(Debug, Clone, Default)]
pub struct Session {
    board: Board,
    drag: DragController,
}

impl Session {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            drag: DragController::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Applies one intent
    ///
    /// Only creation can be rejected; the board is unchanged when it is.
    pub fn apply(&mut self, intent: Intent) -> Result<Applied, BoardError> {
        let applied = match intent {
            Intent::CreateList { title } => Applied::ListCreated(self.board.create_list(&title)?),
            Intent::DeleteList { id } => changed(self.board.delete_list(id)),
            Intent::UpdateListTitle { id, title } => changed(self.board.update_list_title(id, title)),
            Intent::CreateTask {
                list_id,
                title,
                description,
                ..
            } => Applied::TaskCreated(self.board.create_task(list_id, title, description)?),
            Intent::UpdateTask {
                id,
                title,
                description,
            } => changed(self.board.update_task(id, title, description)),
            Intent::DeleteTask { id } => changed(self.board.delete_task(id)),
            Intent::DragStart { item } => {
                if self.drag.drag_start(&self.board, item) {
                    Applied::DragStarted(item)
                } else {
                    Applied::Unchanged
                }
            }
            Intent::DragOver { active, over } => {
                changed(self.drag.drag_over(&mut self.board, active, over))
            }
            Intent::DragEnd { active, over } => {
                if self.drag.drag_end(&mut self.board, active, over) {
                    Applied::Changed
                } else {
                    Applied::DragEnded
                }
            }
            Intent::DragCancel => {
                self.drag.drag_cancel();
                Applied::DragEnded
            }
        };
        Ok(applied)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    pub fn overlay(&self) -> DragOverlay {
        self.drag.overlay(&self.board)
    }
}
