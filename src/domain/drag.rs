//! Drag-and-drop interaction controller
//!
//! Turns the start / over / end lifecycle of a drag gesture into board
//! mutations. Lists and tasks commit at different points:
//!
//! | Dragging | `over` | `end` |
//! |----------|--------|-------|
//! | list | nothing | [`Board::reorder_lists`] |
//! | task | [`Board::reorder_task`], live while hovering | nothing |
//!
//! The controller only remembers which entity is being dragged. It holds
//! ids, never copies, so the overlay always shows the entity as it is now.

use serde::{Deserialize, Serialize};

use super::board::{Board, TaskDropTarget};
use super::id::{ListId, TaskId};
use super::snapshot::DragOverlay;

/// A draggable or droppable entity on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragItem {
    List(ListId),
    Task(TaskId),
}

/// Drag lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingList(ListId),
    DraggingTask(TaskId),
}

/// Tracks the current drag and routes its events to the board
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state != DragState::Idle
    }

    /// Begins dragging `item`, replacing any drag in progress
    ///
    /// Returns false, and stays idle, if the item is not on the board.
    pub fn drag_start(&mut self, board: &Board, item: DragItem) -> bool {
        self.state = match item {
            DragItem::List(id) if board.list(id).is_some() => DragState::DraggingList(id),
            DragItem::Task(id) if board.task(id).is_some() => DragState::DraggingTask(id),
            _ => DragState::Idle,
        };
        self.is_dragging()
    }

    /// Handles the pointer hovering `over` while `active` is dragged
    ///
    /// Only task drags mutate here. Returns true if the board changed.
    pub fn drag_over(&mut self, board: &mut Board, active: DragItem, over: Option<DragItem>) -> bool {
        let Some(over) = over else {
            return false;
        };
        if over == active {
            return false;
        }
        let DragState::DraggingTask(dragged) = self.state else {
            return false;
        };
        let DragItem::Task(active_id) = active else {
            return false;
        };
        if active_id != dragged {
            return false;
        }

        let target = match over {
            DragItem::Task(over_id) => TaskDropTarget::Task(over_id),
            DragItem::List(list_id) => TaskDropTarget::List(list_id),
        };
        board.reorder_task(active_id, target)
    }

    /// Finishes the drag, committing a list move if one was in progress
    ///
    /// Dropping a list onto a task drops it onto that task's column. The
    /// controller is idle afterwards whatever the outcome. Returns true if
    /// the board changed.
    pub fn drag_end(&mut self, board: &mut Board, active: DragItem, over: Option<DragItem>) -> bool {
        let state = std::mem::take(&mut self.state);

        let (DragState::DraggingList(dragged), DragItem::List(active_id)) = (state, active) else {
            return false;
        };
        if dragged != active_id {
            return false;
        }

        let over_list = match over {
            Some(DragItem::List(id)) => id,
            Some(DragItem::Task(id)) => match board.task(id) {
                Some(task) => task.list_id,
                None => return false,
            },
            None => return false,
        };
        board.reorder_lists(active_id, over_list)
    }

    /// Abandons the drag without touching the board
    pub fn drag_cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// The dragged entity resolved against the current board
    pub fn overlay(&self, board: &Board) -> DragOverlay {
        match self.state {
            DragState::Idle => DragOverlay::default(),
            DragState::DraggingList(id) => DragOverlay {
                active_list: board.list(id).cloned(),
                active_task: None,
            },
            DragState::DraggingTask(id) => DragOverlay {
                active_list: None,
                active_task: board.task_view(id),
            },
        }
    }
}
