//! Render-ready views of the board
//!
//! Snapshots are owned copies; a presentation layer can hold one while the
//! board keeps changing.

use serde::Serialize;

use super::id::{ListId, TaskId};
use super::list::List;
use super::task::Task;

/// A task as the presentation layer sees it, status included
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    pub id: TaskId,
    pub list_id: ListId,
    pub title: String,
    pub description: String,
    /// Title of the owning list
    pub status: String,
}

impl TaskView {
    pub fn new(task: &Task, status: &str) -> Self {
        Self {
            id: task.id,
            list_id: task.list_id,
            title: task.title.clone(),
            description: task.description.clone(),
            status: status.to_string(),
        }
    }
}

/// Lists and tasks in render order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub lists: Vec<List>,
    pub tasks: Vec<TaskView>,
}

/// One column: a list and its tasks in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a> {
    pub list: &'a List,
    pub tasks: Vec<&'a TaskView>,
}

impl BoardSnapshot {
    /// Groups tasks under their lists, preserving both orders
    pub fn columns(&self) -> Vec<Column<'_>> {
        self.lists
            .iter()
            .map(|list| Column {
                list,
                tasks: self.tasks.iter().filter(|t| t.list_id == list.id).collect(),
            })
            .collect()
    }

    pub fn task(&self, id: TaskId) -> Option<&TaskView> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

/// The entity currently being dragged, for overlay rendering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DragOverlay {
    pub active_list: Option<List>,
    pub active_task: Option<TaskView>,
}

impl DragOverlay {
    pub fn is_empty(&self) -> bool {
        self.active_list.is_none() && self.active_task.is_none()
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::seed;

    #[test]
    fn columns_follow_list_order_and_task_sequence() {
        let snapshot = seed::default_board().snapshot();
        let columns = snapshot.columns();

        let titles: Vec<&str> = columns.iter().map(|c| c.list.title.as_str()).collect();
        assert_eq!(titles, vec!["To do", "In progress", "Done"]);

        let done: Vec<&str> = columns[2].tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(done, vec!["Broken datepicker", "Artem Makushov"]);
    }

    #[test]
    fn empty_list_yields_empty_column() {
        let mut board = seed::default_board();
        board.create_list("Backlog").unwrap();

        let snapshot = board.snapshot();
        let columns = snapshot.columns();
        assert_eq!(columns.len(), 4);
        assert!(columns[3].tasks.is_empty());
    }

    #[test]
    fn snapshot_serializes_status_field() {
        let snapshot = seed::default_board().snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["lists"][0]["id"], 1020);
        assert_eq!(json["tasks"][0]["list_id"], 1020);
        assert_eq!(json["tasks"][0]["status"], "To do");
    }
}
