//! Task domain model
//!
//! Tasks are the cards on the board. Each belongs to exactly one list at a
//! time. A task's status label is not stored here: it is the title of the
//! owning list, looked up when the board is read (see
//! [`Board::status_of`](super::Board::status_of)).

use serde::{Deserialize, Serialize};

use super::id::{ListId, TaskId};

/// A card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Owning list
    #[serde(alias = "listId")]
    pub list_id: ListId,

    /// Human-readable title
    pub title: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,
}

impl Task {
    pub fn new(
        id: TaskId,
        list_id: ListId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            list_id,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Returns true if this task sits in the given list
    pub fn belongs_to(&self, list_id: ListId) -> bool {
        self.list_id == list_id
    }

    /// Replaces title and description
    pub fn edit(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.title = title.into();
        self.description = description.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task() -> Task {
        Task::new(TaskId::new(1), ListId::new(1020), "Style issue", "Make frontend done")
    }

    #[test]
    fn edit_keeps_owner() {
        let mut task = make_task();
        task.edit("Restyle", "");

        assert_eq!(task.title, "Restyle");
        assert_eq!(task.description, "");
        assert!(task.belongs_to(ListId::new(1020)));
    }

    #[test]
    fn deserializes_camel_case_owner_and_ignores_status() {
        let json = r#"{"id":3,"listId":4300,"title":"Backend","description":"Create an API","status":"In progress"}"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.id, TaskId::new(3));
        assert_eq!(task.list_id, ListId::new(4300));
    }

    #[test]
    fn description_defaults_to_empty() {
        let json = r#"{"id":9,"list_id":1,"title":"Bare"}"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert!(task.description.is_empty());
    }
}
