//! The board: single source of truth for lists and tasks
//!
//! Both collections are ordered sequences and the order is the render
//! order. Lists render left to right; tasks are one global sequence,
//! interleaved across lists, and a column shows its tasks by filtering that
//! sequence on `list_id` while keeping the stored order.
//!
//! Operations on ids that are not on the board do nothing and report
//! `false`. Only creation can fail.

use std::collections::HashSet;

use thiserror::Error;

use super::id::{IdGenerator, ListId, TaskId};
use super::list::{validate_list_title, List, ListTitleError};
use super::snapshot::{BoardSnapshot, TaskView};
use super::task::Task;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error(transparent)]
    InvalidListTitle(#[from] ListTitleError),

    #[error("List not found: {0}")]
    ListNotFound(ListId),

    #[error("Duplicate ID on board: {0}")]
    DuplicateId(u64),

    #[error("Task {task} references unknown list {list}")]
    DanglingTask { task: TaskId, list: ListId },

    #[error("No ids left to assign")]
    IdsExhausted,
}

/// Where a dragged task is being dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskDropTarget {
    /// Over another task: join its list and take its place
    Task(TaskId),
    /// Over a column itself: join the list, keep the sequence position
    List(ListId),
}

/// Moves the element at `from` to `to`, shifting everything in between
fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// In-memory kanban board
#[derive(Debug, Clone, Default)]
pub struct Board {
    lists: Vec<List>,
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from existing lists and tasks, keeping their order
    ///
    /// Ids must be unique across lists and tasks, and every task must
    /// belong to one of the given lists. New ids start after the largest id
    /// present.
    pub fn from_parts(lists: Vec<List>, tasks: Vec<Task>) -> Result<Self, BoardError> {
        let mut ids = IdGenerator::new();
        let mut seen = HashSet::new();

        for raw in lists
            .iter()
            .map(|l| l.id.get())
            .chain(tasks.iter().map(|t| t.id.get()))
        {
            if !seen.insert(raw) {
                return Err(BoardError::DuplicateId(raw));
            }
            ids.reserve(raw);
        }

        for task in &tasks {
            if !lists.iter().any(|l| l.id == task.list_id) {
                return Err(BoardError::DanglingTask {
                    task: task.id,
                    list: task.list_id,
                });
            }
        }

        Ok(Self { lists, tasks, ids })
    }

    // =========================================================================
    // Lists
    // =========================================================================

    /// Appends a new list with a fresh id
    ///
    /// The title must pass [`validate_list_title`]; on rejection the board
    /// is unchanged.
    pub fn create_list(&mut self, title: &str) -> Result<List, BoardError> {
        validate_list_title(title)?;

        let id = self.ids.next_list_id().ok_or(BoardError::IdsExhausted)?;
        let list = List::new(id, title);
        self.lists.push(list.clone());
        Ok(list)
    }

    /// Removes a list together with every task in it
    pub fn delete_list(&mut self, id: ListId) -> bool {
        let Some(index) = self.list_index(id) else {
            return false;
        };

        self.lists.remove(index);
        self.tasks.retain(|t| !t.belongs_to(id));
        true
    }

    /// Renames a list without validating the new title
    ///
    /// An in-place edit can pass through an empty title while the user is
    /// typing. Tasks in the list report the new title immediately.
    pub fn update_list_title(&mut self, id: ListId, title: impl Into<String>) -> bool {
        match self.lists.iter_mut().find(|l| l.id == id) {
            Some(list) => {
                list.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Moves the `active` list to the position of the `over` list
    pub fn reorder_lists(&mut self, active: ListId, over: ListId) -> bool {
        if active == over {
            return false;
        }
        match (self.list_index(active), self.list_index(over)) {
            (Some(from), Some(to)) => {
                array_move(&mut self.lists, from, to);
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Tasks
    // =========================================================================

    /// Appends a new task to the end of the task sequence
    ///
    /// Title and description are not validated. The owning list must exist.
    pub fn create_task(
        &mut self,
        list_id: ListId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Task, BoardError> {
        if self.list_index(list_id).is_none() {
            return Err(BoardError::ListNotFound(list_id));
        }

        let id = self.ids.next_task_id().ok_or(BoardError::IdsExhausted)?;
        let task = Task::new(id, list_id, title, description);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Replaces a task's title and description; ownership is untouched
    pub fn update_task(
        &mut self,
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.edit(title, description);
                true
            }
            None => false,
        }
    }

    /// Removes a single task
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Reorders a task within its list or reassigns it to another list
    ///
    /// Over a task, the active task joins the target's list and then moves
    /// to the target's index. Over a list, the active task joins that list
    /// and keeps its index; it is a pure reassignment.
    pub fn reorder_task(&mut self, active: TaskId, target: TaskDropTarget) -> bool {
        let Some(from) = self.task_index(active) else {
            return false;
        };

        match target {
            TaskDropTarget::Task(over) => {
                if over == active {
                    return false;
                }
                let Some(to) = self.task_index(over) else {
                    return false;
                };
                self.tasks[from].list_id = self.tasks[to].list_id;
                array_move(&mut self.tasks, from, to);
                true
            }
            TaskDropTarget::List(list_id) => {
                if self.list_index(list_id).is_none() {
                    return false;
                }
                self.tasks[from].list_id = list_id;
                true
            }
        }
    }

    // =========================================================================
    // Read side
    // =========================================================================

    /// Lists in column order
    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    /// All tasks in global sequence order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn list(&self, id: ListId) -> Option<&List> {
        self.lists.iter().find(|l| l.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks of one list, in the order they appear in the sequence
    pub fn tasks_in(&self, list_id: ListId) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.belongs_to(list_id))
    }

    /// The status label of a task: its owning list's title
    pub fn status_of(&self, id: TaskId) -> Option<&str> {
        let task = self.task(id)?;
        self.list(task.list_id).map(|l| l.title.as_str())
    }

    /// Position of a list in column order
    pub fn list_index(&self, id: ListId) -> Option<usize> {
        self.lists.iter().position(|l| l.id == id)
    }

    /// Position of a task in the global sequence
    pub fn task_index(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Render view of a single task with its derived status
    pub fn task_view(&self, id: TaskId) -> Option<TaskView> {
        let task = self.task(id)?;
        Some(TaskView::new(task, self.status_of(id).unwrap_or_default()))
    }

    /// Read-only copy of the whole board for rendering
    pub fn snapshot(&self) -> BoardSnapshot {
        let tasks = self
            .tasks
            .iter()
            .map(|t| {
                let status = self.list(t.list_id).map(|l| l.title.as_str()).unwrap_or_default();
                TaskView::new(t, status)
            })
            .collect();

        BoardSnapshot {
            lists: self.lists.clone(),
            tasks,
        }
    }
}
