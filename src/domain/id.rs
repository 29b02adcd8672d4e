//! Numeric identifiers for lists and tasks
//!
//! Lists and tasks draw from a single [`IdGenerator`], so an id is unique
//! across both kinds. Ids are plain integers on the wire (`1020`, `4300`)
//! and never reused once handed out, even after the entity is deleted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid list ID: expected a non-negative integer, got '{0}'")]
    InvalidListId(String),

    #[error("Invalid task ID: expected a non-negative integer, got '{0}'")]
    InvalidTaskId(String),
}

/// Identifier of a list (column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(u64);

impl ListId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw integer value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ListId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| IdError::InvalidListId(s.to_string()))
    }
}

/// Identifier of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw integer value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TaskId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| IdError::InvalidTaskId(s.to_string()))
    }
}

/// Hands out fresh ids, strictly increasing
///
/// The generator is seeded past every id already on the board so seed data
/// and loaded boards can never collide with a newly created entity. Once
/// `u64::MAX` has been used the generator is exhausted.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: Option<u64>,
}

impl IdGenerator {
    /// Creates a generator whose first id is `1`
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Makes sure `used` will never be returned
    pub fn reserve(&mut self, used: u64) {
        if let Some(next) = self.next {
            if used >= next {
                self.next = used.checked_add(1);
            }
        }
    }

    fn bump(&mut self) -> Option<u64> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }

    /// A fresh list id, or `None` when every id has been handed out
    pub fn next_list_id(&mut self) -> Option<ListId> {
        self.bump().map(ListId)
    }

    /// A fresh task id, or `None` when every id has been handed out
    pub fn next_task_id(&mut self) -> Option<TaskId> {
        self.bump().map(TaskId)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
