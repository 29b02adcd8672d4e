//! Kanban board - lists of tasks, reordered by drag and drop
//!
//! All state lives in memory. The [`domain`] module holds the board, the
//! drag controller and the intents that drive them; [`storage`] loads seed
//! data and configuration; [`cli`] provides the command-line and terminal
//! front ends.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Board, DragController, DragItem, Intent, List, ListId, Session, Task, TaskId};
