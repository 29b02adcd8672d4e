//! TUI views

pub mod kanban;
