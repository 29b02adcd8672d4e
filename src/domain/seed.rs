//! Default board contents
//!
//! Used whenever no seed file is configured.

use super::board::Board;
use super::id::{ListId, TaskId};
use super::list::List;
use super::task::Task;

pub const TODO: ListId = ListId::new(1020);
pub const IN_PROGRESS: ListId = ListId::new(4300);
pub const DONE: ListId = ListId::new(6344);

/// The three default columns
pub fn default_lists() -> Vec<List> {
    vec![
        List::new(TODO, "To do"),
        List::new(IN_PROGRESS, "In progress"),
        List::new(DONE, "Done"),
    ]
}

/// The six default cards, two per column
pub fn default_tasks() -> Vec<Task> {
    [
        (1, TODO, "Style issue", "Make frontend done"),
        (2, TODO, "Fix", "Fix graphQL"),
        (3, IN_PROGRESS, "Production down", "Fix ASAP!!!!!!"),
        (4, IN_PROGRESS, "Backend", "Create an API"),
        (5, DONE, "Broken datepicker", "Make sure it works"),
        (6, DONE, "Artem Makushov", "Home task done"),
    ]
    .into_iter()
    .map(|(id, list, title, description)| Task::new(TaskId::new(id), list, title, description))
    .collect()
}

/// A board holding the default lists and tasks
pub fn default_board() -> Board {
    Board::from_parts(default_lists(), default_tasks())
        .unwrap_or_else(|_| unreachable!("default seed data is consistent"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_layout() {
        let board = default_board();

        let lists: Vec<u64> = board.lists().iter().map(|l| l.id.get()).collect();
        assert_eq!(lists, vec![1020, 4300, 6344]);
        assert_eq!(board.tasks().len(), 6);
        assert_eq!(board.tasks_in(TODO).count(), 2);
        assert_eq!(board.tasks_in(IN_PROGRESS).count(), 2);
        assert_eq!(board.tasks_in(DONE).count(), 2);
    }

    #[test]
    fn statuses_match_seed_columns() {
        let board = default_board();
        assert_eq!(board.status_of(TaskId::new(1)), Some("To do"));
        assert_eq!(board.status_of(TaskId::new(4)), Some("In progress"));
        assert_eq!(board.status_of(TaskId::new(6)), Some("Done"));
    }
}
