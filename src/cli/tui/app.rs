//! TUI application state and logic

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;

use super::event::{Event, EventHandler};
use super::ui::Terminal;
use super::views;
use crate::domain::{
    validate_list_title, Applied, DragItem, DragState, Intent, ListId, ListTitleError, Session,
    TaskId,
};

/// Board position under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Column (list) index
    pub column: usize,
    /// Task row within the column
    pub row: usize,
}

/// Which task a title/description prompt is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskTarget {
    New(ListId),
    Edit(TaskId),
}

/// Input mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    NewList(String),
    /// Renaming is applied on every keystroke; `original` is restored on esc
    RenameList {
        id: ListId,
        original: String,
        title: String,
    },
    TaskTitle {
        target: TaskTarget,
        title: String,
        description: String,
    },
    TaskDescription {
        target: TaskTarget,
        title: String,
        description: String,
    },
    Confirm(ConfirmAction),
}

/// Confirmation actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTask(TaskId),
    DeleteList(ListId),
}

/// Application state
pub struct App {
    session: Session,

    cursor: Cursor,

    input_mode: InputMode,

    /// Column a carried list would land on
    list_drop: Option<usize>,

    /// Width task titles are cut to
    title_width: usize,

    status_message: Option<String>,

    should_quit: bool,
}

impl App {
    pub fn new(session: Session, title_width: usize) -> Self {
        Self {
            session,
            cursor: Cursor::default(),
            input_mode: InputMode::Normal,
            list_drop: None,
            title_width,
            status_message: None,
            should_quit: false,
        }
    }

    /// Run the main application loop
    pub fn run(&mut self, terminal: &mut Terminal, events: EventHandler) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            match events.next()? {
                Event::Key(key) => self.handle_key(key),
                // The next draw picks up the new size
                Event::Resize | Event::Tick => {}
            }
        }

        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        views::kanban::draw(frame, self);
    }

    /// Handle key events
    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.session.drag().state() {
            DragState::DraggingTask(id) => return self.handle_carry_task_key(id, key),
            DragState::DraggingList(id) => return self.handle_carry_list_key(id, key),
            DragState::Idle => {}
        }

        match &self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::NewList(_) => self.handle_new_list_key(key),
            InputMode::RenameList { .. } => self.handle_rename_key(key),
            InputMode::TaskTitle { .. } | InputMode::TaskDescription { .. } => {
                self.handle_task_form_key(key)
            }
            InputMode::Confirm(_) => self.handle_confirm_key(key),
        }
    }

    /// Handle keys in normal mode
    fn handle_normal_key(&mut self, key: KeyEvent) {
        self.status_message = None;

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }

            // Navigation
            KeyCode::Char('h') | KeyCode::Left => {
                self.cursor.column = self.cursor.column.saturating_sub(1);
                self.clamp_cursor();
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.cursor.column += 1;
                self.clamp_cursor();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.cursor.row = self.cursor.row.saturating_sub(1);
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.cursor.row += 1;
                self.clamp_cursor();
            }

            // Pick up
            KeyCode::Char(' ') => {
                if let Some(id) = self.selected_task_id() {
                    self.dispatch(Intent::DragStart {
                        item: DragItem::Task(id),
                    });
                }
            }
            KeyCode::Char('L') => {
                if let Some(id) = self.selected_list_id() {
                    if let Some(Applied::DragStarted(_)) = self.dispatch(Intent::DragStart {
                        item: DragItem::List(id),
                    }) {
                        self.list_drop = Some(self.cursor.column);
                    }
                }
            }

            // Edits
            KeyCode::Char('n') => {
                if let Some(list_id) = self.selected_list_id() {
                    self.input_mode = InputMode::TaskTitle {
                        target: TaskTarget::New(list_id),
                        title: String::new(),
                        description: String::new(),
                    };
                } else {
                    self.status_message = Some("Create a list first (N)".to_string());
                }
            }
            KeyCode::Char('N') => {
                self.input_mode = InputMode::NewList(String::new());
            }
            KeyCode::Char('e') => {
                if let Some(task) = self
                    .selected_task_id()
                    .and_then(|id| self.session.board().task(id))
                {
                    self.input_mode = InputMode::TaskTitle {
                        target: TaskTarget::Edit(task.id),
                        title: task.title.clone(),
                        description: task.description.clone(),
                    };
                }
            }
            KeyCode::Char('r') => {
                if let Some(list) = self
                    .selected_list_id()
                    .and_then(|id| self.session.board().list(id))
                {
                    self.input_mode = InputMode::RenameList {
                        id: list.id,
                        original: list.title.clone(),
                        title: list.title.clone(),
                    };
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_task_id() {
                    self.input_mode = InputMode::Confirm(ConfirmAction::DeleteTask(id));
                }
            }
            KeyCode::Char('D') => {
                if let Some(id) = self.selected_list_id() {
                    self.input_mode = InputMode::Confirm(ConfirmAction::DeleteList(id));
                }
            }

            KeyCode::Char('?') => {
                self.status_message = Some(
                    "arrows:move space:pick up L:pick up list n:new task N:new list e:edit r:rename d/D:delete q:quit"
                        .to_string(),
                );
            }

            _ => {}
        }
    }

    /// Handle keys while a task is carried
    ///
    /// Each move is a drag-over against the neighbouring task or column, so
    /// the board changes live and the cursor follows the task.
    fn handle_carry_task_key(&mut self, id: TaskId, key: KeyEvent) {
        let active = DragItem::Task(id);

        match key.code {
            KeyCode::Char('k') | KeyCode::Up => {
                let over = self.neighbour_task(id, -1).map(DragItem::Task);
                self.dispatch(Intent::DragOver { active, over });
            }
            KeyCode::Char('j') | KeyCode::Down => {
                let over = self.neighbour_task(id, 1).map(DragItem::Task);
                self.dispatch(Intent::DragOver { active, over });
            }
            KeyCode::Char('h') | KeyCode::Left => {
                let over = self.neighbour_list(id, -1).map(DragItem::List);
                self.dispatch(Intent::DragOver { active, over });
            }
            KeyCode::Char('l') | KeyCode::Right => {
                let over = self.neighbour_list(id, 1).map(DragItem::List);
                self.dispatch(Intent::DragOver { active, over });
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let over = self
                    .session
                    .board()
                    .task(id)
                    .map(|t| DragItem::List(t.list_id));
                self.dispatch(Intent::DragEnd { active, over });
            }
            KeyCode::Esc => {
                self.dispatch(Intent::DragCancel);
            }
            _ => {}
        }

        self.focus_task(id);
    }

    /// Handle keys while a whole column is carried
    ///
    /// Nothing moves until the drop; arrows only pick the target column.
    fn handle_carry_list_key(&mut self, id: ListId, key: KeyEvent) {
        let last = self.session.board().lists().len().saturating_sub(1);
        let target = self.list_drop.unwrap_or(self.cursor.column).min(last);

        match key.code {
            KeyCode::Char('h') | KeyCode::Left => {
                self.list_drop = Some(target.saturating_sub(1));
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.list_drop = Some((target + 1).min(last));
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let over = self
                    .session
                    .board()
                    .lists()
                    .get(target)
                    .map(|l| DragItem::List(l.id));
                self.dispatch(Intent::DragEnd {
                    active: DragItem::List(id),
                    over,
                });
                self.list_drop = None;
                if let Some(column) = self.session.board().list_index(id) {
                    self.cursor.column = column;
                }
                self.clamp_cursor();
            }
            KeyCode::Esc => {
                self.dispatch(Intent::DragCancel);
                self.list_drop = None;
            }
            _ => {}
        }
    }

    /// Handle keys in new list mode
    fn handle_new_list_key(&mut self, key: KeyEvent) {
        let InputMode::NewList(ref title) = self.input_mode else {
            return;
        };
        let mut title = title.clone();

        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                if let Some(Applied::ListCreated(list)) =
                    self.dispatch(Intent::CreateList { title })
                {
                    self.input_mode = InputMode::Normal;
                    if let Some(column) = self.session.board().list_index(list.id) {
                        self.cursor = Cursor { column, row: 0 };
                    }
                }
            }
            KeyCode::Backspace => {
                title.pop();
                self.input_mode = InputMode::NewList(title);
            }
            KeyCode::Char(c) => {
                title.push(c);
                self.input_mode = InputMode::NewList(title);
            }
            _ => {}
        }
    }

    /// Handle keys in rename mode
    fn handle_rename_key(&mut self, key: KeyEvent) {
        let InputMode::RenameList {
            id,
            ref original,
            ref title,
        } = self.input_mode
        else {
            return;
        };
        let original = original.clone();
        let mut title = title.clone();

        match key.code {
            KeyCode::Esc => {
                self.dispatch(Intent::UpdateListTitle { id, title: original });
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace | KeyCode::Char(_) => {
                match key.code {
                    KeyCode::Char(c) => title.push(c),
                    _ => {
                        title.pop();
                    }
                }
                self.dispatch(Intent::UpdateListTitle {
                    id,
                    title: title.clone(),
                });
                self.input_mode = InputMode::RenameList {
                    id,
                    original,
                    title,
                };
            }
            _ => {}
        }
    }

    /// Handle keys in the two-step task form
    fn handle_task_form_key(&mut self, key: KeyEvent) {
        let (on_description, target, mut title, mut description) = match &self.input_mode {
            InputMode::TaskTitle {
                target,
                title,
                description,
            } => (false, *target, title.clone(), description.clone()),
            InputMode::TaskDescription {
                target,
                title,
                description,
            } => (true, *target, title.clone(), description.clone()),
            _ => return,
        };

        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                return;
            }
            KeyCode::Enter if !on_description => {
                self.input_mode = InputMode::TaskDescription {
                    target,
                    title,
                    description,
                };
                return;
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                self.submit_task(target, title, description);
                return;
            }
            KeyCode::Backspace => {
                if on_description {
                    description.pop();
                } else {
                    title.pop();
                }
            }
            KeyCode::Char(c) => {
                if on_description {
                    description.push(c);
                } else {
                    title.push(c);
                }
            }
            _ => return,
        }

        self.input_mode = if on_description {
            InputMode::TaskDescription {
                target,
                title,
                description,
            }
        } else {
            InputMode::TaskTitle {
                target,
                title,
                description,
            }
        };
    }

    fn submit_task(&mut self, target: TaskTarget, title: String, description: String) {
        match target {
            TaskTarget::New(list_id) => {
                if let Some(Applied::TaskCreated(task)) = self.dispatch(Intent::CreateTask {
                    list_id,
                    list_title: None,
                    title,
                    description,
                }) {
                    self.focus_task(task.id);
                }
            }
            TaskTarget::Edit(id) => {
                self.dispatch(Intent::UpdateTask {
                    id,
                    title,
                    description,
                });
            }
        }
    }

    /// Handle keys in confirm mode
    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if let InputMode::Confirm(action) = self.input_mode {
                    match action {
                        ConfirmAction::DeleteTask(id) => {
                            self.dispatch(Intent::DeleteTask { id });
                        }
                        ConfirmAction::DeleteList(id) => {
                            self.dispatch(Intent::DeleteList { id });
                        }
                    }
                }
                self.input_mode = InputMode::Normal;
                self.clamp_cursor();
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            _ => {}
        }
    }

    /// Applies an intent, reporting a rejection in the status bar
    fn dispatch(&mut self, intent: Intent) -> Option<Applied> {
        match self.session.apply(intent) {
            Ok(applied) => Some(applied),
            Err(e) => {
                self.status_message = Some(e.to_string());
                None
            }
        }
    }

    /// Task ids of one column, top to bottom
    pub fn column_tasks(&self, column: usize) -> Vec<TaskId> {
        let board = self.session.board();
        board
            .lists()
            .get(column)
            .map(|list| board.tasks_in(list.id).map(|t| t.id).collect())
            .unwrap_or_default()
    }

    /// The task `step` rows away from `id` in its own column
    fn neighbour_task(&self, id: TaskId, step: isize) -> Option<TaskId> {
        let board = self.session.board();
        let task = board.task(id)?;
        let column: Vec<TaskId> = board.tasks_in(task.list_id).map(|t| t.id).collect();
        let row = column.iter().position(|t| *t == id)?;
        let target = row.checked_add_signed(step)?;
        column.get(target).copied()
    }

    /// The list `step` columns away from the one holding `id`
    fn neighbour_list(&self, id: TaskId, step: isize) -> Option<ListId> {
        let board = self.session.board();
        let task = board.task(id)?;
        let column = board.list_index(task.list_id)?;
        let target = column.checked_add_signed(step)?;
        board.lists().get(target).map(|l| l.id)
    }

    /// Moves the cursor onto a task, wherever it now is
    fn focus_task(&mut self, id: TaskId) {
        let board = self.session.board();
        let Some(task) = board.task(id) else {
            self.clamp_cursor();
            return;
        };
        if let Some(column) = board.list_index(task.list_id) {
            let row = board
                .tasks_in(task.list_id)
                .position(|t| t.id == id)
                .unwrap_or(0);
            self.cursor = Cursor { column, row };
        }
    }

    /// Keeps the cursor on an existing column and row
    fn clamp_cursor(&mut self) {
        let columns = self.session.board().lists().len();
        self.cursor.column = self.cursor.column.min(columns.saturating_sub(1));
        let rows = self.column_tasks(self.cursor.column).len();
        self.cursor.row = self.cursor.row.min(rows.saturating_sub(1));
    }

    fn selected_list_id(&self) -> Option<ListId> {
        self.session
            .board()
            .lists()
            .get(self.cursor.column)
            .map(|l| l.id)
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.column_tasks(self.cursor.column)
            .get(self.cursor.row)
            .copied()
    }

    // Accessors for views

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn input_mode(&self) -> &InputMode {
        &self.input_mode
    }

    pub fn list_drop(&self) -> Option<usize> {
        self.list_drop
    }

    pub fn title_width(&self) -> usize {
        self.title_width
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Inline error for the list title being typed, if it is invalid
    pub fn title_error(&self) -> Option<ListTitleError> {
        match &self.input_mode {
            InputMode::NewList(title) => validate_list_title(title).err(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::{self, DONE, IN_PROGRESS, TODO};

    fn app() -> App {
        App::new(Session::new(seed::default_board()), 25)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn ids_in(app: &App, list: ListId) -> Vec<u64> {
        app.session()
            .board()
            .tasks_in(list)
            .map(|t| t.id.get())
            .collect()
    }

    fn list_ids(app: &App) -> Vec<u64> {
        app.session()
            .board()
            .lists()
            .iter()
            .map(|l| l.id.get())
            .collect()
    }

    #[test]
    fn cursor_moves_between_columns_and_rows() {
        let mut app = app();
        assert_eq!(app.selected_task_id(), Some(TaskId::new(1)));

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_task_id(), Some(TaskId::new(2)));

        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor().row, 1, "row stops at the last task");

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor().column, 2);
        assert_eq!(app.selected_task_id(), Some(TaskId::new(6)));
    }

    #[test]
    fn carrying_a_task_down_reorders_live() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(
            app.session().drag().state(),
            DragState::DraggingTask(TaskId::new(1))
        );

        press(&mut app, KeyCode::Down);
        assert_eq!(ids_in(&app, TODO), vec![2, 1]);
        assert_eq!(app.selected_task_id(), Some(TaskId::new(1)));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().drag().state(), DragState::Idle);
        assert_eq!(ids_in(&app, TODO), vec![2, 1]);
    }

    #[test]
    fn carrying_a_task_sideways_changes_its_status() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Right);

        assert_eq!(ids_in(&app, IN_PROGRESS), vec![1, 3, 4]);
        assert_eq!(
            app.session().board().status_of(TaskId::new(1)),
            Some("In progress")
        );
        assert_eq!(app.cursor(), Cursor { column: 1, row: 0 });

        press(&mut app, KeyCode::Char(' '));
        assert!(!app.session().drag().is_dragging());
    }

    #[test]
    fn cancelling_a_task_drag_keeps_live_moves() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Esc);

        assert!(!app.session().drag().is_dragging());
        assert_eq!(ids_in(&app, IN_PROGRESS), vec![1, 3, 4]);
    }

    #[test]
    fn quit_is_ignored_while_carrying() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn carrying_a_list_commits_only_on_drop() {
        let mut app = app();
        press(&mut app, KeyCode::Char('L'));
        assert_eq!(app.list_drop(), Some(0));

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.list_drop(), Some(2));
        assert_eq!(list_ids(&app), vec![1020, 4300, 6344]);

        press(&mut app, KeyCode::Enter);
        assert_eq!(list_ids(&app), vec![4300, 6344, 1020]);
        assert_eq!(app.cursor().column, 2);
        assert_eq!(app.list_drop(), None);
    }

    #[test]
    fn cancelling_a_list_drag_leaves_order() {
        let mut app = app();
        press(&mut app, KeyCode::Char('L'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Esc);

        assert_eq!(list_ids(&app), vec![1020, 4300, 6344]);
        assert!(!app.session().drag().is_dragging());
    }

    #[test]
    fn new_list_title_is_validated_inline() {
        let mut app = app();
        press(&mut app, KeyCode::Char('N'));
        assert!(matches!(app.title_error(), Some(ListTitleError::Empty)));

        type_str(&mut app, "@@@");
        assert!(matches!(
            app.title_error(),
            Some(ListTitleError::InvalidCharacters(_))
        ));
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.input_mode(), InputMode::NewList(_)));
        assert_eq!(list_ids(&app).len(), 3);

        for _ in 0..3 {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "Backlog");
        assert!(app.title_error().is_none());
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode(), &InputMode::Normal);
        let lists = app.session().board().lists();
        assert_eq!(lists.len(), 4);
        assert_eq!(lists[3].title, "Backlog");
        assert_eq!(app.cursor().column, 3);
    }

    #[test]
    fn new_task_goes_into_selected_column() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "New bug");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "steps");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode(), &InputMode::Normal);
        let id = app.selected_task_id().unwrap();
        let view = app.session().board().task_view(id).unwrap();
        assert_eq!(view.title, "New bug");
        assert_eq!(view.description, "steps");
        assert_eq!(view.list_id, IN_PROGRESS);
        assert_eq!(view.status, "In progress");
    }

    #[test]
    fn empty_task_title_is_allowed() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.input_mode(), InputMode::TaskDescription { .. }));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode(), &InputMode::Normal);
        assert_eq!(app.session().board().tasks().len(), 7);
        assert!(app.status_message().is_none());

        let id = app.selected_task_id().unwrap();
        let task = app.session().board().task(id).unwrap();
        assert_eq!(task.title, "");
        assert_eq!(task.description, "");
        assert_eq!(task.list_id, TODO);
    }

    #[test]
    fn edit_can_clear_a_title() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        for _ in 0.."Style issue".len() {
            press(&mut app, KeyCode::Backspace);
        }
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        let task = app.session().board().task(TaskId::new(1)).unwrap();
        assert_eq!(task.title, "");
        assert_eq!(task.description, "Make frontend done");
    }

    #[test]
    fn edit_prefills_and_updates_task() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        assert!(matches!(
            app.input_mode(),
            InputMode::TaskTitle { title, .. } if title == "Style issue"
        ));

        type_str(&mut app, "s");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        let task = app.session().board().task(TaskId::new(1)).unwrap();
        assert_eq!(task.title, "Style issues");
        assert_eq!(task.description, "Make frontend done");
        assert_eq!(task.list_id, TODO);
    }

    #[test]
    fn rename_applies_live_and_esc_restores() {
        let mut app = app();
        press(&mut app, KeyCode::Char('r'));
        type_str(&mut app, " soon");
        assert_eq!(app.session().board().status_of(TaskId::new(1)), Some("To do soon"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session().board().status_of(TaskId::new(1)), Some("To do"));

        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().board().list(TODO).unwrap().title, "To ");
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(ids_in(&app, TODO), vec![1, 2]);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(ids_in(&app, TODO), vec![2]);
        assert_eq!(app.selected_task_id(), Some(TaskId::new(2)));
    }

    #[test]
    fn deleting_last_column_moves_cursor_back() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('D'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(list_ids(&app), vec![1020, 4300]);
        assert!(app.session().board().tasks_in(DONE).next().is_none());
        assert_eq!(app.cursor().column, 1);
    }

    #[test]
    fn new_task_needs_a_list() {
        let mut app = App::new(Session::default(), 25);
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.input_mode(), &InputMode::Normal);
        assert!(app.status_message().is_some());
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Char('N'));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
