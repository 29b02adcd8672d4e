//! Kanban view: one column per list, tasks in board order

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::cli::tui::app::{App, ConfirmAction, InputMode, TaskTarget};
use crate::cli::tui::utils::{centered_rect, truncate_str};
use crate::domain::{Column, DragState};

/// Draw the board
pub fn draw(frame: &mut Frame, app: &App) {
    let [board_area, detail_area, status_area] = Layout::vertical([
        Constraint::Min(6),
        Constraint::Length(4),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    draw_columns(frame, app, board_area);
    draw_detail(frame, app, detail_area);
    draw_status_bar(frame, app, status_area);
    draw_prompt(frame, app);
}

fn draw_columns(frame: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.session().snapshot();
    let columns = snapshot.columns();

    if columns.is_empty() {
        let empty = Paragraph::new("Board is empty. Press N to add a list.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Board"));
        frame.render_widget(empty, area);
        return;
    }

    let count = columns.len() as u32;
    let areas = Layout::horizontal(columns.iter().map(|_| Constraint::Ratio(1, count))).split(area);

    for (index, (column, column_area)) in columns.iter().zip(areas.iter()).enumerate() {
        draw_column(frame, app, index, column, *column_area);
    }
}

fn draw_column(frame: &mut Frame, app: &App, index: usize, column: &Column<'_>, area: Rect) {
    let cursor = app.cursor();
    let state = app.session().drag().state();
    let carried_task = match state {
        DragState::DraggingTask(id) => Some(id),
        _ => None,
    };

    let border_style = match state {
        DragState::DraggingList(id) if id == column.list.id => {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        }
        DragState::DraggingList(_) if app.list_drop() == Some(index) => {
            Style::default().fg(Color::Yellow)
        }
        _ if cursor.column == index => Style::default().fg(Color::Cyan),
        _ => Style::default().fg(Color::DarkGray),
    };

    let items: Vec<ListItem> = if column.tasks.is_empty() {
        vec![ListItem::new("(no tasks)").style(Style::default().fg(Color::DarkGray))]
    } else {
        column
            .tasks
            .iter()
            .enumerate()
            .map(|(row, task)| {
                let title = truncate_str(&task.title, app.title_width());
                if carried_task == Some(task.id) {
                    ListItem::new(format!("» {}", title)).style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if cursor.column == index && cursor.row == row {
                    ListItem::new(format!("  {}", title))
                        .style(Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    ListItem::new(format!("  {}", title))
                }
            })
            .collect()
    };

    let title = format!("{} ({})", column.list.title, column.tasks.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(list, area);
}

/// Selected task details, or what is being carried
fn draw_detail(frame: &mut Frame, app: &App, area: Rect) {
    let overlay = app.session().overlay();

    let (title, lines) = if let Some(list) = &overlay.active_list {
        (
            "Carrying list".to_string(),
            vec![
                Line::from(list.title.clone()).bold(),
                Line::from("←/→ choose where it lands, space drops, esc cancels"),
            ],
        )
    } else if let Some(task) = &overlay.active_task {
        (
            "Carrying task".to_string(),
            vec![
                Line::from(format!("{} [{}]", task.title, task.status)).bold(),
                Line::from("arrows move it, space drops, esc cancels"),
            ],
        )
    } else if let Some(task) = app
        .selected_task_id()
        .and_then(|id| app.session().board().task_view(id))
    {
        (
            format!("Task {}", task.id),
            vec![
                Line::from(vec![
                    Span::raw(task.title.clone()).bold(),
                    Span::raw(format!(" [{}]", task.status)).fg(Color::Cyan),
                ]),
                Line::from(task.description.clone()),
            ],
        )
    } else {
        ("Task".to_string(), vec![Line::from("No task selected").dark_gray()])
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title).borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (content, style) = match app.input_mode() {
        InputMode::Confirm(action) => (
            format!("{} (y/n)", confirm_question(app, *action)),
            Style::default().fg(Color::Yellow),
        ),
        InputMode::Normal => match app.status_message() {
            Some(msg) => (msg.to_string(), Style::default().fg(Color::Red)),
            None => (
                "[space]pick up [L]ist pick up [n/N]ew [e]dit [r]ename [d/D]elete [?]help [q]uit"
                    .to_string(),
                Style::default(),
            ),
        },
        _ => (
            "Enter to confirm, Esc to cancel".to_string(),
            Style::default().fg(Color::Yellow),
        ),
    };

    let paragraph = Paragraph::new(format!("Kanban {}", content))
        .style(style)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn confirm_question(app: &App, action: ConfirmAction) -> String {
    let board = app.session().board();
    match action {
        ConfirmAction::DeleteTask(id) => match board.task(id) {
            Some(task) => format!("Delete task \"{}\"?", task.title),
            None => "Delete task?".to_string(),
        },
        ConfirmAction::DeleteList(id) => {
            let count = board.tasks_in(id).count();
            match board.list(id) {
                Some(list) => format!(
                    "Delete list \"{}\" and its {} task(s)?",
                    list.title, count
                ),
                None => "Delete list?".to_string(),
            }
        }
    }
}

/// Text prompt drawn over the board for input modes
fn draw_prompt(frame: &mut Frame, app: &App) {
    let (title, lines) = match app.input_mode() {
        InputMode::NewList(text) => {
            let mut lines = vec![input_line(text)];
            if let Some(err) = app.title_error() {
                lines.push(Line::from(err.to_string()).fg(Color::Red));
            }
            ("New list".to_string(), lines)
        }
        InputMode::RenameList { title, .. } => ("Rename list".to_string(), vec![input_line(title)]),
        InputMode::TaskTitle {
            target,
            title,
            description,
        } => (
            task_prompt_title(*target),
            vec![
                input_line(title),
                Line::from(format!("  {}", description)).dark_gray(),
            ],
        ),
        InputMode::TaskDescription {
            target,
            title,
            description,
        } => (
            task_prompt_title(*target),
            vec![
                Line::from(format!("  {}", title)).dark_gray(),
                input_line(description),
            ],
        ),
        InputMode::Normal | InputMode::Confirm(_) => return,
    };

    let area = centered_rect(frame.area(), 60, lines.len() as u16 + 2);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn task_prompt_title(target: TaskTarget) -> String {
    match target {
        TaskTarget::New(_) => "New task".to_string(),
        TaskTarget::Edit(id) => format!("Edit task {}", id),
    }
}

fn input_line(text: &str) -> Line<'static> {
    Line::from(vec![Span::raw("> "), Span::raw(text.to_string()), Span::raw("_").slow_blink()])
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::domain::{seed, Session};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_one_column_per_list() {
        let app = App::new(Session::new(seed::default_board()), 25);
        let screen = render(&app);

        assert!(screen.contains("To do (2)"));
        assert!(screen.contains("In progress (2)"));
        assert!(screen.contains("Done (2)"));
        assert!(screen.contains("Production down"));
    }

    #[test]
    fn shows_selected_task_status_and_description() {
        let app = App::new(Session::new(seed::default_board()), 25);
        let screen = render(&app);

        assert!(screen.contains("[To do]"));
        assert!(screen.contains("Make frontend done"));
    }

    #[test]
    fn empty_board_has_a_hint() {
        let app = App::new(Session::default(), 25);
        let screen = render(&app);

        assert!(screen.contains("Board is empty"));
    }

    #[test]
    fn long_titles_are_cut() {
        let app = App::new(Session::new(seed::default_board()), 6);
        let screen = render(&app);

        assert!(screen.contains("Produ…"));
        assert!(!screen.contains("Production down"));
    }
}
