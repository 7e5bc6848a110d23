/// Tareas page rendering: table, details panel and dialog

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use megaorg_shared::labels::badge_label;
use megaorg_shared::models::task::Task;

use crate::pages::{LoadState, TasksPage};
use crate::views::dialog;

pub fn draw(f: &mut Frame, area: Rect, page: &TasksPage) {
    let list_area = match &page.details {
        Some(task) => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);
            details(f, columns[1], task);
            columns[0]
        }
        None => area,
    };

    match &page.tasks {
        LoadState::Loading => {
            let body = Paragraph::new("Cargando tareas...")
                .block(Block::default().title("Tareas").borders(Borders::ALL));
            f.render_widget(body, list_area);
        }
        LoadState::Error(message) => {
            let body = Paragraph::new(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            ))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Tareas").borders(Borders::ALL));
            f.render_widget(body, list_area);
        }
        LoadState::Loaded(tasks) if tasks.is_empty() => {
            let body = Paragraph::new(
                "No hay tareas disponibles. Agrega tu primera tarea para comenzar.",
            )
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Tareas").borders(Borders::ALL));
            f.render_widget(body, list_area);
        }
        LoadState::Loaded(tasks) => {
            table(f, list_area, tasks, page.selected);
        }
    }

    if let Some(form) = &page.dialog {
        dialog::task_form(f, form, &page.assignees);
    }
}

fn table(f: &mut Frame, area: Rect, tasks: &[Task], selected: usize) {
    let header = Row::new(["Título", "Estado", "Prioridad", "Fecha límite", "Asignado a"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = tasks
        .iter()
        .map(|task| {
            Row::new(vec![
                task.title.clone(),
                badge_label(task.status.as_str()).to_string(),
                badge_label(task.priority.as_str()).to_string(),
                task.due_date.clone(),
                task.assigned_to.fullname.clone(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(34),
            Constraint::Percentage(16),
            Constraint::Percentage(16),
            Constraint::Percentage(16),
            Constraint::Percentage(18),
        ],
    )
    .header(header)
    .block(Block::default().title("Tareas").borders(Borders::ALL))
    .row_highlight_style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = TableState::default().with_selected(Some(selected));
    f.render_stateful_widget(table, area, &mut state);
}

fn details(f: &mut Frame, area: Rect, task: &Task) {
    let description = task
        .description
        .as_deref()
        .unwrap_or("No hay descripción disponible");

    let mut lines = vec![
        Line::from(Span::styled(
            task.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        label_line("Estado", badge_label(task.status.as_str())),
        label_line("Prioridad", badge_label(task.priority.as_str())),
        label_line("Fecha límite", &task.due_date),
        label_line("Asignado a", &task.assigned_to.fullname),
        Line::from(""),
        Line::from(Span::styled(
            "Descripción",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(description.to_string()),
    ];

    if let Some(notes) = task.notes.as_deref() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Notas",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(notes.to_string()));
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Detalles").borders(Borders::ALL));
    f.render_widget(body, area);
}

fn label_line<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::raw(value.to_string()),
    ])
}
