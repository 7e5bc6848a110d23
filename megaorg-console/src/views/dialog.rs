/// Modal dialog rendering
///
/// Dialogs draw over the page content: a `Clear` first so the underlying
/// widgets never bleed through, then a bordered block centered in the
/// terminal. Field rows show the focused field in cyan and schema errors
/// inline in red under the offending field.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use megaorg_shared::labels::badge_label;
use megaorg_shared::models::user::User;

use crate::forms::{TaskField, TaskForm, UserField, UserForm};

pub fn task_form(f: &mut Frame, form: &TaskForm, assignees: &[User]) {
    if form.mode.is_delete() {
        let title = form.mode.target().map(|t| t.title.as_str()).unwrap_or("");
        confirm_delete(
            f,
            title,
            "¿Estás seguro de que deseas eliminar esta tarea? Esta acción no se puede deshacer.",
        );
        return;
    }

    let title = if form.mode.is_create() {
        "Crear nueva tarea"
    } else {
        "Editar tarea"
    };

    let mut lines = Vec::new();
    text_row(
        &mut lines,
        "Título",
        &form.title.value,
        form.focus == TaskField::Title,
        form.error_for("title"),
    );
    text_row(
        &mut lines,
        "Fecha límite (YYYY-MM-DD)",
        &form.due_date.value,
        form.focus == TaskField::DueDate,
        form.error_for("due_date"),
    );
    select_row(
        &mut lines,
        "Estado",
        badge_label(form.status.as_str()),
        form.focus == TaskField::Status,
        None,
    );
    select_row(
        &mut lines,
        "Prioridad",
        badge_label(form.priority.as_str()),
        form.focus == TaskField::Priority,
        None,
    );
    select_row(
        &mut lines,
        "Asignado a",
        form.assignee_name(assignees).unwrap_or("—"),
        form.focus == TaskField::Assignee,
        form.error_for("assigned_to_id"),
    );
    text_row(
        &mut lines,
        "Descripción",
        &form.description.value,
        form.focus == TaskField::Description,
        None,
    );
    text_row(
        &mut lines,
        "Notas",
        &form.notes.value,
        form.focus == TaskField::Notes,
        None,
    );
    lines.push(Line::from(""));
    lines.push(footer(form.is_submitting()));

    popup(f, title, lines, 60, 20);
}

pub fn user_form(f: &mut Frame, form: &UserForm) {
    if form.mode.is_delete() {
        let name = form.mode.target().map(|u| u.fullname.as_str()).unwrap_or("");
        confirm_delete(
            f,
            name,
            "¿Estás seguro de que deseas eliminar este usuario? Esta acción no se puede deshacer.",
        );
        return;
    }

    let title = if form.mode.is_create() {
        "Crear nuevo usuario"
    } else {
        "Editar usuario"
    };

    let mut lines = Vec::new();
    text_row(
        &mut lines,
        "Nombre completo",
        &form.fullname.value,
        form.focus == UserField::Fullname,
        form.error_for("fullname"),
    );
    text_row(
        &mut lines,
        "Usuario",
        &form.username.value,
        form.focus == UserField::Username,
        form.error_for("user"),
    );
    text_row(
        &mut lines,
        "Contraseña",
        &"*".repeat(form.password.value.chars().count()),
        form.focus == UserField::Password,
        form.error_for("password"),
    );
    select_row(
        &mut lines,
        "Rol",
        form.role.as_deref().map(badge_label).unwrap_or("—"),
        form.focus == UserField::Role,
        form.error_for("role"),
    );
    text_row(
        &mut lines,
        "Avatar (ruta de imagen)",
        &form.avatar.value,
        form.focus == UserField::Avatar,
        None,
    );
    lines.push(Line::from(""));
    lines.push(footer(form.is_submitting()));

    popup(f, title, lines, 60, 16);
}

fn confirm_delete(f: &mut Frame, target: &str, question: &str) {
    let lines = vec![
        Line::from(Span::styled(
            target.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(question.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Enter confirmar · Esc cancelar",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    popup(f, "Confirmar eliminación", lines, 50, 9);
}

fn text_row(
    lines: &mut Vec<Line<'static>>,
    label: &str,
    value: &str,
    focused: bool,
    error: Option<&str>,
) {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    lines.push(Line::from(Span::styled(
        format!("{label}: {value}{}", if focused { "▏" } else { "" }),
        style,
    )));
    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            format!("  {message}"),
            Style::default().fg(Color::Red),
        )));
    }
}

fn select_row(
    lines: &mut Vec<Line<'static>>,
    label: &str,
    value: &str,
    focused: bool,
    error: Option<&str>,
) {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    lines.push(Line::from(Span::styled(
        format!("{label}: ◂ {value} ▸"),
        style,
    )));
    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            format!("  {message}"),
            Style::default().fg(Color::Red),
        )));
    }
}

fn footer(submitting: bool) -> Line<'static> {
    if submitting {
        Line::from(Span::styled(
            "Enviando...",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            "Enter guardar · Esc cancelar · Tab siguiente campo",
            Style::default().fg(Color::DarkGray),
        ))
    }
}

fn popup(f: &mut Frame, title: &str, lines: Vec<Line<'static>>, width: u16, height: u16) {
    let area = centered(f.area(), width, height);
    f.render_widget(Clear, area);
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    f.render_widget(body, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);
    horizontal[1]
}
