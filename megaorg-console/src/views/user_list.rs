/// Usuarios page rendering: table, lazily-fetched details panel and dialog

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use megaorg_shared::labels::badge_label;
use megaorg_shared::models::user::User;

use crate::pages::users::UserDetails;
use crate::pages::{LoadState, UsersPage};
use crate::views::dialog;

pub fn draw(f: &mut Frame, area: Rect, page: &UsersPage) {
    let list_area = match &page.details {
        Some(details) => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);
            details_panel(f, columns[1], details);
            columns[0]
        }
        None => area,
    };

    match &page.users {
        LoadState::Loading => {
            let body = Paragraph::new("Cargando usuarios...")
                .block(Block::default().title("Usuarios").borders(Borders::ALL));
            f.render_widget(body, list_area);
        }
        LoadState::Error(message) => {
            let body = Paragraph::new(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            ))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Usuarios").borders(Borders::ALL));
            f.render_widget(body, list_area);
        }
        LoadState::Loaded(users) if users.is_empty() => {
            let body = Paragraph::new("No hay usuarios registrados.")
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Usuarios").borders(Borders::ALL));
            f.render_widget(body, list_area);
        }
        LoadState::Loaded(users) => {
            table(f, list_area, users, page.selected);
        }
    }

    if let Some(form) = &page.dialog {
        dialog::user_form(f, form);
    }
}

fn table(f: &mut Frame, area: Rect, users: &[User], selected: usize) {
    let header = Row::new(["Usuario", "Nombre completo", "Rol"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = users
        .iter()
        .map(|user| {
            Row::new(vec![
                user.user.clone(),
                user.fullname.clone(),
                badge_label(&user.role).to_string(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(Block::default().title("Usuarios").borders(Borders::ALL))
    .row_highlight_style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = TableState::default().with_selected(Some(selected));
    f.render_stateful_widget(table, area, &mut state);
}

fn details_panel(f: &mut Frame, area: Rect, details: &UserDetails) {
    let block = Block::default().title("Detalles").borders(Borders::ALL);

    match &details.state {
        LoadState::Loading => {
            f.render_widget(Paragraph::new("Cargando usuario...").block(block), area);
        }
        LoadState::Error(message) => {
            let body = Paragraph::new(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            ))
            .wrap(Wrap { trim: true })
            .block(block);
            f.render_widget(body, area);
        }
        LoadState::Loaded(user) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    user.fullname.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("@{}", user.user)),
                Line::from(Span::raw(badge_label(&user.role).to_string())),
            ];

            if let Some(avatar) = user.avatar_url.as_deref() {
                lines.push(Line::from(vec![
                    Span::styled("Avatar: ", Style::default().fg(Color::DarkGray)),
                    Span::raw(avatar.to_string()),
                ]));
            }

            lines.extend([
                Line::from(""),
                Line::from(Span::styled(
                    "Tareas asignadas",
                    Style::default().fg(Color::DarkGray),
                )),
            ]);

            match user.tasks.as_deref() {
                Some(tasks) if !tasks.is_empty() => {
                    for task in tasks {
                        lines.push(Line::from(format!(
                            "· {} ({})",
                            task.title,
                            badge_label(task.priority.as_str())
                        )));
                    }
                }
                _ => {
                    lines.push(Line::from("No tiene tareas asignadas."));
                }
            }

            let body = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
            f.render_widget(body, area);
        }
    }
}
