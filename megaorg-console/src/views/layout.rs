/// Shell: sidebar, status line and the static pages

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Route};
use crate::notify::{Notice, NoticeKind};
use crate::pages::{dashboard, projects};

/// Draws the sidebar and status line, returning the content area
pub fn shell(f: &mut Frame, app: &App) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(1)])
        .split(rows[0]);

    sidebar(f, columns[0], app.route);
    status_line(f, rows[1], app.notices.latest());

    columns[1]
}

fn sidebar(f: &mut Frame, area: Rect, active: Route) {
    let items: Vec<ListItem> = Route::all()
        .iter()
        .map(|route| {
            let style = if *route == active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(route.label(), style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("Mega Org")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn status_line(f: &mut Frame, area: Rect, notice: Option<&Notice>) {
    let line = match notice {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Success => Color::Green,
                NoticeKind::Error => Color::Red,
            };
            Line::from(Span::styled(notice.text.clone(), Style::default().fg(color)))
        }
        None => Line::from(Span::styled(
            " q salir · 1-4 sección · n nueva · e editar · d eliminar · Enter detalles",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

pub fn dashboard(f: &mut Frame, area: Rect) {
    let cards = dashboard::stat_cards();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    for (card, slot) in cards.iter().zip(columns.iter()) {
        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                card.value,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .block(Block::default().title(card.title).borders(Borders::ALL));
        f.render_widget(body, *slot);
    }
}

pub fn projects(f: &mut Frame, area: Rect) {
    let body = Paragraph::new(projects::PLACEHOLDER)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(projects::TITLE).borders(Borders::ALL));
    f.render_widget(body, area);
}
