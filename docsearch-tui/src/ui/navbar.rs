use crate::app::{App, NAV_ITEMS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::search::render_search_box;

const SEARCH_WIDTH: u16 = 36;

/// Draw title, nav items and search box. Returns the search box area.
pub fn render_navbar(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let title_width = app.title.chars().count() as u16 + 4;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(title_width),
            Constraint::Min(0),
            Constraint::Length(SEARCH_WIDTH),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        app.title.clone(),
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::BOTTOM | Borders::TOP).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(title, columns[0]);

    let items = Paragraph::new(nav_line(app)).block(
        Block::default()
            .borders(Borders::BOTTOM | Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(items, columns[1]);

    render_search_box(frame, columns[2], app);
    columns[2]
}

fn nav_line(app: &App) -> Line<'static> {
    let mut spans = Vec::with_capacity(NAV_ITEMS.len() * 2);
    for (i, item) in NAV_ITEMS.iter().enumerate() {
        let active = item.href == app.route;
        let focused = !app.search_focused && i == app.nav_index;

        let mut style = Style::default().fg(if active { Color::Blue } else { Color::Gray });
        if active {
            style = style.add_modifier(Modifier::BOLD);
        }
        if focused {
            style = style.add_modifier(Modifier::REVERSED);
        }

        spans.push(Span::styled(format!(" {} ", item.label), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
