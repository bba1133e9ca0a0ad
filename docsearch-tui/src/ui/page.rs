use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub fn render_page(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::NONE)
        .padding(Padding::new(2, 2, 1, 1));

    let lines = match app.current_page() {
        Some(page) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    page.title.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(page.url.clone(), Style::default().fg(Color::DarkGray))),
                Line::raw(""),
            ];
            lines.extend(page.content.lines().map(|l| Line::raw(l.to_string())));
            lines
        }
        None => vec![
            Line::from(Span::styled(
                "Page not found",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::from(Span::styled(
                format!("Nothing lives at {}", app.route),
                Style::default().fg(Color::Gray),
            )),
        ],
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

pub fn render_footer(frame: &mut Frame, area: Rect, footer: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        footer.to_string(),
        Style::default().fg(Color::DarkGray),
    )))
    .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(paragraph, area);
}
