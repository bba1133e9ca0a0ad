use crate::app::{App, AppSession};
use docsearch::{ScoredResult, SessionPhase};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

use super::spinner::{LoadingIndicator, SpinnerColor, SpinnerSize};
use super::utils::dropdown_rect;

const DROPDOWN_WIDTH: u16 = 64;
const PLACEHOLDER: &str = "Search documentation...";

/// What the dropdown shows for a given session state.
#[derive(Debug, PartialEq)]
pub enum DropdownBody {
    Hidden,
    Searching,
    Lines(Vec<Line<'static>>),
}

pub fn dropdown_body(session: &AppSession) -> DropdownBody {
    if !session.is_open() {
        return DropdownBody::Hidden;
    }
    match session.phase() {
        SessionPhase::Searching => DropdownBody::Searching,
        SessionPhase::Results => {
            let selected = session.selected_index();
            let lines = session
                .results()
                .iter()
                .enumerate()
                .flat_map(|(i, result)| result_lines(result, selected == Some(i)))
                .collect();
            DropdownBody::Lines(lines)
        }
        SessionPhase::NoMatch => DropdownBody::Lines(vec![
            Line::styled(
                format!("No results found for \"{}\"", session.query()),
                Style::default().fg(Color::Gray),
            ),
            Line::styled("Try different keywords", Style::default().fg(Color::DarkGray)),
        ]),
        SessionPhase::History => {
            let mut lines = vec![Line::styled(
                "Recent Searches",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )];
            lines.extend(session.history_preview().iter().enumerate().map(|(i, query)| {
                Line::from(vec![
                    Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled("↺ ", Style::default().fg(Color::DarkGray)),
                    Span::raw(query.clone()),
                ])
            }));
            DropdownBody::Lines(lines)
        }
        SessionPhase::Idle | SessionPhase::Typing => DropdownBody::Hidden,
    }
}

/// Title with badges, excerpt and url for one result.
pub fn result_lines(result: &ScoredResult, selected: bool) -> Vec<Line<'static>> {
    let doc = &result.document;
    let marker = if selected { "▶ " } else { "  " };
    let title_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let mut title = vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(doc.title.clone(), title_style),
    ];
    if let Some(category) = &doc.category {
        title.push(Span::raw(" "));
        title.push(Span::styled(
            format!(" {} ", category),
            Style::default().fg(Color::Black).bg(Color::Blue),
        ));
    }
    title.push(Span::raw(" "));
    title.push(Span::styled(
        format!("{}%", result.score),
        Style::default().fg(Color::Green),
    ));

    let mut lines = vec![Line::from(title)];
    if !doc.content.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(doc.content.clone(), Style::default().fg(Color::Gray)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(doc.url.clone(), Style::default().fg(Color::Cyan)),
    ]));
    lines
}

pub fn render_search_box(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.search_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = if app.search_focused {
        let (before, after) = app.search_input.split_at_cursor();
        Line::from(vec![
            Span::raw(before.to_string()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
            Span::raw(after.to_string()),
        ])
    } else if app.search_input.value.is_empty() {
        Line::from(vec![
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
            Span::styled(" /", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::raw(app.search_input.value.clone())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search ");
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw the dropdown under the search box, if the session has anything to show.
pub fn render_dropdown(frame: &mut Frame, anchor: Rect, bounds: Rect, app: &mut App) {
    let body = dropdown_body(&app.session);
    let content_height = match &body {
        DropdownBody::Hidden => return,
        DropdownBody::Searching => 1,
        DropdownBody::Lines(lines) => lines.len() as u16,
    };

    let area = dropdown_rect(anchor, DROPDOWN_WIDTH, content_height + 2, bounds);
    if area.height < 3 {
        return;
    }
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match body {
        DropdownBody::Hidden => {}
        DropdownBody::Searching => {
            LoadingIndicator::new(SpinnerSize::Sm)
                .color(SpinnerColor::Gray)
                .text("Searching...")
                .render(frame, inner, &mut app.throbber_state);
        }
        DropdownBody::Lines(lines) => {
            let scroll = selected_scroll(&app.session, inner.height);
            frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
        }
    }
}

/// Scroll offset keeping the selected result's first line in view.
fn selected_scroll(session: &AppSession, height: u16) -> u16 {
    let Some(selected) = session.selected_index() else {
        return 0;
    };
    let top: usize = session.results()[..selected]
        .iter()
        .map(|r| if r.document.content.is_empty() { 2 } else { 3 })
        .sum();
    let own = if session.results()[selected].document.content.is_empty() { 2 } else { 3 };
    (top + own).saturating_sub(height as usize) as u16
}
