use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Gauge, Paragraph},
    Frame,
};
use std::time::Instant;

mod navbar;
mod page;
pub(crate) mod search;
pub(crate) mod spinner;
pub(super) mod utils;

use spinner::{LoadingIndicator, SpinnerColor, SpinnerSize};

const SUBTITLE: &str = "Preparing your documentation experience";

pub fn render(frame: &mut Frame, app: &mut App) {
    if app.is_initial_loading() {
        render_initial_overlay(frame, app);
        return;
    }

    let footer_height = if app.footer.is_some() { 2 } else { 0 };
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(footer_height),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let search_area = navbar::render_navbar(frame, root[0], app);
    render_progress(frame, root[1], app);

    let body = root[2];
    page::render_page(frame, body, app);
    if app.is_page_loading() {
        frame.render_widget(Clear, body);
        page_load_indicator().render(frame, body, &mut app.throbber_state);
    }

    if let Some(footer) = &app.footer {
        page::render_footer(frame, root[3], footer);
    }
    render_key_hints(frame, root[4], app);

    // Dropdown floats over the page, below the search box
    let bounds = Rect {
        height: root[0].height + root[1].height + body.height,
        ..frame.area()
    };
    search::render_dropdown(frame, search_area, bounds, app);
}

/// Spinner drawn over the page body while a route change settles.
fn page_load_indicator() -> LoadingIndicator {
    LoadingIndicator::new(SpinnerSize::Md)
        .color(SpinnerColor::Green)
        .text("Loading page...")
}

fn render_initial_overlay(frame: &mut Frame, app: &mut App) {
    let indicator = LoadingIndicator::new(SpinnerSize::Lg)
        .color(SpinnerColor::Blue)
        .text(format!("Loading {}...", app.title))
        .full_screen();
    let area = frame.area();
    indicator.render(frame, area, &mut app.throbber_state);

    let indicator_top = area.y + area.height.saturating_sub(indicator.height()) / 2;
    let subtitle_y = indicator_top + indicator.height() + 1;
    if subtitle_y < area.y + area.height {
        frame.render_widget(
            Paragraph::new(Line::styled(SUBTITLE, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center),
            Rect {
                y: subtitle_y,
                height: 1,
                ..area
            },
        );
    }
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let Some(load) = &app.page_load else {
        return;
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue))
        .ratio(load.window.progress(Instant::now()))
        .label("");
    frame.render_widget(gauge, area);
}

fn render_key_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints: &[(&str, &str)] = if app.search_focused {
        &[
            ("↑↓", "select"),
            ("Enter", "open"),
            ("1-5", "recent"),
            ("Ctrl+X", "clear"),
            ("Esc", "close"),
        ]
    } else {
        &[("/", "search"), ("Tab", "next page"), ("Enter", "open"), ("q", "quit")]
    };

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(format!(" {} ", key), Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(format!("{}  ", action), Style::default().fg(Color::DarkGray)));
    }
    if let Some(status) = &app.status_message {
        spans.push(Span::styled(status.clone(), Style::default().fg(Color::Gray)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
