//! Loading indicator built on `throbber-widgets-tui`.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};
use throbber_widgets_tui::{Throbber, ThrobberState, WhichUse};

use super::utils::centered_rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    /// Spinner and text on one line
    Sm,
    /// Spinner above the text
    #[default]
    Md,
    /// Wide spinner above bold text
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerColor {
    #[default]
    Blue,
    Green,
    Gray,
}

impl SpinnerColor {
    fn color(self) -> Color {
        match self {
            SpinnerColor::Blue => Color::Blue,
            SpinnerColor::Green => Color::Green,
            SpinnerColor::Gray => Color::Gray,
        }
    }
}

/// A spinner with optional text, inline or covering the whole frame.
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    pub size: SpinnerSize,
    pub color: SpinnerColor,
    pub text: Option<String>,
    pub full_screen: bool,
}

impl LoadingIndicator {
    pub fn new(size: SpinnerSize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn color(mut self, color: SpinnerColor) -> Self {
        self.color = color;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn full_screen(mut self) -> Self {
        self.full_screen = true;
        self
    }

    /// Rows needed to draw the indicator.
    pub fn height(&self) -> u16 {
        match (self.size, &self.text) {
            (SpinnerSize::Sm, _) | (_, None) => 1,
            (SpinnerSize::Md, Some(_)) => 2,
            (SpinnerSize::Lg, Some(_)) => 3,
        }
    }

    /// Columns needed to draw the indicator.
    pub fn width(&self) -> u16 {
        let text = self.text.as_deref().map_or(0, |t| t.chars().count() as u16);
        match self.size {
            SpinnerSize::Sm => text + 2,
            SpinnerSize::Md | SpinnerSize::Lg => text.max(2),
        }
    }

    fn throbber(&self) -> Throbber<'static> {
        let set = match self.size {
            SpinnerSize::Sm => throbber_widgets_tui::BRAILLE_SIX,
            SpinnerSize::Md => throbber_widgets_tui::BRAILLE_EIGHT,
            SpinnerSize::Lg => throbber_widgets_tui::BRAILLE_DOUBLE,
        };
        Throbber::default()
            .style(Style::default().fg(Color::Gray))
            .throbber_style(Style::default().fg(self.color.color()).add_modifier(Modifier::BOLD))
            .throbber_set(set)
            .use_type(WhichUse::Spin)
    }

    /// Draw centered in `area`, or over the whole frame when `full_screen` is set.
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &mut ThrobberState) {
        let area = if self.full_screen {
            let full = frame.area();
            frame.render_widget(Clear, full);
            full
        } else {
            area
        };
        let inner = centered_rect(self.width(), self.height(), area);
        if inner.height == 0 {
            return;
        }

        if self.size == SpinnerSize::Sm {
            let mut throbber = self.throbber();
            if let Some(text) = &self.text {
                throbber = throbber.label(text.clone());
            }
            frame.render_stateful_widget(throbber, inner, state);
            return;
        }

        let spinner_width = if self.size == SpinnerSize::Lg { 2 } else { 1 };
        let spinner_area = Rect {
            x: inner.x + inner.width.saturating_sub(spinner_width) / 2,
            y: inner.y,
            width: spinner_width.min(inner.width),
            height: 1,
        };
        frame.render_stateful_widget(self.throbber(), spinner_area, state);

        if let Some(text) = &self.text {
            let text_y = inner.y + self.height() - 1;
            if text_y >= area.y + area.height {
                return;
            }
            let mut style = Style::default().fg(Color::Gray);
            if self.size == SpinnerSize::Lg {
                style = style.add_modifier(Modifier::BOLD);
            }
            let text_area = Rect {
                x: area.x,
                y: text_y,
                width: area.width,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Line::styled(text.clone(), style)).alignment(Alignment::Center),
                text_area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_map_to_terminal_palette() {
        assert_eq!(SpinnerColor::Blue.color(), Color::Blue);
        assert_eq!(SpinnerColor::Green.color(), Color::Green);
        assert_eq!(SpinnerColor::Gray.color(), Color::Gray);
    }

    #[test]
    fn defaults_match_medium_blue() {
        let indicator = LoadingIndicator::default();
        assert_eq!(indicator.size, SpinnerSize::Md);
        assert_eq!(indicator.color, SpinnerColor::Blue);
        assert!(!indicator.full_screen);
    }

    #[test]
    fn height_grows_with_size() {
        let text = "Loading page...";
        assert_eq!(LoadingIndicator::new(SpinnerSize::Sm).text(text).height(), 1);
        assert_eq!(LoadingIndicator::new(SpinnerSize::Md).text(text).height(), 2);
        assert_eq!(LoadingIndicator::new(SpinnerSize::Lg).text(text).height(), 3);
        assert_eq!(LoadingIndicator::new(SpinnerSize::Lg).height(), 1);
    }

    #[test]
    fn inline_width_leaves_room_for_symbol() {
        let indicator = LoadingIndicator::new(SpinnerSize::Sm).text("Searching...");
        assert_eq!(indicator.width(), 14);
    }
}
