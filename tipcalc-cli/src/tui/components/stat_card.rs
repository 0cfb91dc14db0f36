//! Stat Card Widget
//!
//! A card displaying a title, a prominent value and an optional subtitle.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::tui::theme::Theme;

pub struct StatCard<'a> {
    title: &'a str,
    value: &'a str,
    highlighted: bool,
    subtitle: Option<&'a str>,
}

impl<'a> StatCard<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            highlighted: false,
            subtitle: None,
        }
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn subtitle(mut self, subtitle: Option<&'a str>) -> Self {
        self.subtitle = subtitle;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let border_style = if self.highlighted {
            theme.border_active()
        } else {
            theme.border_inactive()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(theme.bg_panel());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Value
                Constraint::Length(1), // Subtitle
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(self.title)
                .style(theme.subtitle())
                .alignment(Alignment::Left),
            content[0],
        );

        frame.render_widget(
            Paragraph::new(self.value)
                .style(theme.value())
                .alignment(Alignment::Left),
            content[1],
        );

        if let Some(subtitle) = self.subtitle {
            frame.render_widget(
                Paragraph::new(subtitle)
                    .style(theme.subtitle())
                    .alignment(Alignment::Left),
                content[2],
            );
        }
    }
}
