//! Labelled on/off switch row.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::theme::{Theme, icons};

pub struct Switch<'a> {
    label: &'a str,
    checked: bool,
    focused: bool,
}

impl<'a> Switch<'a> {
    pub fn new(label: &'a str, checked: bool) -> Self {
        Self {
            label,
            checked,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Label on the left, knob right-aligned to `width` columns.
    pub fn to_line(&self, theme: &Theme, width: u16) -> Line<'a> {
        let marker = if self.focused { icons::ARROW_RIGHT } else { " " };
        let knob = if self.checked {
            Span::styled(" ON  ●", theme.switch_on())
        } else {
            Span::styled("○  OFF", theme.switch_off())
        };
        let label_style = if self.focused { theme.title() } else { theme.text() };

        let used = 2 + self.label.chars().count() + 6;
        let gap = (width as usize).saturating_sub(used).max(1);

        Line::from(vec![
            Span::styled(format!("{} ", marker), theme.title()),
            Span::styled(self.label, label_style),
            Span::raw(" ".repeat(gap)),
            knob,
        ])
    }

    pub fn render(self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let line = self.to_line(theme, area.width);
        frame.render_widget(Paragraph::new(line).style(theme.bg()), area);
    }
}
