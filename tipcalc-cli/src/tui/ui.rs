//! UI rendering for the tip screen.
//!
//! Layout, top to bottom: header, two text fields, two switches, the result
//! card and a one-line status bar with key hints.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tui_input::Input;

use crate::tui::app::{App, Field};
use crate::tui::components::{StatCard, Switch};
use crate::tui::theme::icons;

const FORM_WIDTH: u16 = 56;

/// Main UI rendering function.
pub fn ui(frame: &mut Frame, app: &App) {
    let t = &app.theme;

    frame.render_widget(Clear, frame.area());
    frame.render_widget(Block::default().style(t.bg()), frame.area());

    let root_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status Bar
        ])
        .split(frame.area());

    render_header(frame, root_layout[0], app);
    render_form(frame, root_layout[1], app);
    render_status_bar(frame, root_layout[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let t = &app.theme;

    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(t.border_inactive())
        .style(t.bg());
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let brand = Line::from(vec![
        Span::raw(" "),
        Span::raw(icons::TIP),
        Span::raw(" "),
        Span::styled("TIP", t.title()),
        Span::styled(" CALCULATOR", t.text().add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(brand).alignment(Alignment::Left), layout[0]);

    let locale = app.locale();
    let mode_icon = if app.dark_mode { icons::MOON } else { icons::SUN };
    let info = Line::from(vec![
        Span::styled(locale.as_str(), t.subtitle()),
        Span::styled(format!(" {} ", icons::SEPARATOR), t.border_inactive()),
        Span::styled(locale.currency_code(), t.text()),
        Span::raw("  "),
        Span::raw(mode_icon),
        Span::raw(" "),
    ]);
    frame.render_widget(Paragraph::new(info).alignment(Alignment::Right), layout[1]);
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let t = &app.theme;

    let [column] = Layout::horizontal([Constraint::Max(FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Bill amount
            Constraint::Length(3), // Tip percent
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Round up
            Constraint::Length(1), // Dark mode
            Constraint::Length(1), // Spacer
            Constraint::Length(5), // Result card
            Constraint::Min(0),
        ])
        .split(column);

    let percent_placeholder = format!("e.g. {}", app.default_percent.normalize());
    render_text_field(frame, rows[1], app, Field::Amount, "Bill amount", &app.amount, "0.00");
    render_text_field(
        frame,
        rows[2],
        app,
        Field::TipPercent,
        "Tip percentage",
        &app.tip_percent,
        &percent_placeholder,
    );

    Switch::new("Round up tip?", app.round_up)
        .focused(app.focus == Field::RoundUp)
        .render(frame, rows[4], t);
    Switch::new("Dark mode", app.dark_mode)
        .focused(app.focus == Field::DarkMode)
        .render(frame, rows[5], t);

    render_result(frame, rows[7], app);
}

fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    field: Field,
    label: &str,
    input: &Input,
    placeholder: &str,
) {
    let t = &app.theme;
    let focused = app.focus == field;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused { t.border_active() } else { t.border_inactive() })
        .title(Span::styled(
            format!(" {} ", label),
            if focused { t.title() } else { t.subtitle() },
        ))
        .style(t.bg_panel());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.max(1) as usize;
    let scroll = input.visual_scroll(width);
    let paragraph = if input.value().is_empty() {
        Paragraph::new(Span::styled(
            placeholder.to_string(),
            Style::default().fg(t.text_muted).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Paragraph::new(input.value().to_string())
            .style(t.text())
            .scroll((0, scroll as u16))
    };
    frame.render_widget(paragraph, inner);

    if focused {
        let x = inner.x + (input.visual_cursor().max(scroll) - scroll) as u16;
        frame.set_cursor_position((x, inner.y));
    }
}

fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    let t = &app.theme;
    let breakdown = app.breakdown();

    let subtitle = breakdown
        .rounded
        .then(|| format!("{} rounded up from {}", icons::ROUNDED, breakdown.raw_tip.normalize()));

    StatCard::new("Tip amount", &breakdown.formatted)
        .highlighted(!breakdown.tip.is_zero())
        .subtitle(subtitle.as_deref())
        .render(frame, area, t);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let t = &app.theme;
    let hints = [
        ("Tab", "next"),
        ("Space", "toggle"),
        ("^R", "round"),
        ("^D", "theme"),
        ("^L", "clear"),
        ("Esc", "quit"),
    ];

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" {}", key), t.key_hint()),
                Span::styled(format!(" {} ", action), t.subtitle()),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)).style(t.bg_panel()), area);
}
