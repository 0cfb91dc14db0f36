//! Application state for the single tip screen.

use rust_decimal::Decimal;
use tipcalc::{TipBreakdown, TipCalculator, TipLocale};
use tui_input::Input;

use crate::tui::theme::Theme;

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Amount,
    TipPercent,
    RoundUp,
    DarkMode,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Amount, Field::TipPercent, Field::RoundUp, Field::DarkMode];

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_text(self) -> bool {
        matches!(self, Field::Amount | Field::TipPercent)
    }
}

pub struct App {
    /// Whether the app should keep running
    pub running: bool,
    pub focus: Field,
    /// Raw bill amount text as typed
    pub amount: Input,
    /// Raw tip percentage text as typed
    pub tip_percent: Input,
    pub round_up: bool,
    pub dark_mode: bool,
    pub theme: Theme,
    /// Shown as the percentage field's placeholder
    pub default_percent: Decimal,
    calculator: TipCalculator,
}

impl App {
    pub fn new(calculator: TipCalculator, default_percent: Decimal, dark_mode: bool) -> Self {
        Self {
            running: true,
            focus: Field::default(),
            amount: Input::default(),
            tip_percent: Input::default(),
            round_up: false,
            dark_mode,
            theme: Theme::for_mode(dark_mode),
            default_percent,
            calculator,
        }
    }

    /// Tip for the current field contents. Recomputed on every call.
    pub fn breakdown(&self) -> TipBreakdown {
        self.calculator
            .calculate_text(self.amount.value(), self.tip_percent.value(), self.round_up)
    }

    pub fn locale(&self) -> TipLocale {
        self.calculator.locale()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Text buffer of the focused field, if it is a text field.
    pub fn focused_input_mut(&mut self) -> Option<&mut Input> {
        match self.focus {
            Field::Amount => Some(&mut self.amount),
            Field::TipPercent => Some(&mut self.tip_percent),
            _ => None,
        }
    }

    /// Flips the focused switch. Returns false when a text field has focus.
    pub fn toggle_focused(&mut self) -> bool {
        match self.focus {
            Field::RoundUp => self.toggle_round_up(),
            Field::DarkMode => self.toggle_dark_mode(),
            _ => return false,
        }
        true
    }

    pub fn toggle_round_up(&mut self) {
        self.round_up = !self.round_up;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.theme = Theme::for_mode(self.dark_mode);
    }

    pub fn clear_inputs(&mut self) {
        self.amount.reset();
        self.tip_percent.reset();
        self.focus = Field::Amount;
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
pub(crate) fn test_app() -> App {
    use rust_decimal_macros::dec;
    use tipcalc::TipConfig;

    let calculator = TipCalculator::new(&TipConfig::default()).unwrap();
    App::new(calculator, dec!(15), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wraps() {
        assert_eq!(Field::DarkMode.next(), Field::Amount);
        assert_eq!(Field::Amount.prev(), Field::DarkMode);
        assert_eq!(Field::Amount.next(), Field::TipPercent);
    }

    #[test]
    fn test_breakdown_follows_inputs() {
        let mut app = test_app();
        assert_eq!(app.breakdown().formatted, "$0.00");

        app.amount = Input::default().with_value("33".into());
        app.tip_percent = Input::default().with_value("15".into());
        assert_eq!(app.breakdown().formatted, "$4.95");

        app.toggle_round_up();
        assert_eq!(app.breakdown().formatted, "$5.00");
    }

    #[test]
    fn test_toggle_focused_only_on_switches() {
        let mut app = test_app();
        assert!(!app.toggle_focused());

        app.focus = Field::DarkMode;
        assert!(app.toggle_focused());
        assert!(app.dark_mode);
        assert!(app.theme.is_dark);
    }

    #[test]
    fn test_clear_inputs() {
        let mut app = test_app();
        app.amount = Input::default().with_value("12".into());
        app.focus = Field::RoundUp;
        app.clear_inputs();
        assert_eq!(app.amount.value(), "");
        assert_eq!(app.focus, Field::Amount);
    }
}
