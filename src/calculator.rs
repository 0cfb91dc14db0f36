use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

use crate::config::TipConfig;
use crate::currency::{CurrencyFormatter, IcuCurrencyFormatter, TipLocale};
use crate::types::{CalculationStep, TipBreakdown, TipError, TipInput};

/// `tip_percent / 100 * bill_amount`, replaced by its ceiling when `round_up` is set.
///
/// Never panics: a product outside the `Decimal` range saturates to
/// `Decimal::MAX` or `Decimal::MIN`.
pub fn compute_tip(bill_amount: Decimal, tip_percent: Decimal, round_up: bool) -> Decimal {
    // Dividing by 100 only shrinks the magnitude.
    let rate = tip_percent / dec!(100);
    let tip = rate.checked_mul(bill_amount).unwrap_or_else(|| {
        warn!(%bill_amount, %tip_percent, "tip overflows the decimal range, saturating");
        rate.saturating_mul(bill_amount)
    });
    if round_up { tip.ceil() } else { tip }
}

thread_local! {
    static EN_US_FORMATTER: Option<IcuCurrencyFormatter> =
        IcuCurrencyFormatter::try_new(TipLocale::EnUS)
            .map_err(|e| warn!("{}", e))
            .ok();
}

/// Computes and formats a tip with en-US currency formatting.
///
/// The ICU formatter is built on first use and kept for the thread.
pub fn calculate_tip(bill_amount: Decimal, tip_percent: Decimal, round_up: bool) -> String {
    let tip = compute_tip(bill_amount, tip_percent, round_up);
    EN_US_FORMATTER.with(|formatter| match formatter {
        Some(formatter) => formatter.format_currency(tip),
        None => TipLocale::EnUS.format_currency(tip),
    })
}

/// Tip calculator bound to one currency formatter.
#[derive(Debug)]
pub struct TipCalculator<F = IcuCurrencyFormatter> {
    formatter: F,
}

impl TipCalculator<IcuCurrencyFormatter> {
    pub fn new(config: &TipConfig) -> Result<Self, TipError> {
        config.validate()?;
        Ok(Self::with_formatter(IcuCurrencyFormatter::try_new(config.locale)?))
    }

    pub fn locale(&self) -> TipLocale {
        self.formatter.locale()
    }
}

impl<F: CurrencyFormatter> TipCalculator<F> {
    pub fn with_formatter(formatter: F) -> Self {
        Self { formatter }
    }

    /// Formatted tip for the given values.
    pub fn calculate_tip(&self, bill_amount: Decimal, tip_percent: Decimal, round_up: bool) -> String {
        self.formatter.format_currency(compute_tip(bill_amount, tip_percent, round_up))
    }

    /// Full calculation with step trace.
    pub fn calculate(&self, input: &TipInput) -> TipBreakdown {
        let raw_tip = compute_tip(input.bill_amount, input.tip_percent, false);
        let tip = if input.round_up { raw_tip.ceil() } else { raw_tip };
        let formatted = self.formatter.format_currency(tip);

        let mut trace = vec![
            CalculationStep::initial("Bill amount", input.bill_amount),
            CalculationStep::rate("Tip percent", input.tip_percent),
            CalculationStep::multiply("Raw tip", raw_tip),
        ];
        if input.round_up {
            trace.push(CalculationStep::ceiling("Rounded up", tip));
        }
        trace.push(CalculationStep::result("Tip", tip));
        if input.bill_amount.is_zero() || input.tip_percent.is_zero() {
            trace.push(CalculationStep::info("Zero bill or percent gives a zero tip"));
        }

        debug!(
            bill_amount = %input.bill_amount,
            tip_percent = %input.tip_percent,
            round_up = input.round_up,
            tip = %formatted,
            "tip calculated"
        );

        TipBreakdown {
            input: *input,
            raw_tip,
            tip,
            rounded: tip != raw_tip,
            formatted,
            trace,
        }
    }

    /// Calculation straight from raw field text; unparseable text counts as zero.
    pub fn calculate_text(&self, amount_text: &str, percent_text: &str, round_up: bool) -> TipBreakdown {
        self.calculate(&TipInput::from_text(amount_text, percent_text, round_up))
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }
}
