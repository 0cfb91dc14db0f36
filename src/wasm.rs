use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::calculator::TipCalculator;
use crate::config::TipConfig;
use crate::currency::TipLocale;
use crate::types::TipInput;

/// Initialize hooks for better debugging in WASM
#[wasm_bindgen]
pub fn init_hooks() {
    console_error_panic_hook::set_once();
}

/// Calculate a tip and return the full breakdown.
///
/// # Arguments
/// - `input_json`: `TipInput` object (`bill_amount`, `tip_percent`, `round_up`)
/// - `locale`: BCP-47 tag such as `"en-US"`
#[wasm_bindgen]
pub fn calculate_tip_wasm(input_json: JsValue, locale: String) -> Result<JsValue, JsError> {
    let input: TipInput = from_value(input_json)
        .map_err(|e| JsError::new(&format!("Invalid Input JSON: {}", e)))?;

    let locale: TipLocale = locale
        .parse()
        .map_err(|e| JsError::new(&format!("{}", e)))?;

    let calculator = TipCalculator::new(&TipConfig::default().with_locale(locale))
        .map_err(|e| JsError::new(&format!("{}", e)))?;

    to_value(&calculator.calculate(&input))
        .map_err(|e| JsError::new(&format!("Serialization Error: {}", e)))
}

/// Formatted tip from raw field text; unparseable text counts as zero.
#[wasm_bindgen]
pub fn calculate_tip_text_wasm(
    amount_text: &str,
    percent_text: &str,
    round_up: bool,
    locale: String,
) -> Result<String, JsError> {
    let locale: TipLocale = locale
        .parse()
        .map_err(|e| JsError::new(&format!("{}", e)))?;
    let calculator = TipCalculator::new(&TipConfig::default().with_locale(locale))
        .map_err(|e| JsError::new(&format!("{}", e)))?;
    Ok(calculator.calculate_text(amount_text, percent_text, round_up).formatted)
}
