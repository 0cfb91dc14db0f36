//! Prelude module for tipcalc
//!
//! Re-exports the commonly used structs, traits, and functions.
//!
//! # Usage
//!
//! ```rust
//! use tipcalc::prelude::*;
//! ```

pub use crate::calculator::{TipCalculator, calculate_tip, compute_tip};
pub use crate::config::{TipConfig, TipConfigBuilder};
pub use crate::currency::{CurrencyFormatter, IcuCurrencyFormatter, TipLocale};
pub use crate::inputs::{IntoTipDecimal, parse_or_zero};
pub use crate::types::{
    CalculationStep, DEFAULT_TIP_PERCENT, Operation, TipBreakdown, TipError, TipInput,
};
