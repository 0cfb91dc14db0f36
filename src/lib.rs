pub mod calculator;
pub mod config;
pub mod currency;
pub mod inputs;
pub mod prelude;
pub mod types;

#[cfg(feature = "uniffi")]
pub mod kotlin;
#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

pub use calculator::{TipCalculator, calculate_tip, compute_tip};
pub use config::TipConfig;
pub use currency::{CurrencyFormatter, IcuCurrencyFormatter, TipLocale};
pub use types::{TipBreakdown, TipError, TipInput};
