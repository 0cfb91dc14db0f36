//! Reusable widgets for the tip calculator screen.

pub mod stat_card;
pub mod switch;

pub use stat_card::StatCard;
pub use switch::Switch;
