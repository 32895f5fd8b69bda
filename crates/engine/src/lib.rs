//! Pure ROI projection engine shared by the calculator frontend.
//!
//! The crate has no I/O and no UI concerns: a typed input record goes in,
//! a typed results record comes out, and everything in between is plain
//! `f64` arithmetic. Rounding and currency formatting are display concerns
//! that live with the caller.

pub mod currency;
pub mod roi;

pub use currency::{currency_symbol, Currency, DEFAULT_CURRENCY_SYMBOL, SUPPORTED_CURRENCIES};
pub use roi::{compute_roi, RoiInputs, RoiResults, STANDARD_WORKWEEK_HOURS};
