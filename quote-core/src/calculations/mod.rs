//! Quote calculation modules.
//!
//! This module provides the order-totals arithmetic behind the quote
//! builder: per-line totals, the draft editing operations, and the
//! GST-inclusive totals derivation.

pub mod common;
pub mod draft;
pub mod totals;

pub use draft::QuoteDraft;
pub use totals::{QuoteTotals, TotalsCalculator, TotalsConfig, TotalsError};
