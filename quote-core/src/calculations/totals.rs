//! Order totals calculations for the quote builder.
//!
//! This module derives the GST-inclusive totals block shown at the foot of
//! every quote from the current line items and discount.
//!
//! # Totals Structure
//!
//! The totals block consists of the following lines:
//!
//! | Line     | Description |
//! |----------|-------------|
//! | Subtotal | Sum of all line totals (quantity × unit price) |
//! | Discount | Applied reduction; negative input is clamped to zero |
//! | GST      | (Subtotal − Discount) × GST rate, rounded to cents |
//! | Total    | Subtotal − Discount + GST |
//!
//! Line totals are already rounded to cents when they are computed, so the
//! subtotal is an exact sum; the only rounding applied here is on the GST
//! line itself.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use quote_core::calculations::{TotalsCalculator, TotalsConfig};
//! use quote_core::models::LineItem;
//!
//! let items = vec![
//!     LineItem {
//!         id: 1,
//!         description: "22kW dual-port charger".to_string(),
//!         quantity: 4,
//!         unit_price: dec!(750.00),
//!         total: dec!(3000.00),
//!     },
//!     LineItem {
//!         id: 2,
//!         description: "Switchboard upgrade".to_string(),
//!         quantity: 1,
//!         unit_price: dec!(2500.00),
//!         total: dec!(2500.00),
//!     },
//!     LineItem {
//!         id: 3,
//!         description: "Trenching and cabling".to_string(),
//!         quantity: 1,
//!         unit_price: dec!(1800.00),
//!         total: dec!(1800.00),
//!     },
//! ];
//!
//! let calculator = TotalsCalculator::new(TotalsConfig::default());
//! let totals = calculator.calculate(&items, dec!(0.00)).unwrap();
//!
//! assert_eq!(totals.subtotal, dec!(7300.00));
//! assert_eq!(totals.gst, dec!(730.00));
//! assert_eq!(totals.total, dec!(8030.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::models::LineItem;

/// Errors that can occur during totals calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TotalsError {
    /// The GST rate must be between 0 and 1.
    #[error("GST rate must be between 0 and 1, got {0}")]
    InvalidGstRate(Decimal),
}

/// Configuration parameters for totals calculations.
///
/// The default is the fixed 10% Australian GST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsConfig {
    /// GST rate applied to the discounted subtotal (0.10 for Australian GST).
    pub gst_rate: Decimal,
}

impl TotalsConfig {
    /// The fixed 10% Australian GST.
    pub fn australian_gst() -> Self {
        Self {
            gst_rate: Decimal::new(10, 2),
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`TotalsError::InvalidGstRate`] if `gst_rate` is not in [0, 1].
    pub fn validate(&self) -> Result<(), TotalsError> {
        if self.gst_rate < Decimal::ZERO || self.gst_rate > Decimal::ONE {
            return Err(TotalsError::InvalidGstRate(self.gst_rate));
        }
        Ok(())
    }
}

impl Default for TotalsConfig {
    fn default() -> Self {
        Self::australian_gst()
    }
}

/// The derived totals block of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    /// Exact sum of line totals, before any discount.
    pub subtotal: Decimal,
    /// Discount actually applied (never negative).
    pub discount: Decimal,
    /// GST on the discounted subtotal, rounded to cents.
    pub gst: Decimal,
    /// Grand total: `subtotal − discount + gst`.
    pub total: Decimal,
}

/// Calculator for the quote totals block.
#[derive(Debug, Clone)]
pub struct TotalsCalculator {
    config: TotalsConfig,
}

impl TotalsCalculator {
    /// Creates a new totals calculator with the given configuration.
    pub fn new(config: TotalsConfig) -> Self {
        Self { config }
    }

    /// Calculates the complete totals block for the given line items.
    ///
    /// # Errors
    ///
    /// Returns [`TotalsError`] if the configured GST rate is invalid.
    pub fn calculate(
        &self,
        items: &[LineItem],
        discount: Decimal,
    ) -> Result<QuoteTotals, TotalsError> {
        self.config.validate()?;

        let subtotal = self.subtotal(items);
        let discount = self.applied_discount(discount);
        let gst = self.gst(subtotal, discount);
        let total = subtotal - discount + gst;

        Ok(QuoteTotals {
            subtotal,
            discount,
            gst,
            total,
        })
    }

    /// Exact sum of line totals. Individual totals are already rounded to
    /// cents when the line is edited, so no further rounding is applied.
    fn subtotal(
        &self,
        items: &[LineItem],
    ) -> Decimal {
        items.iter().map(|item| item.total).sum()
    }

    /// Negative discounts are clamped to zero.
    fn applied_discount(
        &self,
        discount: Decimal,
    ) -> Decimal {
        if discount < Decimal::ZERO {
            warn!(%discount, "negative discount clamped to zero");
            Decimal::ZERO
        } else {
            discount
        }
    }

    /// GST on the discounted subtotal, rounded half-up to cents.
    fn gst(
        &self,
        subtotal: Decimal,
        discount: Decimal,
    ) -> Decimal {
        round_half_up((subtotal - discount) * self.config.gst_rate)
    }
}
