use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// A single priced row within a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: u64,
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    /// Always `quantity × unit_price`, rounded to cents.
    /// Recomputed on every quantity or price edit; never mutated directly.
    pub total: Decimal,
}

impl LineItem {
    /// Creates a fresh line as added from the quote editor: one unit at $0.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            description: String::new(),
            quantity: 1,
            unit_price: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// Recomputes `total` from the current quantity and unit price.
    pub fn recompute_total(&mut self) {
        self.total = round_half_up(Decimal::from(self.quantity) * self.unit_price);
    }
}

/// Field discriminant for edits addressed to a line from a UI row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineItemField {
    Description,
    Quantity,
    UnitPrice,
}
