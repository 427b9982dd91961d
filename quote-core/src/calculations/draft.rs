//! In-memory quote draft editing.
//!
//! A [`QuoteDraft`] owns the line-item collection while a quote is being
//! assembled, the same data a quote editor binds row by row. All numeric
//! edits arrive as raw strings and are coerced before they touch an item,
//! so the collection can never hold an unparseable state.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use quote_core::calculations::{QuoteDraft, TotalsConfig};
//! use quote_core::models::LineItemField;
//!
//! let mut draft = QuoteDraft::new();
//! let id = draft.add_item();
//! draft.update_item(id, LineItemField::Description, "22kW dual-port charger");
//! draft.update_item(id, LineItemField::Quantity, "4");
//! draft.update_item(id, LineItemField::UnitPrice, "750.00");
//!
//! let totals = draft.totals(&TotalsConfig::default()).unwrap();
//! assert_eq!(totals.subtotal, dec!(3000.00));
//! assert_eq!(totals.total, dec!(3300.00));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{coerce_money, coerce_quantity};
use crate::calculations::totals::{QuoteTotals, TotalsCalculator, TotalsConfig, TotalsError};
use crate::models::{LineItem, LineItemField, NewQuote, QuoteStatus};

/// The mutable line-item collection behind the quote builder.
///
/// The draft is owned exclusively by the enclosing editor; there is no
/// shared state and every operation completes synchronously.
#[derive(Debug, Clone, Default)]
pub struct QuoteDraft {
    items: Vec<LineItem>,
    discount: Decimal,
    next_id: u64,
}

impl QuoteDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty line (quantity 1, $0) and returns its id.
    pub fn add_item(&mut self) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(LineItem::new(id));
        id
    }

    /// Applies a field edit to the line matching `id`.
    ///
    /// Quantity and unit-price edits recompute the line total; description
    /// edits leave it untouched. Unknown ids are ignored, so a stale edit
    /// against a removed row is harmless.
    pub fn update_item(
        &mut self,
        id: u64,
        field: LineItemField,
        raw: &str,
    ) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!(id, "edit for unknown line item ignored");
            return;
        };
        match field {
            LineItemField::Description => item.description = raw.to_string(),
            LineItemField::Quantity => {
                item.quantity = coerce_quantity(raw);
                item.recompute_total();
            }
            LineItemField::UnitPrice => {
                item.unit_price = coerce_money(raw);
                item.recompute_total();
            }
        }
    }

    /// Removes the line matching `id`; ignored when absent.
    pub fn remove_item(
        &mut self,
        id: u64,
    ) {
        self.items.retain(|item| item.id != id);
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sets the quote-level discount from raw editor input.
    pub fn set_discount(
        &mut self,
        raw: &str,
    ) {
        self.discount = coerce_money(raw);
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Derives the totals block for the current lines.
    pub fn totals(
        &self,
        config: &TotalsConfig,
    ) -> Result<QuoteTotals, TotalsError> {
        TotalsCalculator::new(config.clone()).calculate(&self.items, self.discount)
    }

    /// Freezes the draft into a quote ready for persistence.
    pub fn into_new_quote(
        self,
        quote_number: String,
        customer: String,
        config: &TotalsConfig,
    ) -> Result<NewQuote, TotalsError> {
        let totals = self.totals(config)?;
        Ok(NewQuote {
            quote_number,
            customer,
            status: QuoteStatus::Draft,
            items: self.items,
            discount: self.discount,
            totals,
        })
    }
}
