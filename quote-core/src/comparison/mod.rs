//! Side-by-side product comparison.
//!
//! Given a bounded selection of catalogue products and a feature schedule,
//! this module builds the comparison matrix: one formatted cell per product
//! per feature, with best-value flags on the rankable rows. Missing and
//! malformed data never fail the build; a cell that cannot be resolved
//! simply renders as "-".
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use rust_decimal_macros::dec;
//! use quote_core::comparison::{ComparisonTable, standard_features};
//! use quote_core::models::{
//!     ProductCatalogueItem, ProductInventory, ProductPricing, SpecValue,
//! };
//!
//! let charger = |id: &str, name: &str, price| ProductCatalogueItem {
//!     id: id.to_string(),
//!     name: name.to_string(),
//!     brand: "Zap".to_string(),
//!     category: "AC Chargers".to_string(),
//!     specifications: BTreeMap::from([(
//!         "powerRating".to_string(),
//!         SpecValue::Number(dec!(22)),
//!     )]),
//!     pricing: ProductPricing {
//!         list_price: price,
//!         recommended_retail: price,
//!     },
//!     inventory: ProductInventory {
//!         available: 6,
//!         lead_time: "2-3 weeks".to_string(),
//!     },
//! };
//!
//! let a = charger("CHG-01", "Wallbox 22", dec!(1850));
//! let b = charger("CHG-02", "PowerPost 22", dec!(2100));
//!
//! let table = ComparisonTable::build(&[&a, &b], standard_features());
//! let price_row = table
//!     .rows
//!     .iter()
//!     .find(|row| row.label == "List price")
//!     .unwrap();
//!
//! assert_eq!(price_row.cells, vec!["$1,850", "$2,100"]);
//! assert_eq!(price_row.best, vec![true, false]);
//! ```

mod feature;
mod table;
mod value;

pub use feature::{ComparisonFeature, FeatureKind, MAX_COMPARE_PRODUCTS, standard_features};
pub use table::{ComparisonError, ComparisonRow, ComparisonSelection, ComparisonTable};
pub use value::{FieldValue, field_value, format_value};
