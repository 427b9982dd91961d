use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalogue reference data for a single product.
///
/// Items are immutable once materialized; filtering and comparison read
/// them but never mutate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCatalogueItem {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    /// Open per-category attributes (power rating, connector type, ...).
    /// Keys use the catalogue's camelCase field names.
    #[serde(default)]
    pub specifications: BTreeMap<String, SpecValue>,
    pub pricing: ProductPricing,
    pub inventory: ProductInventory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPricing {
    pub list_price: Decimal,
    pub recommended_retail: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInventory {
    pub available: u32,
    /// Supplier-quoted delivery duration, free text (e.g. "2-3 weeks").
    pub lead_time: String,
}

/// A loosely typed specification value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Number(Decimal),
    Bool(bool),
    List(Vec<String>),
    Text(String),
}
