//! Comparison selection and matrix building.

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::ProductCatalogueItem;

use super::feature::{ComparisonFeature, FeatureKind, MAX_COMPARE_PRODUCTS};
use super::value::{FieldValue, field_value, format_value};

/// Errors that can occur when editing a comparison selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComparisonError {
    /// The selection already holds the maximum number of products.
    #[error("comparison is full ({max} products)")]
    SelectionFull { max: usize },

    /// The product is already part of the selection.
    #[error("product '{0}' is already selected")]
    AlreadySelected(String),
}

/// A bounded set of products picked for side-by-side comparison.
///
/// Products are handed in by the caller; the selection holds its own copies
/// and reads nothing from any shared catalogue state.
#[derive(Debug, Clone)]
pub struct ComparisonSelection {
    products: Vec<ProductCatalogueItem>,
    max: usize,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::with_max(MAX_COMPARE_PRODUCTS)
    }

    pub fn with_max(max: usize) -> Self {
        Self {
            products: Vec::new(),
            max,
        }
    }

    /// Adds a product to the selection.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::AlreadySelected`] for a duplicate id and
    /// [`ComparisonError::SelectionFull`] once the maximum is reached.
    pub fn try_add(
        &mut self,
        product: ProductCatalogueItem,
    ) -> Result<(), ComparisonError> {
        if self.products.iter().any(|p| p.id == product.id) {
            return Err(ComparisonError::AlreadySelected(product.id.clone()));
        }
        if self.products.len() >= self.max {
            return Err(ComparisonError::SelectionFull { max: self.max });
        }
        self.products.push(product);
        Ok(())
    }

    /// Drops the product matching `id`; ignored when absent.
    pub fn remove(
        &mut self,
        id: &str,
    ) {
        self.products.retain(|p| p.id != id);
    }

    pub fn products(&self) -> &[ProductCatalogueItem] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Builds the comparison table for the current selection.
    pub fn table(
        &self,
        features: &[ComparisonFeature],
    ) -> ComparisonTable {
        let refs: Vec<&ProductCatalogueItem> = self.products.iter().collect();
        ComparisonTable::build(&refs, features)
    }
}

impl Default for ComparisonSelection {
    fn default() -> Self {
        Self::new()
    }
}

/// One rendered feature row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub kind: FeatureKind,
    pub important: bool,
    /// One formatted cell per compared product, in selection order.
    pub cells: Vec<String>,
    /// Cell-aligned best-value flags. Ties flag every tying product.
    pub best: Vec<bool>,
}

/// The full comparison matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonTable {
    /// Product names, in column order.
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Builds the matrix for `products` against the feature schedule.
    ///
    /// A feature row where no product has a value carries no comparative
    /// information and is dropped; a missing value in an otherwise populated
    /// row renders as "-". Building never fails: malformed data degrades
    /// cell by cell.
    pub fn build(
        products: &[&ProductCatalogueItem],
        features: &[ComparisonFeature],
    ) -> Self {
        let columns = products.iter().map(|p| p.name.clone()).collect();
        let mut rows = Vec::with_capacity(features.len());

        for feature in features {
            let values: Vec<Option<FieldValue>> = products
                .iter()
                .map(|product| field_value(product, feature.key))
                .collect();

            if values.iter().all(Option::is_none) {
                continue;
            }

            let best = best_value_flags(feature.kind, &values);
            let cells = values
                .iter()
                .map(|value| format_value(value.as_ref(), feature.kind))
                .collect();

            rows.push(ComparisonRow {
                label: feature.label,
                kind: feature.kind,
                important: feature.important,
                cells,
                best,
            });
        }

        Self { columns, rows }
    }
}

/// Cell-aligned best-value flags for one feature row.
///
/// Currency and plain numbers rank by the lowest defined value; lead times
/// rank by the leading number of the text ("2-3 weeks" ranks as 2). All
/// ties are flagged. The remaining kinds are not ranked.
fn best_value_flags(
    kind: FeatureKind,
    values: &[Option<FieldValue>],
) -> Vec<bool> {
    let ranked: Vec<Option<Decimal>> = match kind {
        FeatureKind::Currency | FeatureKind::Number => values
            .iter()
            .map(|value| value.as_ref().and_then(FieldValue::as_number))
            .collect(),
        FeatureKind::LeadTime => values
            .iter()
            .map(|value| match value {
                Some(FieldValue::Text(s)) => lead_time_rank(s),
                _ => None,
            })
            .collect(),
        FeatureKind::Text | FeatureKind::Boolean | FeatureKind::Array | FeatureKind::Rating => {
            return vec![false; values.len()];
        }
    };

    let Some(min) = ranked.iter().flatten().min().copied() else {
        return vec![false; values.len()];
    };

    ranked.iter().map(|value| *value == Some(min)).collect()
}

/// Leading number of a lead-time string: `"2-3 weeks"` ranks as 2.
///
/// Lead times without a numeric prefix ("TBC", "On request") do not compete
/// for best value.
fn lead_time_rank(lead_time: &str) -> Option<Decimal> {
    static LEADING_NUMBER: OnceLock<Regex> = OnceLock::new();
    let re = LEADING_NUMBER.get_or_init(|| Regex::new(r"^\s*(\d+)").expect("literal pattern"));
    re.captures(lead_time)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<Decimal>().ok())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::{ProductInventory, ProductPricing, SpecValue};

    use super::*;

    fn product(
        id: &str,
        list_price: Decimal,
        lead_time: &str,
    ) -> ProductCatalogueItem {
        ProductCatalogueItem {
            id: id.to_string(),
            name: format!("Charger {id}"),
            brand: "Zap".to_string(),
            category: "AC Chargers".to_string(),
            specifications: BTreeMap::new(),
            pricing: ProductPricing {
                list_price,
                recommended_retail: list_price,
            },
            inventory: ProductInventory {
                available: 5,
                lead_time: lead_time.to_string(),
            },
        }
    }

    fn price_feature() -> ComparisonFeature {
        ComparisonFeature {
            key: "pricing.listPrice",
            label: "List price",
            kind: FeatureKind::Currency,
            important: true,
        }
    }

    fn lead_time_feature() -> ComparisonFeature {
        ComparisonFeature {
            key: "inventory.leadTime",
            label: "Lead time",
            kind: FeatureKind::LeadTime,
            important: true,
        }
    }

    // =========================================================================
    // ComparisonSelection tests
    // =========================================================================

    #[test]
    fn try_add_accepts_up_to_max() {
        let mut selection = ComparisonSelection::new();

        for id in ["a", "b", "c", "d"] {
            selection
                .try_add(product(id, dec!(1000), "1 week"))
                .unwrap();
        }

        assert_eq!(selection.len(), 4);
    }

    #[test]
    fn try_add_rejects_when_full() {
        let mut selection = ComparisonSelection::with_max(2);
        selection.try_add(product("a", dec!(1000), "1 week")).unwrap();
        selection.try_add(product("b", dec!(1200), "1 week")).unwrap();

        let result = selection.try_add(product("c", dec!(900), "1 week"));

        assert_eq!(result, Err(ComparisonError::SelectionFull { max: 2 }));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn try_add_rejects_duplicate_id() {
        let mut selection = ComparisonSelection::new();
        selection.try_add(product("a", dec!(1000), "1 week")).unwrap();

        let result = selection.try_add(product("a", dec!(1000), "1 week"));

        assert_eq!(
            result,
            Err(ComparisonError::AlreadySelected("a".to_string()))
        );
    }

    #[test]
    fn remove_frees_a_slot() {
        let mut selection = ComparisonSelection::with_max(1);
        selection.try_add(product("a", dec!(1000), "1 week")).unwrap();

        selection.remove("a");

        assert!(selection.is_empty());
        assert_eq!(selection.try_add(product("b", dec!(800), "1 week")), Ok(()));
    }

    // =========================================================================
    // best-value tests
    // =========================================================================

    #[test]
    fn cheapest_product_is_flagged_alone() {
        let a = product("a", dec!(100), "1 week");
        let b = product("b", dec!(150), "1 week");

        let table = ComparisonTable::build(&[&a, &b], &[price_feature()]);

        assert_eq!(table.rows[0].cells, vec!["$100", "$150"]);
        assert_eq!(table.rows[0].best, vec![true, false]);
    }

    #[test]
    fn price_tie_flags_both_products() {
        let a = product("a", dec!(100), "1 week");
        let b = product("b", dec!(100), "1 week");

        let table = ComparisonTable::build(&[&a, &b], &[price_feature()]);

        assert_eq!(table.rows[0].best, vec![true, true]);
    }

    #[test]
    fn shortest_lead_time_wins() {
        let a = product("a", dec!(100), "2-3 weeks");
        let b = product("b", dec!(100), "1 week");
        let c = product("c", dec!(100), "10 days");

        let table = ComparisonTable::build(&[&a, &b, &c], &[lead_time_feature()]);

        // "1 week" ranks as 1, "2-3 weeks" as 2, "10 days" as 10
        assert_eq!(table.rows[0].best, vec![false, true, false]);
    }

    #[test]
    fn non_numeric_lead_time_is_excluded_from_contention() {
        let a = product("a", dec!(100), "TBC");
        let b = product("b", dec!(100), "3-4 weeks");

        let table = ComparisonTable::build(&[&a, &b], &[lead_time_feature()]);

        assert_eq!(table.rows[0].cells, vec!["TBC", "3-4 weeks"]);
        assert_eq!(table.rows[0].best, vec![false, true]);
    }

    #[test]
    fn all_non_numeric_lead_times_flag_nothing() {
        let a = product("a", dec!(100), "TBC");
        let b = product("b", dec!(100), "On request");

        let table = ComparisonTable::build(&[&a, &b], &[lead_time_feature()]);

        assert_eq!(table.rows[0].best, vec![false, false]);
    }

    #[test]
    fn text_features_are_never_ranked() {
        let a = product("a", dec!(100), "1 week");
        let b = product("b", dec!(150), "1 week");
        let brand = ComparisonFeature {
            key: "brand",
            label: "Brand",
            kind: FeatureKind::Text,
            important: false,
        };

        let table = ComparisonTable::build(&[&a, &b], &[brand]);

        assert_eq!(table.rows[0].best, vec![false, false]);
    }

    // =========================================================================
    // matrix shape tests
    // =========================================================================

    #[test]
    fn row_without_any_values_is_omitted() {
        let a = product("a", dec!(100), "1 week");
        let b = product("b", dec!(150), "1 week");
        let cable = ComparisonFeature {
            key: "specifications.cableLength",
            label: "Cable length (m)",
            kind: FeatureKind::Number,
            important: false,
        };

        let table = ComparisonTable::build(&[&a, &b], &[cable, price_feature()]);

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].label, "List price");
    }

    #[test]
    fn partially_missing_value_renders_dash_and_does_not_compete() {
        let mut a = product("a", dec!(100), "1 week");
        a.specifications.insert(
            "powerRating".to_string(),
            SpecValue::Number(dec!(22)),
        );
        let b = product("b", dec!(150), "1 week");
        let power = ComparisonFeature {
            key: "specifications.powerRating",
            label: "Power rating (kW)",
            kind: FeatureKind::Number,
            important: true,
        };

        let table = ComparisonTable::build(&[&a, &b], &[power]);

        assert_eq!(table.rows[0].cells, vec!["22", "-"]);
        assert_eq!(table.rows[0].best, vec![true, false]);
    }

    #[test]
    fn empty_selection_builds_an_empty_table() {
        let table = ComparisonTable::build(&[], &[price_feature(), lead_time_feature()]);

        assert!(table.columns.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn rows_follow_schedule_order() {
        let a = product("a", dec!(100), "1 week");

        let table = ComparisonTable::build(&[&a], &[lead_time_feature(), price_feature()]);

        let labels: Vec<_> = table.rows.iter().map(|row| row.label).collect();
        assert_eq!(labels, vec!["Lead time", "List price"]);
    }
}
