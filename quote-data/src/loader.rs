use std::collections::{BTreeMap, HashSet};
use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use quote_core::models::{ProductCatalogueItem, ProductInventory, ProductPricing, SpecValue};

/// Errors that can occur when loading catalogue data.
#[derive(Debug, Error)]
pub enum CatalogueLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("duplicate product id '{0}'")]
    DuplicateId(String),
}

impl From<csv::Error> for CatalogueLoaderError {
    fn from(err: csv::Error) -> Self {
        CatalogueLoaderError::CsvParse(err.to_string())
    }
}

/// Header prefix marking a CSV column as a specifications entry.
const SPEC_PREFIX: &str = "spec:";

/// The fixed columns of a catalogue CSV row.
///
/// The CSV format:
/// - `id`, `name`, `brand`, `category`: product identity
/// - `list_price`, `recommended_retail`: pricing in dollars
/// - `available`: units on hand
/// - `lead_time`: supplier-quoted delivery text (e.g. "2-3 weeks")
///
/// Any additional column whose header starts with `spec:` (e.g.
/// `spec:powerRating`) contributes an entry to the product's specifications
/// map; empty cells are omitted.
#[derive(Debug, Clone, Deserialize, PartialEq)]
struct CatalogueRecord {
    id: String,
    name: String,
    brand: String,
    category: String,
    list_price: Decimal,
    recommended_retail: Decimal,
    available: u32,
    lead_time: String,
}

/// Loader for product catalogue CSV files.
///
/// Reads CSV data exported from the supplier catalogue into the in-memory
/// [`ProductCatalogueItem`] list that the catalogue and comparison modules
/// work against.
pub struct CatalogueLoader;

impl CatalogueLoader {
    /// Parses catalogue products from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ProductCatalogueItem>, CatalogueLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        // Column index → specification key, for every spec: column.
        let spec_columns: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .filter_map(|(idx, header)| {
                header
                    .strip_prefix(SPEC_PREFIX)
                    .map(|key| (idx, key.to_string()))
            })
            .collect();

        let mut products = Vec::new();
        let mut seen = HashSet::new();

        for result in csv_reader.records() {
            let record = result?;
            let fixed: CatalogueRecord = record.deserialize(Some(&headers))?;

            if !seen.insert(fixed.id.clone()) {
                return Err(CatalogueLoaderError::DuplicateId(fixed.id));
            }

            let mut specifications = BTreeMap::new();
            for (idx, key) in &spec_columns {
                let Some(cell) = record.get(*idx) else {
                    continue;
                };
                if cell.trim().is_empty() {
                    continue;
                }
                specifications.insert(key.clone(), parse_spec_value(cell));
            }

            products.push(ProductCatalogueItem {
                id: fixed.id,
                name: fixed.name,
                brand: fixed.brand,
                category: fixed.category,
                specifications,
                pricing: ProductPricing {
                    list_price: fixed.list_price,
                    recommended_retail: fixed.recommended_retail,
                },
                inventory: ProductInventory {
                    available: fixed.available,
                    lead_time: fixed.lead_time,
                },
            });
        }

        Ok(products)
    }
}

/// Coerces a CSV cell to the narrowest specification value.
///
/// `|` separates list entries; `true`/`false` become booleans; anything that
/// parses as a number is numeric; the rest stays text.
fn parse_spec_value(cell: &str) -> SpecValue {
    let trimmed = cell.trim();
    if trimmed.contains('|') {
        return SpecValue::List(
            trimmed
                .split('|')
                .map(|entry| entry.trim().to_string())
                .filter(|entry| !entry.is_empty())
                .collect(),
        );
    }
    match trimmed {
        "true" => return SpecValue::Bool(true),
        "false" => return SpecValue::Bool(false),
        _ => {}
    }
    if let Ok(number) = trimmed.parse::<Decimal>() {
        return SpecValue::Number(number);
    }
    SpecValue::Text(trimmed.to_string())
}
