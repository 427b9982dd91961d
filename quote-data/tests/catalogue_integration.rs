//! Integration tests exercising the full load → browse → compare pipeline.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use quote_core::catalogue::{Catalogue, ProductFilter, SortKey};
use quote_core::comparison::{ComparisonSelection, standard_features};
use quote_core::models::SpecValue;
use quote_data::CatalogueLoader;

const TEST_CATALOGUE: &str = include_str!("../test-data/ev_catalogue.csv");

fn load_catalogue() -> Catalogue {
    let products =
        CatalogueLoader::parse(TEST_CATALOGUE.as_bytes()).expect("Failed to parse catalogue");
    Catalogue::new(products)
}

#[test]
fn test_load_full_catalogue() {
    let catalogue = load_catalogue();

    assert_eq!(catalogue.len(), 7);

    let zappi = catalogue.by_id("CHG-AC07-01").expect("Zappi should load");
    assert_eq!(zappi.brand, "myenergi");
    assert_eq!(zappi.pricing.list_price, dec!(1650.00));
    assert_eq!(
        zappi.specifications.get("powerRating"),
        Some(&SpecValue::Number(dec!(7.4)))
    );
    assert_eq!(
        zappi.specifications.get("certifications"),
        Some(&SpecValue::List(vec![
            "RCM".to_string(),
            "IEC 61851".to_string()
        ]))
    );
}

#[test]
fn test_filter_ac_chargers_in_stock() {
    let catalogue = load_catalogue();
    let filter = ProductFilter {
        category: Some("AC Chargers".to_string()),
        in_stock_only: true,
        ..ProductFilter::default()
    };

    let products = catalogue.get_products(Some(&filter));

    let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["CHG-AC07-01", "CHG-AC22-01", "CHG-AC22-02"]);
}

#[test]
fn test_sort_by_price_within_filter() {
    let catalogue = load_catalogue();
    let filter = ProductFilter {
        category: Some("DC Chargers".to_string()),
        ..ProductFilter::default()
    };

    let products = catalogue.sorted_products(Some(&filter), SortKey::PriceDescending);

    let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["CHG-DC50-01", "CHG-DC24-01"]);
}

#[test]
fn test_compare_ac_chargers_end_to_end() {
    let catalogue = load_catalogue();
    let mut selection = ComparisonSelection::new();
    for id in ["CHG-AC07-01", "CHG-AC22-01", "CHG-AC22-02"] {
        let product = catalogue.by_id(id).expect("product should exist").clone();
        selection.try_add(product).expect("selection has room");
    }

    let table = selection.table(standard_features());

    assert_eq!(
        table.columns,
        vec!["Zappi V2.1 7kW", "Pulsar Max 22", "EVBox Liva 22"]
    );

    let price = table
        .rows
        .iter()
        .find(|row| row.label == "List price")
        .expect("price row present");
    assert_eq!(price.cells, vec!["$1,650", "$1,850", "$2,190"]);
    assert_eq!(price.best, vec![true, false, false]);

    // The two 22 kW units tie on power; the Zappi's 7.4 kW is the minimum.
    let power = table
        .rows
        .iter()
        .find(|row| row.label == "Power rating (kW)")
        .expect("power row present");
    assert_eq!(power.cells, vec!["7.40", "22", "22"]);
    assert_eq!(power.best, vec![true, false, false]);

    // "1 week" beats "1-2 weeks" only on tie-breaking digits: both rank 1.
    let lead = table
        .rows
        .iter()
        .find(|row| row.label == "Lead time")
        .expect("lead time row present");
    assert_eq!(lead.cells, vec!["1 week", "1-2 weeks", "2-3 weeks"]);
    assert_eq!(lead.best, vec![true, true, false]);
}

#[test]
fn test_compare_row_omitted_when_no_product_has_values() {
    let catalogue = load_catalogue();
    let mut selection = ComparisonSelection::new();
    selection
        .try_add(catalogue.by_id("MNT-PED-01").expect("pedestal").clone())
        .expect("selection has room");

    let table = selection.table(standard_features());

    // The pedestal has no specification entries at all, so every
    // specification-backed row disappears.
    let labels: Vec<_> = table.rows.iter().map(|row| row.label).collect();
    assert_eq!(
        labels,
        vec!["Brand", "List price", "Units in stock", "Lead time"]
    );
}

#[test]
fn test_compare_rejects_fifth_product() {
    let catalogue = load_catalogue();
    let mut selection = ComparisonSelection::new();
    for id in [
        "CHG-AC07-01",
        "CHG-AC22-01",
        "CHG-AC22-02",
        "CHG-DC24-01",
    ] {
        selection
            .try_add(catalogue.by_id(id).expect("product should exist").clone())
            .expect("selection has room");
    }

    let result = selection.try_add(catalogue.by_id("CHG-DC50-01").expect("tritium").clone());

    assert!(result.is_err());
    assert_eq!(selection.len(), 4);
}
