use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use quote_core::catalogue::{Catalogue, ProductFilter, SortKey};
use quote_core::comparison::{ComparisonSelection, standard_features};
use quote_data::CatalogueLoader;

/// Inspect a ChargeSource catalogue export.
///
/// The CSV file should have the following columns:
/// - id, name, brand, category: product identity
/// - list_price, recommended_retail: pricing in dollars
/// - available: units on hand
/// - lead_time: supplier-quoted delivery text (e.g. "2-3 weeks")
/// - any spec:-prefixed column (e.g. spec:powerRating) lands in the
///   product's specifications map
#[derive(Parser, Debug)]
#[command(name = "catalogue-tool")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the catalogue CSV file
    #[arg(short, long)]
    file: PathBuf,

    /// Only list products in this category
    #[arg(long)]
    category: Option<String>,

    /// Only list products from this brand
    #[arg(long)]
    brand: Option<String>,

    /// Case-insensitive search over name, brand and category
    #[arg(long)]
    search: Option<String>,

    /// Sort order: price-asc, price-desc, name or brand
    #[arg(long)]
    sort: Option<String>,

    /// Compare up to four products by id instead of listing
    #[arg(long, value_delimiter = ',')]
    compare: Option<Vec<String>>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let products = CatalogueLoader::parse(file)
        .with_context(|| format!("Failed to parse catalogue: {}", args.file.display()))?;

    println!(
        "Loaded {} products from {}",
        products.len(),
        args.file.display()
    );

    let catalogue = Catalogue::new(products);

    if let Some(ids) = &args.compare {
        return print_comparison(&catalogue, ids);
    }

    let filter = ProductFilter {
        category: args.category,
        brand: args.brand,
        search: args.search,
        ..ProductFilter::default()
    };

    let sort = match args.sort.as_deref() {
        Some(raw) => Some(SortKey::parse(raw).with_context(|| format!("Unknown sort order: {raw}"))?),
        None => None,
    };

    let listed = match sort {
        Some(sort) => catalogue.sorted_products(Some(&filter), sort),
        None => catalogue.get_products(Some(&filter)),
    };

    for product in listed {
        println!(
            "{:<14} {:<32} {:<12} ${:>10}  ({} in stock, {})",
            product.id,
            product.name,
            product.brand,
            product.pricing.list_price,
            product.inventory.available,
            product.inventory.lead_time,
        );
    }

    Ok(())
}

fn print_comparison(
    catalogue: &Catalogue,
    ids: &[String],
) -> Result<()> {
    let mut selection = ComparisonSelection::new();
    for id in ids {
        let product = catalogue
            .by_id(id)
            .with_context(|| format!("No product with id: {id}"))?;
        selection
            .try_add(product.clone())
            .with_context(|| format!("Cannot add '{id}' to the comparison"))?;
    }

    let table = selection.table(standard_features());

    print!("{:<24}", "");
    for name in &table.columns {
        print!(" {:<28}", name);
    }
    println!();

    for row in &table.rows {
        print!("{:<24}", row.label);
        for (cell, best) in row.cells.iter().zip(&row.best) {
            let marker = if *best { " *" } else { "" };
            print!(" {:<28}", format!("{cell}{marker}"));
        }
        println!();
    }

    println!();
    println!("* best value");
    Ok(())
}
