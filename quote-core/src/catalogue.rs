//! Catalogue browsing: filtering and sorting of materialized products.
//!
//! The catalogue owns nothing global. Callers load products (see the
//! `quote-data` crate) and hand the list in; every query reads from that
//! list alone.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ProductCatalogueItem;

/// Conjunctive filter over catalogue products.
///
/// Every populated criterion must match; an empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub category: Option<String>,
    pub brand: Option<String>,
    /// Case-insensitive substring match over name, brand and category.
    pub search: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub in_stock_only: bool,
}

impl ProductFilter {
    fn matches(
        &self,
        product: &ProductCatalogueItem,
    ) -> bool {
        if let Some(category) = &self.category {
            if !product.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(brand) = &self.brand {
            if !product.brand.eq_ignore_ascii_case(brand) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let haystack = format!(
                "{} {} {}",
                product.name, product.brand, product.category
            )
            .to_lowercase();
            if !haystack.contains(&needle) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.pricing.list_price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.pricing.list_price > max {
                return false;
            }
        }
        if self.in_stock_only && product.inventory.available == 0 {
            return false;
        }
        true
    }
}

/// Sort orders offered by the catalogue browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    PriceAscending,
    PriceDescending,
    Name,
    Brand,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriceAscending => "price-asc",
            Self::PriceDescending => "price-desc",
            Self::Name => "name",
            Self::Brand => "brand",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "price-asc" => Some(Self::PriceAscending),
            "price-desc" => Some(Self::PriceDescending),
            "name" => Some(Self::Name),
            "brand" => Some(Self::Brand),
            _ => None,
        }
    }
}

/// An in-memory product catalogue.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    products: Vec<ProductCatalogueItem>,
}

impl Catalogue {
    pub fn new(products: Vec<ProductCatalogueItem>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn by_id(
        &self,
        id: &str,
    ) -> Option<&ProductCatalogueItem> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products passing `filter`, in catalogue order.
    pub fn get_products(
        &self,
        filter: Option<&ProductFilter>,
    ) -> Vec<&ProductCatalogueItem> {
        self.products
            .iter()
            .filter(|product| filter.is_none_or(|f| f.matches(product)))
            .collect()
    }

    /// Filtered products in `sort` order.
    ///
    /// Name and brand sort case-insensitively; equal keys keep catalogue
    /// order (the sorts are stable).
    pub fn sorted_products(
        &self,
        filter: Option<&ProductFilter>,
        sort: SortKey,
    ) -> Vec<&ProductCatalogueItem> {
        let mut products = self.get_products(filter);
        match sort {
            SortKey::PriceAscending => {
                products.sort_by_key(|p| p.pricing.list_price);
            }
            SortKey::PriceDescending => {
                products.sort_by_key(|p| std::cmp::Reverse(p.pricing.list_price));
            }
            SortKey::Name => {
                products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
            SortKey::Brand => {
                products.sort_by(|a, b| a.brand.to_lowercase().cmp(&b.brand.to_lowercase()));
            }
        }
        products
    }
}
