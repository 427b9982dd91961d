//! Field extraction and display formatting for comparison cells.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::calculations::common::round_half_up;
use crate::models::{ProductCatalogueItem, SpecValue};

use super::feature::FeatureKind;

/// A value extracted from a product for one comparison cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(Decimal),
    Bool(bool),
    List(Vec<String>),
}

impl FieldValue {
    /// Numeric view of the value, if it has one.
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// True when there is nothing to display (renders as "-").
    fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Number(_) | Self::Bool(_) => false,
        }
    }
}

impl From<&SpecValue> for FieldValue {
    fn from(value: &SpecValue) -> Self {
        match value {
            SpecValue::Number(n) => Self::Number(*n),
            SpecValue::Bool(b) => Self::Bool(*b),
            SpecValue::List(items) => Self::List(items.clone()),
            SpecValue::Text(s) => Self::Text(s.clone()),
        }
    }
}

/// Resolves a dotted path against a product.
///
/// Path segments use the catalogue's camelCase field names
/// (`"pricing.listPrice"`, `"specifications.powerRating"`). Any unknown or
/// missing segment resolves to `None`; lookup never panics.
pub fn field_value(
    product: &ProductCatalogueItem,
    path: &str,
) -> Option<FieldValue> {
    let (head, rest) = match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    };

    match (head, rest) {
        ("id", None) => Some(FieldValue::Text(product.id.clone())),
        ("name", None) => Some(FieldValue::Text(product.name.clone())),
        ("brand", None) => Some(FieldValue::Text(product.brand.clone())),
        ("category", None) => Some(FieldValue::Text(product.category.clone())),
        ("pricing", Some("listPrice")) => Some(FieldValue::Number(product.pricing.list_price)),
        ("pricing", Some("recommendedRetail")) => {
            Some(FieldValue::Number(product.pricing.recommended_retail))
        }
        ("inventory", Some("available")) => {
            Some(FieldValue::Number(Decimal::from(product.inventory.available)))
        }
        ("inventory", Some("leadTime")) => {
            Some(FieldValue::Text(product.inventory.lead_time.clone()))
        }
        ("specifications", Some(key)) => product.specifications.get(key).map(FieldValue::from),
        _ => None,
    }
}

/// Formats a cell for display.
///
/// Missing and blank values render as "-" regardless of kind. A value whose
/// shape does not match the feature kind falls back to a plain rendering
/// rather than failing the row.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::comparison::{FeatureKind, FieldValue, format_value};
///
/// let price = FieldValue::Number(dec!(1500));
/// assert_eq!(format_value(Some(&price), FeatureKind::Currency), "$1,500");
/// assert_eq!(format_value(None, FeatureKind::Currency), "-");
/// ```
pub fn format_value(
    value: Option<&FieldValue>,
    kind: FeatureKind,
) -> String {
    let Some(value) = value else {
        return "-".to_string();
    };
    if value.is_blank() {
        return "-".to_string();
    }

    match (kind, value) {
        (FeatureKind::Currency, FieldValue::Number(n)) => format!("${}", format_thousands(*n)),
        (FeatureKind::Rating, FieldValue::Number(n)) => format_rating(*n),
        (_, FieldValue::Text(s)) => s.clone(),
        (_, FieldValue::Number(n)) => format_thousands(*n),
        (_, FieldValue::Bool(b)) => if *b { "Yes" } else { "No" }.to_string(),
        (_, FieldValue::List(items)) => items.join(", "),
    }
}

/// Thousands-separated rendering: `1500` → `"1,500"`, `1234.5` → `"1,234.50"`.
/// Whole amounts drop the cents.
fn format_thousands(value: Decimal) -> String {
    // Work in integral cents so the output is independent of the input scale.
    let total_cents = (round_half_up(value) * Decimal::ONE_HUNDRED)
        .to_i128()
        .unwrap_or(0);
    let negative = total_cents < 0;
    let magnitude = total_cents.unsigned_abs();
    let whole = magnitude / 100;
    let cents = magnitude % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if cents != 0 {
        out.push_str(&format!(".{cents:02}"));
    }
    out
}

/// Five-star rendering: filled stars for the whole part, hollow for the rest.
fn format_rating(value: Decimal) -> String {
    let filled = value.trunc().to_u32().unwrap_or(0).min(5) as usize;
    let mut stars = String::with_capacity(5);
    for _ in 0..filled {
        stars.push('★');
    }
    for _ in filled..5 {
        stars.push('☆');
    }
    stars
}
