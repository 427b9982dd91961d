/// Maximum number of products in one comparison.
pub const MAX_COMPARE_PRODUCTS: usize = 4;

/// How a feature's values are rendered and ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Text,
    Number,
    Currency,
    Boolean,
    Array,
    Rating,
    /// Supplier lead time ("2-3 weeks"). Rendered as text, ranked by the
    /// leading number of the string.
    LeadTime,
}

/// One row of the comparison schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonFeature {
    /// Dotted path into a product, using the catalogue's camelCase field
    /// names (e.g. `"pricing.listPrice"`, `"specifications.powerRating"`).
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FeatureKind,
    /// Important rows are the ones a quote reviewer scans first.
    pub important: bool,
}

/// The standard EV-charger comparison schedule.
pub fn standard_features() -> &'static [ComparisonFeature] {
    const FEATURES: &[ComparisonFeature] = &[
        ComparisonFeature {
            key: "brand",
            label: "Brand",
            kind: FeatureKind::Text,
            important: false,
        },
        ComparisonFeature {
            key: "pricing.listPrice",
            label: "List price",
            kind: FeatureKind::Currency,
            important: true,
        },
        ComparisonFeature {
            key: "specifications.powerRating",
            label: "Power rating (kW)",
            kind: FeatureKind::Number,
            important: true,
        },
        ComparisonFeature {
            key: "specifications.connectorType",
            label: "Connector type",
            kind: FeatureKind::Text,
            important: true,
        },
        ComparisonFeature {
            key: "specifications.phases",
            label: "Phases",
            kind: FeatureKind::Number,
            important: false,
        },
        ComparisonFeature {
            key: "specifications.weatherRated",
            label: "Weather rated",
            kind: FeatureKind::Boolean,
            important: false,
        },
        ComparisonFeature {
            key: "specifications.certifications",
            label: "Certifications",
            kind: FeatureKind::Array,
            important: false,
        },
        ComparisonFeature {
            key: "specifications.rating",
            label: "Installer rating",
            kind: FeatureKind::Rating,
            important: false,
        },
        ComparisonFeature {
            key: "inventory.available",
            label: "Units in stock",
            kind: FeatureKind::Number,
            important: false,
        },
        ComparisonFeature {
            key: "inventory.leadTime",
            label: "Lead time",
            kind: FeatureKind::LeadTime,
            important: true,
        },
    ];
    FEATURES
}
