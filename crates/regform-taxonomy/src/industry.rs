//! Industry category taxonomy.
//!
//! The fixed list of industry classifications a registration form offers.
//! Ten entries, declaration order preserved, immutable for the life of the
//! process. The list is deliberately unsorted and unlocalized: the order
//! below is the order the selection control presents.

use crate::types::IndustryCategoryOption;

/// Canonical industry category names, in display order.
pub const INDUSTRY_CATEGORY_NAMES: [&str; 10] = [
    "Agriculture & Agribusiness",
    "Financial Services & FinTech",
    "Healthcare & MedTech",
    "Education & EdTech",
    "Renewable Energy & CleanTech",
    "Manufacturing & Processing",
    "Retail & E-commerce",
    "Transportation & Logistics",
    "Tourism & Hospitality",
    "Creative Industries & Media",
];

/// The industry categories offered by the registration form.
///
/// Returns exactly ten `{value, label}` records in declaration order, with
/// `value` and `label` carrying the same text. The operation is total: no
/// inputs, no I/O, no failure path. Each call builds a fresh vector from
/// the constant name table, so callers hold owned data and cannot disturb
/// the shared constant.
pub fn industry_categories() -> Vec<IndustryCategoryOption> {
    INDUSTRY_CATEGORY_NAMES
        .iter()
        .map(|name| IndustryCategoryOption::from_name(name))
        .collect()
}

/// Whether `value` names one of the canonical industry categories.
///
/// Matching is exact (case and punctuation included), since `value` is the
/// canonical identifier a form submits back.
pub fn is_industry_category(value: &str) -> bool {
    INDUSTRY_CATEGORY_NAMES.contains(&value)
}
