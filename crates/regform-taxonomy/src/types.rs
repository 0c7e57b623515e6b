//! Taxonomy record types.
//!
//! The records here are what a form-rendering client consumes: each
//! selectable entry is a `value`/`label` pair, where `value` is submitted
//! with the form and `label` is shown to the applicant.

use serde::{Deserialize, Serialize};

/// One selectable industry classification.
///
/// The current dataset uses identical `value` and `label` text. The two
/// fields stay separate so that machine-readable identifiers (e.g. slugs)
/// can diverge from display text later without a contract change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndustryCategoryOption {
    /// Canonical identifier submitted with the form.
    pub value: String,
    /// Display text shown in the selection control.
    pub label: String,
}

impl IndustryCategoryOption {
    /// Build an option from distinct identifier and display text.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Build an option whose `value` doubles as its `label`.
    pub fn from_name(name: &str) -> Self {
        Self::new(name, name)
    }
}
