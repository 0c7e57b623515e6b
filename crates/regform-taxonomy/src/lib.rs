//! # regform-taxonomy — Form Selection Taxonomies
//!
//! Fixed, process-wide taxonomies served to form-rendering clients. The
//! crate currently carries one dataset: the canonical industry category
//! list a registration form offers as a selection control.
//!
//! ## Module Structure
//!
//! - [`types`]: taxonomy record types ([`IndustryCategoryOption`])
//! - [`industry`]: the industry category dataset and its accessor
//!
//! ## Crate Policy
//!
//! - Datasets are declared as `const` tables and mapped to owned records on
//!   access, so there is no shared mutable storage and concurrent readers
//!   need no coordination.
//! - No I/O anywhere: every operation is total, synchronous, and in-memory.

pub mod industry;
pub mod types;

// Re-export the public surface at the crate root so callers can stay on
// `regform_taxonomy::industry_categories` regardless of module layout.
pub use industry::{industry_categories, is_industry_category, INDUSTRY_CATEGORY_NAMES};
pub use types::IndustryCategoryOption;
