//! Core type definitions for structured report extraction
//!
//! This module provides the fundamental types used throughout the radstruct library:
//! - [`Category`]: The 14 clinical finding categories, in catalog order
//! - [`SynonymSet`]: Label catalog with per-category synonym phrases
//! - [`StructuredReport`]: Finalized per-category observations for one document

mod category;
mod report;
mod synonyms;

pub use category::{Category, ALL_CATEGORIES};
pub use report::{StructuredReport, NO_RELEVANT_INFORMATION};
pub use synonyms::SynonymSet;
