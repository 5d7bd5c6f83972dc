//! Text-to-structure extraction steps
//!
//! - [`matcher`]: decides which categories a sentence is relevant to
//! - [`clauses`]: derives clause text from a sentence's dependency parse
//! - [`observations`]: accumulates and finalizes per-category text

pub mod clauses;
pub mod matcher;
pub mod observations;

pub use clauses::extract_clauses;
pub use matcher::{match_categories, matches_category};
pub use observations::ObservationAccumulator;
