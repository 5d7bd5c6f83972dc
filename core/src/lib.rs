pub mod analysis;
pub mod api;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

pub use analysis::{DependencyRole, LinguisticAnalyzer, ParsedSentence, RuleBasedAnalyzer, Token};
pub use api::{structure_sentences, ReportStructurer};
pub use cli::report::TextReport;
pub use error::{RadstructError, Result};
pub use types::*;
