use crate::analysis::{LinguisticAnalyzer, ParsedSentence, RuleBasedAnalyzer};
use crate::error::Result;
use crate::extraction::{extract_clauses, match_categories, ObservationAccumulator};
use crate::types::{StructuredReport, SynonymSet};
use log::{debug, warn};
use rayon::prelude::*;
use std::sync::Arc;

/// Main entry point for turning caption text into a structured report
///
/// Holds a linguistic analyzer and a shared, read-only label catalog. It
/// carries no per-document state, so one structurer can serve many
/// documents concurrently.
///
/// # Example
///
/// ```
/// use radstruct_core::{Category, ReportStructurer, NO_RELEVANT_INFORMATION};
///
/// let structurer = ReportStructurer::default();
/// let report = structurer.structure("The heart size is normal. No pneumothorax is seen.");
///
/// assert_eq!(report.get(Category::Cardiomegaly), "The heart size is normal .");
/// assert_eq!(report.get(Category::Pneumothorax), "No pneumothorax is seen .");
/// assert_eq!(report.get(Category::Fracture), NO_RELEVANT_INFORMATION);
/// ```
#[derive(Debug, Clone)]
pub struct ReportStructurer<A = RuleBasedAnalyzer> {
    analyzer: A,
    synonyms: Arc<SynonymSet>,
}

impl Default for ReportStructurer<RuleBasedAnalyzer> {
    fn default() -> Self {
        Self::new(RuleBasedAnalyzer::default())
    }
}

impl<A: LinguisticAnalyzer> ReportStructurer<A> {
    /// Creates a structurer using the built-in label catalog
    pub fn new(analyzer: A) -> Self {
        Self::with_synonyms(analyzer, Arc::new(SynonymSet::default()))
    }

    /// Creates a structurer sharing an existing label catalog
    pub fn with_synonyms(analyzer: A, synonyms: Arc<SynonymSet>) -> Self {
        Self { analyzer, synonyms }
    }

    /// Returns the label catalog
    pub fn synonyms(&self) -> &Arc<SynonymSet> {
        &self.synonyms
    }

    /// Returns the linguistic analyzer
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Structures a document, reporting analyzer failures as errors
    ///
    /// # Errors
    ///
    /// Returns [`RadstructError::AnalyzerFailure`](crate::RadstructError::AnalyzerFailure)
    /// if the analyzer cannot process `text`. No partial report is produced
    /// in that case.
    pub fn try_structure(&self, text: &str) -> Result<StructuredReport> {
        let sentences = self.analyzer.analyze(text)?;
        Ok(structure_sentences(&sentences, &self.synonyms))
    }

    /// Structures a document, never failing
    ///
    /// If the analyzer fails, every category carries the placeholder.
    pub fn structure(&self, text: &str) -> StructuredReport {
        match self.try_structure(text) {
            Ok(report) => report,
            Err(e) => {
                warn!("Returning empty report: {}", e);
                StructuredReport::empty()
            }
        }
    }

    /// Structures independent documents in parallel
    ///
    /// Reports are returned in input order.
    pub fn structure_all<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<StructuredReport> {
        texts
            .par_iter()
            .map(|text| self.structure(text.as_ref()))
            .collect()
    }
}

/// Builds a report from already parsed sentences
///
/// Sentences are processed in order. For each category a sentence matches,
/// its ROOT clauses (or the whole sentence when it has no ROOT) are appended
/// to that category's text.
pub fn structure_sentences(sentences: &[ParsedSentence], synonyms: &SynonymSet) -> StructuredReport {
    let mut observations = ObservationAccumulator::new();

    for sentence in sentences {
        let matched = match_categories(&sentence.text().to_lowercase(), synonyms);
        if matched.is_empty() {
            continue;
        }

        debug!("Sentence {:?} matched {:?}", sentence.text(), matched);
        let clauses = extract_clauses(sentence);
        for category in matched {
            observations.record(category, sentence.text(), &clauses);
        }
    }

    observations.finish()
}
