//! Python wrapper for ReportStructurer

use pyo3::prelude::*;
use std::sync::Arc;

use super::errors::convert_error;
use super::report::PyStructuredReport;
use super::utils::path_to_pathbuf;
use crate::analysis::{RuleBasedAnalyzer, DEFAULT_MAX_CHARS};
use crate::api::ReportStructurer;
use crate::types::SynonymSet;

/// Turns caption text into structured per-finding observations
///
/// Example:
///     >>> from radstruct import ReportStructurer
///     >>> report = ReportStructurer().structure("No pneumothorax is seen.")
///     >>> report["Pneumothorax"]
///     'No pneumothorax is seen .'
#[pyclass(name = "ReportStructurer", module = "radstruct")]
pub struct PyReportStructurer {
    inner: ReportStructurer<RuleBasedAnalyzer>,
}

#[pymethods]
impl PyReportStructurer {
    /// Create a structurer
    ///
    /// Args:
    ///     max_chars: Longest accepted caption, in characters
    ///     synonyms: Optional JSON file overriding category synonym lists
    ///
    /// Raises:
    ///     CatalogError: If the synonym file is malformed
    ///     InvalidCategoryError: If the synonym file names an unknown category
    #[new]
    #[pyo3(signature = (max_chars=DEFAULT_MAX_CHARS, synonyms=None))]
    fn new(max_chars: usize, synonyms: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let catalog = match synonyms {
            Some(path) => {
                SynonymSet::from_json_file(&path_to_pathbuf(path)?).map_err(convert_error)?
            }
            None => SynonymSet::default(),
        };

        let analyzer = RuleBasedAnalyzer::default().with_max_chars(max_chars);
        Ok(Self {
            inner: ReportStructurer::with_synonyms(analyzer, Arc::new(catalog)),
        })
    }

    /// Structure a caption; analyzer failures yield an all-placeholder report
    fn structure(&self, py: Python, text: &str) -> PyStructuredReport {
        py.allow_threads(|| self.inner.structure(text)).into()
    }

    /// Structure a caption, raising on analyzer failure
    ///
    /// Raises:
    ///     AnalyzerError: If the caption cannot be analyzed
    fn try_structure(&self, py: Python, text: &str) -> PyResult<PyStructuredReport> {
        py.allow_threads(|| self.inner.try_structure(text))
            .map(PyStructuredReport::from)
            .map_err(convert_error)
    }

    /// Structure many captions in parallel, preserving input order
    fn structure_all(&self, py: Python, texts: Vec<String>) -> Vec<PyStructuredReport> {
        py.allow_threads(|| self.inner.structure_all(&texts))
            .into_iter()
            .map(PyStructuredReport::from)
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "ReportStructurer(max_chars={}, synonyms={})",
            self.inner.analyzer().max_chars(),
            self.inner.synonyms().len()
        )
    }
}
