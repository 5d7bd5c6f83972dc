//! Python wrapper for StructuredReport

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::utils::category_from_name;

/// Per-finding observations for one caption
///
/// Supports `report[name]`, `name in report`, `keys()`, `items()` and
/// `to_dict()`, all in catalog order.
#[pyclass(name = "StructuredReport", module = "radstruct")]
#[derive(Clone)]
pub struct PyStructuredReport {
    pub(crate) inner: crate::types::StructuredReport,
}

#[pymethods]
impl PyStructuredReport {
    /// Text for a category name
    ///
    /// Raises:
    ///     InvalidCategoryError: If the name is not one of the 14 categories
    fn get(&self, category: &str) -> PyResult<String> {
        Ok(self.inner.get(category_from_name(category)?).to_string())
    }

    /// Category names that received extracted text, in catalog order
    fn found(&self) -> Vec<&'static str> {
        self.inner
            .found()
            .into_iter()
            .map(|category| category.name())
            .collect()
    }

    /// Whether every category carries the placeholder
    fn is_empty(&self) -> bool {
        self.inner.has_no_information()
    }

    /// Convert report to an ordered dictionary
    pub fn to_dict(&self, py: Python) -> PyResult<Py<PyDict>> {
        let dict = PyDict::new_bound(py);
        for (category, text) in self.inner.iter() {
            dict.set_item(category.name(), text)?;
        }
        Ok(dict.unbind())
    }

    /// Convert report to a JSON object string
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner)
            .map_err(|e| super::errors::PyRadstructError::new_err(e.to_string()))
    }

    /// Category names in catalog order
    fn keys(&self) -> Vec<&'static str> {
        self.inner
            .iter()
            .map(|(category, _)| category.name())
            .collect()
    }

    /// (category name, text) pairs in catalog order
    fn items(&self) -> Vec<(&'static str, String)> {
        self.inner.to_pairs()
    }

    fn __contains__(&self, category: &str) -> bool {
        crate::types::Category::from_str(category).is_some()
    }

    fn __getitem__(&self, category: &str) -> PyResult<String> {
        self.get(category)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!("StructuredReport(found={:?})", self.found())
    }

    fn __str__(&self) -> String {
        format!("{}", crate::cli::report::TextReport::new(&self.inner))
    }
}

impl From<crate::types::StructuredReport> for PyStructuredReport {
    fn from(inner: crate::types::StructuredReport) -> Self {
        Self { inner }
    }
}
