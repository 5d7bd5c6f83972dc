//! Python bindings for radstruct
//!
//! This module provides PyO3 bindings enabling Python callers (such as a
//! captioning front-end) to structure generated captions.

// Suppress false positive warnings from PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod errors;
mod report;
mod structurer;
mod utils;

pub use errors::*;
pub use report::*;
pub use structurer::*;

/// Display names of all categories, in catalog order
#[pyfunction]
#[pyo3(name = "categories")]
fn py_categories() -> Vec<&'static str> {
    crate::types::ALL_CATEGORIES
        .iter()
        .map(|category| category.name())
        .collect()
}

/// Python module definition
#[pymodule]
fn _radstruct(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Register exception classes
    m.add(
        "RadstructError",
        py.get_type_bound::<errors::PyRadstructError>(),
    )?;
    m.add(
        "AnalyzerError",
        py.get_type_bound::<errors::PyAnalyzerError>(),
    )?;
    m.add(
        "InvalidCategoryError",
        py.get_type_bound::<errors::PyInvalidCategoryError>(),
    )?;
    m.add("CatalogError", py.get_type_bound::<errors::PyCatalogError>())?;

    // Register data structure classes
    m.add_class::<PyStructuredReport>()?;

    // Register main API
    m.add_class::<PyReportStructurer>()?;

    // Register functions
    m.add_function(wrap_pyfunction!(py_categories, m)?)?;

    // Add constants
    m.add(
        "NO_RELEVANT_INFORMATION",
        crate::types::NO_RELEVANT_INFORMATION,
    )?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
