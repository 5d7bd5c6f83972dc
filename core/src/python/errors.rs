//! Python exception types for radstruct
//!
//! This module defines Python exception classes that map to Rust error types.

// Suppress warnings from PyO3's create_exception! macro about gil-refs feature
#![allow(unexpected_cfgs)]

use pyo3::{create_exception, exceptions::PyException, prelude::*};

// Base exception
create_exception!(
    radstruct,
    PyRadstructError,
    PyException,
    "Base exception for all radstruct errors"
);

// Specific exceptions
create_exception!(
    radstruct,
    PyAnalyzerError,
    PyRadstructError,
    "Linguistic analyzer could not process the caption"
);

create_exception!(
    radstruct,
    PyInvalidCategoryError,
    PyRadstructError,
    "Unknown finding category name"
);

create_exception!(
    radstruct,
    PyCatalogError,
    PyRadstructError,
    "Malformed synonym catalog"
);

/// Convert Rust RadstructError to appropriate Python exception
pub fn convert_error(err: crate::error::RadstructError) -> PyErr {
    match err {
        crate::error::RadstructError::AnalyzerFailure(msg) => PyAnalyzerError::new_err(msg),
        crate::error::RadstructError::InvalidCategory(msg) => PyInvalidCategoryError::new_err(msg),
        crate::error::RadstructError::Catalog(msg) => PyCatalogError::new_err(msg),
        crate::error::RadstructError::IoError(e) => {
            pyo3::exceptions::PyIOError::new_err(format!("IO error: {}", e))
        }
    }
}
