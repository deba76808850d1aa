//! PyO3 Python bindings for the `bdbt` module.
//!
//! Registers the capabilities of [`bdbt_core::MODULE`] with the interpreter.
//! All behavior lives in `bdbt-core`; this crate only counts the caller's
//! arguments, dispatches, and maps errors onto Python exceptions.
//!
//! ```python
//! import bdbt
//! bdbt.hello()        # 'Hello, World!'
//! bdbt.hello(1)       # TypeError: hello() takes no arguments (1 given)
//! bdbt.goodbye        # AttributeError: module 'bdbt' has no attribute 'goodbye'
//! ```

#![deny(unsafe_code)]

use bdbt_core::{BdbtError, Capability, MODULE};
use pyo3::exceptions::{PyAttributeError, PyRuntimeError, PyTypeError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyTuple};

/// Converts a [`BdbtError`] into the exception CPython raises for the same
/// situation with a native builtin module.
fn to_py_err(err: BdbtError) -> PyErr {
    match err {
        BdbtError::InvalidArgument { .. } => PyTypeError::new_err(err.to_string()),
        BdbtError::NotFound { name } => PyAttributeError::new_err(format!(
            "module '{}' has no attribute '{name}'",
            MODULE.name()
        )),
        BdbtError::DuplicateCapability { .. } => PyRuntimeError::new_err(err.to_string()),
    }
}

/// Number of arguments a Python caller supplied, keyword arguments included.
fn arg_count(args: &Bound<'_, PyTuple>, kwargs: Option<&Bound<'_, PyDict>>) -> usize {
    args.len() + kwargs.map_or(0, |kw| kw.len())
}

/// Print 'Hello, World!'
#[pyfunction]
#[pyo3(signature = (*args, **kwargs), text_signature = "()")]
fn hello(args: &Bound<'_, PyTuple>, kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<String> {
    MODULE
        .call("hello", arg_count(args, kwargs))
        .map_err(to_py_err)
}

/// Module-level attribute fallback (PEP 562).
///
/// Python only consults this after normal lookup fails, so every name that
/// reaches it is reported through the registration table's NotFound path.
#[pyfunction]
#[pyo3(name = "__getattr__")]
fn module_getattr(name: &str) -> PyResult<PyObject> {
    MODULE.capabilities().get(name).map_err(to_py_err)?;
    // Registered but missing from the module dict: it was deleted at runtime.
    Err(to_py_err(BdbtError::NotFound {
        name: name.to_owned(),
    }))
}

/// Adds the Python function backing `cap` to `m`.
///
/// Fails at import time if the core table names a capability this crate has
/// no binding for.
fn bind_capability(m: &Bound<'_, PyModule>, cap: &Capability) -> PyResult<()> {
    match cap.name() {
        "hello" => m.add_function(wrap_pyfunction!(hello, m)?),
        other => Err(PyRuntimeError::new_err(format!(
            "capability '{other}' has no Python binding"
        ))),
    }
}

// The `bdbt` native module. Plain comment: a doc comment here would become
// the module's `__doc__`, which comes from `MODULE.doc()` instead.
#[pymodule]
fn bdbt(m: &Bound<'_, PyModule>) -> PyResult<()> {
    if cfg!(debug_assertions) {
        MODULE.capabilities().validate().map_err(to_py_err)?;
    }
    m.setattr("__doc__", MODULE.doc())?;
    for cap in MODULE.capabilities() {
        bind_capability(m, cap)?;
    }
    // Not `add_function`: the hook must stay out of `__all__`.
    m.setattr("__getattr__", wrap_pyfunction!(module_getattr, m)?)?;
    tracing::debug!(
        module = MODULE.name(),
        capabilities = ?MODULE.capabilities().names().collect::<Vec<_>>(),
        "module initialized"
    );
    Ok(())
}
