//! Pipfile parsing and data model for pipconvert.
//!
//! This module provides Rust types for the subset of the Pipfile TOML schema
//! that maps onto a `pyproject.toml`:
//!
//! - `[[source]]` -> `[[tool.uv.index]]`
//! - `[packages]` -> `[project] dependencies`
//! - `[dev-packages]` -> `[tool.uv] dev-dependencies`
//! - `[requires] python_full_version` -> default for `requires-python`

pub mod model;
pub mod url;

pub use self::model::{
    Pipfile, PipfilePackage, PipfilePackageDetail, PipfileRequires, PipfileSource,
};
pub use self::url::strip_credentials;
