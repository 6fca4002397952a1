//! Rendering of Pipfile package specs as PEP 508-style requirement strings.

use crate::pipfile::{PipfilePackage, PipfilePackageDetail};

/// The ref used for git dependencies that don't name one.
const DEFAULT_GIT_REF: &str = "main";

/// Render a single Pipfile package as a requirement string.
///
/// Index pins are not part of the requirement; the caller records them in
/// `[tool.uv.sources]`.
pub fn format_requirement(name: &str, package: &PipfilePackage) -> String {
    match package {
        PipfilePackage::Simple(version) => format_simple_requirement(name, version),
        PipfilePackage::Detailed(detail) => format_detailed_requirement(name, detail),
    }
}

/// Format a simple version requirement like `requests>=1.0` or just `requests`.
fn format_simple_requirement(name: &str, version: &str) -> String {
    if version == "*" {
        name.to_owned()
    } else {
        format!("{name}{version}")
    }
}

/// Format a detailed spec. A git URL takes priority over `version`.
fn format_detailed_requirement(name: &str, detail: &PipfilePackageDetail) -> String {
    let package = if detail.extras.is_empty() {
        name.to_owned()
    } else {
        format!("{name}[{}]", detail.extras.join(","))
    };

    if let Some(ref git) = detail.git {
        let git_ref = detail.git_ref.as_deref().unwrap_or(DEFAULT_GIT_REF);
        return format!("{package} @ {git}@{git_ref}");
    }

    match detail.version {
        Some(ref version) => format!("{package}{version}"),
        None => package,
    }
}
