//! Mapping from a parsed [`Pipfile`] to an in-memory [`PyProject`].

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::convert::ProjectIdentity;
use crate::convert::requirement::format_requirement;
use crate::error::ConvertError;
use crate::pipfile::{Pipfile, PipfilePackage, PipfileSource, strip_credentials};

/// The generated `pyproject.toml`.
///
/// Field order is serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PyProject {
    pub project: Project,
    pub tool: Tool,
}

/// The `[project]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Project {
    pub name: String,
    pub version: String,
    pub description: String,
    /// Always an exact pin, e.g. `==3.10.15`.
    pub requires_python: String,
    pub dependencies: Vec<String>,
}

/// The `[tool]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub uv: ToolUv,
}

/// The `[tool.uv]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ToolUv {
    pub dev_dependencies: Vec<String>,

    /// Per-package index pins, keyed by the package name as written in the Pipfile.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub sources: IndexMap<String, IndexSource>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub index: Vec<Index>,
}

/// A `[tool.uv.sources]` entry pinning a package to a named index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSource {
    pub index: String,
}

/// A `[[tool.uv.index]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    pub name: String,
    pub url: String,
}

impl PyProject {
    /// Build the target manifest from a Pipfile and the project identity.
    pub fn from_pipfile(
        pipfile: &Pipfile,
        identity: &ProjectIdentity,
    ) -> Result<Self, ConvertError> {
        let index = convert_sources(&pipfile.source)?;

        // Index pins are collected across both sections and normalized last.
        let mut pinned = IndexMap::new();
        let dependencies = convert_packages(&pipfile.packages, &mut pinned);
        let dev_dependencies = convert_packages(&pipfile.dev_packages, &mut pinned);

        let sources = pinned
            .into_iter()
            .map(|(package, index)| {
                let source = IndexSource {
                    index: normalize_index_name(index),
                };
                (package.to_owned(), source)
            })
            .collect();

        Ok(Self {
            project: Project {
                name: identity.name.clone(),
                version: identity.version.clone(),
                description: identity.description.clone(),
                requires_python: format!("=={}", identity.python_version),
                dependencies,
            },
            tool: Tool {
                uv: ToolUv {
                    dev_dependencies,
                    sources,
                    index,
                },
            },
        })
    }
}

/// uv index names may not contain hyphens.
pub fn normalize_index_name(name: &str) -> String {
    name.replace('-', "_")
}

/// Convert `[[source]]` entries to `[[tool.uv.index]]` entries, in order.
fn convert_sources(sources: &[PipfileSource]) -> Result<Vec<Index>, ConvertError> {
    let mut seen = FxHashSet::default();
    let mut indexes = Vec::with_capacity(sources.len());

    for source in sources {
        let name = normalize_index_name(&source.name);
        if !seen.insert(name.clone()) {
            return Err(ConvertError::DuplicateIndex(name));
        }
        let url = strip_credentials(&source.url).map_err(|err| ConvertError::InvalidUrl {
            name: source.name.clone(),
            source: err,
        })?;
        debug!("Mapped source `{}` to index `{name}`", source.name);
        indexes.push(Index { name, url });
    }

    Ok(indexes)
}

/// Render a package section, recording index pins into `pinned`.
///
/// A package pinned in both sections keeps its latest pin.
fn convert_packages<'a>(
    packages: &'a IndexMap<String, PipfilePackage>,
    pinned: &mut IndexMap<&'a str, &'a str>,
) -> Vec<String> {
    packages
        .iter()
        .map(|(name, package)| {
            if let Some(index) = package.index() {
                pinned.insert(name.as_str(), index);
            }
            let requirement = format_requirement(name, package);
            debug!("Mapped `{name}` to `{requirement}`");
            requirement
        })
        .collect()
}
