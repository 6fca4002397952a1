//! Data model types for Pipfile deserialization.
//!
//! These structs mirror the parts of the Pipfile TOML schema that survive the
//! conversion. Packages can be specified as either a simple version string
//! (`"*"`, `">=1.0"`) or a table with extended fields
//! (`{version = ">=1.0", extras = ["security"]}`).

use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::error::ConvertError;

/// Top-level Pipfile structure.
///
/// Package maps keep the order in which entries appear in the document.
#[derive(Debug, Default)]
pub struct Pipfile {
    /// Package index sources.
    pub source: Vec<PipfileSource>,

    /// Production dependencies.
    pub packages: IndexMap<String, PipfilePackage>,

    /// Development dependencies.
    pub dev_packages: IndexMap<String, PipfilePackage>,

    /// Python version requirements.
    pub requires: Option<PipfileRequires>,
}

impl Pipfile {
    /// Parse a Pipfile from the given path.
    pub fn from_path(path: &Path) -> Result<Self, ConvertError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConvertError::InputNotFound(path.to_path_buf()));
            }
            Err(err) => return Err(ConvertError::Io(err)),
        };
        debug!("Parsing Pipfile at `{}`", path.display());
        content.parse()
    }

    /// The Python version declared under `[requires]`, if any.
    ///
    /// Only `python_full_version` is considered, since `requires-python` is
    /// rendered as an exact pin.
    pub fn python_full_version(&self) -> Option<&str> {
        self.requires
            .as_ref()
            .and_then(|requires| requires.python_full_version.as_deref())
    }
}

impl FromStr for Pipfile {
    type Err = ConvertError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let raw: RawPipfile = toml::from_str(content).map_err(ConvertError::Parse)?;
        Ok(Self {
            source: raw.source,
            packages: parse_packages(raw.packages)?,
            dev_packages: parse_packages(raw.dev_packages)?,
            requires: raw.requires,
        })
    }
}

/// The Pipfile as it appears on disk, before package values are checked.
#[derive(Debug, Deserialize)]
struct RawPipfile {
    #[serde(default)]
    source: Vec<PipfileSource>,

    #[serde(default)]
    packages: IndexMap<String, toml::Value>,

    #[serde(rename = "dev-packages", default)]
    dev_packages: IndexMap<String, toml::Value>,

    requires: Option<PipfileRequires>,
}

fn parse_packages(
    raw: IndexMap<String, toml::Value>,
) -> Result<IndexMap<String, PipfilePackage>, ConvertError> {
    raw.into_iter()
        .map(|(name, value)| {
            let package = PipfilePackage::from_value(&name, value)?;
            Ok((name, package))
        })
        .collect()
}

/// A `[[source]]` entry in the Pipfile.
#[derive(Debug, Deserialize)]
pub struct PipfileSource {
    /// Source name (e.g., `"pypi"`).
    pub name: String,

    /// Index URL, possibly with embedded credentials.
    pub url: String,
}

/// A package dependency in the Pipfile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipfilePackage {
    /// Simple version string: `requests = "*"` or `requests = ">=1.0"`.
    Simple(String),

    /// Table with extended fields: `requests = {version = ">=1.0", extras = ["security"]}`.
    Detailed(PipfilePackageDetail),
}

impl PipfilePackage {
    /// Build a package from its raw TOML value.
    ///
    /// Anything other than a string or a well-typed table is rejected.
    pub fn from_value(name: &str, value: toml::Value) -> Result<Self, ConvertError> {
        match value {
            toml::Value::String(version) => Ok(Self::Simple(version)),
            value @ toml::Value::Table(_) => {
                value
                    .try_into()
                    .map(Self::Detailed)
                    .map_err(|err: toml::de::Error| ConvertError::MalformedVersionSpec {
                        package: name.to_owned(),
                        reason: err.to_string().trim().to_owned(),
                    })
            }
            other => Err(ConvertError::MalformedVersionSpec {
                package: name.to_owned(),
                reason: format!("expected a string or a table, found {}", other.type_str()),
            }),
        }
    }

    /// The index this package is pinned to, if any.
    pub fn index(&self) -> Option<&str> {
        match self {
            Self::Simple(_) => None,
            Self::Detailed(detail) => detail.index.as_deref(),
        }
    }
}

/// Extended package specification fields.
///
/// Keys the conversion does not use (`markers`, `editable`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PipfilePackageDetail {
    /// Version specifier (e.g., `"==1.0"`).
    pub version: Option<String>,

    /// Extra features to install.
    #[serde(default)]
    pub extras: Vec<String>,

    /// Git repository URL.
    pub git: Option<String>,

    /// Git ref (branch, tag, or commit).
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,

    /// Specific index to install from.
    pub index: Option<String>,
}

/// The `[requires]` section of a Pipfile.
///
/// `python_version` (e.g. `"3.12"`) is not kept, since it cannot be rendered
/// as an exact pin.
#[derive(Debug, Deserialize)]
pub struct PipfileRequires {
    /// Full Python version (e.g., `"3.12.1"`).
    pub python_full_version: Option<String>,
}
