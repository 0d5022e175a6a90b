// crates/infra/src/catalog.rs
use std::path::{Path, PathBuf};

use log::debug;
use northwind_ports::catalog::{CatalogDto, CatalogSource};
use northwind_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// Serialisation formats a catalogue file may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl CatalogFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn parse(self, contents: &str) -> Result<CatalogDto> {
        match self {
            Self::Json => Ok(serde_json::from_str(contents)?),
            #[cfg(feature = "yaml")]
            Self::Yaml => Ok(serde_yaml::from_str(contents)?),
        }
    }
}

/// [`CatalogSource`] backed by a single JSON (or YAML) file.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
    format: CatalogFormat,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>, format: CatalogFormat) -> Self {
        Self { path: path.into(), format }
    }

    /// Builds a source whose format follows the file extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match CatalogFormat::from_path(&path) {
            Some(format) => Ok(Self::new(path, format)),
            None => Err(InfrastructureError::UnsupportedFormat { path }.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> CatalogFormat {
        self.format
    }
}

impl CatalogSource for FileCatalogSource {
    fn load(&self) -> Result<CatalogDto> {
        debug!("reading catalog {} as {:?}", self.path.display(), self.format);
        let contents = FileReader::read_to_string(&self.path)?;
        self.format.parse(&contents)
    }
}
