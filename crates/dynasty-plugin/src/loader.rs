//! Manifest-based plugin loader.
//!
//! Scans the plugin directory for manifests and resolves each one through
//! the [`PluginCatalog`]. The loader touches no manager state;
//! [`PluginManager::discover`](crate::manager::PluginManager::discover)
//! drives it and reports each outcome.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::warn;

use dynasty_core::config::PluginConfig;

use crate::catalog::PluginCatalog;
use crate::error::{PluginError, PluginResult};
use crate::manifest::PluginManifest;
use crate::registry::DynastyPlugin;

/// Files whose name starts with this prefix are never loaded.
pub const RESERVED_PREFIX: &str = "__";

/// A manifest found in the plugin directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFile {
    /// Plugin name derived from the file stem.
    pub name: String,
    /// Full path to the manifest.
    pub path: PathBuf,
}

/// Outcome of a discovery pass.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryReport {
    /// Names registered by this pass, in load order.
    pub loaded: Vec<String>,
    /// Manifests skipped because they declare no entry point.
    pub skipped: Vec<PluginError>,
    /// Manifests that failed to load.
    pub failed: Vec<PluginError>,
}

impl DiscoveryReport {
    /// Returns the number of manifests examined.
    pub fn examined(&self) -> usize {
        self.loaded.len() + self.skipped.len() + self.failed.len()
    }
}

/// Loads plugin manifests from a directory.
#[derive(Debug, Clone)]
pub struct PluginLoader {
    /// Directory to scan.
    directory: PathBuf,
    /// Manifest extension, without the leading dot.
    extension: String,
}

impl PluginLoader {
    /// Creates a loader for a directory and manifest extension.
    pub fn new(directory: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            directory: directory.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Creates a loader from the plugin configuration.
    pub fn from_config(config: &PluginConfig) -> Self {
        Self::new(config.directory_path(), &config.extension)
    }

    /// Returns the scanned directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Lists eligible manifests in sorted filename order.
    pub fn scan(&self) -> PluginResult<Vec<ManifestFile>> {
        let entries = fs::read_dir(&self.directory).map_err(|e| PluginError::Directory {
            path: self.directory.clone(),
            reason: e.to_string(),
        })?;

        let mut manifests: Vec<ManifestFile> = entries
            .filter_map(|entry| {
                entry
                    .map_err(|e| {
                        warn!(directory = %self.directory.display(), error = %e, "Skipping unreadable directory entry");
                    })
                    .ok()
            })
            .map(|entry| entry.path())
            // `Path::is_file` follows symlinks.
            .filter(|path| path.is_file())
            .filter_map(|path| self.manifest_file(path))
            .collect();

        manifests.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(manifests)
    }

    /// Returns the manifest descriptor for `path` if it is eligible.
    fn manifest_file(&self, path: PathBuf) -> Option<ManifestFile> {
        let file_name = path.file_name()?.to_string_lossy().into_owned();
        if file_name.starts_with(RESERVED_PREFIX) {
            return None;
        }
        let name = file_name.strip_suffix(&format!(".{}", self.extension))?;
        if name.is_empty() {
            return None;
        }
        Some(ManifestFile {
            name: name.to_string(),
            path,
        })
    }

    /// Loads one manifest and instantiates the plugin it names.
    ///
    /// Returns [`PluginError::MissingEntryPoint`] when the manifest has no
    /// `[DynastyPlugin]` table and [`PluginError::LoadFailed`] for every other
    /// problem (unreadable file, invalid TOML, missing or unknown kind,
    /// failing constructor).
    pub fn load(
        &self,
        name: &str,
        path: &Path,
        catalog: &PluginCatalog,
    ) -> PluginResult<Rc<dyn DynastyPlugin>> {
        let load_failed = |reason: String| PluginError::LoadFailed {
            name: name.to_string(),
            path: path.to_path_buf(),
            reason,
        };

        let text = fs::read_to_string(path).map_err(|e| load_failed(e.to_string()))?;
        let manifest = PluginManifest::parse(&text).map_err(|e| load_failed(e.to_string()))?;

        if manifest.entry.is_none() {
            return Err(PluginError::MissingEntryPoint {
                name: name.to_string(),
                path: path.to_path_buf(),
            });
        }

        let kind = manifest
            .kind()
            .ok_or_else(|| load_failed("DynastyPlugin entry declares no kind".to_string()))?;

        catalog
            .instantiate(kind)
            .map_err(|e| load_failed(e.to_string()))
    }
}
