use std::path::PathBuf;

use tracing::debug;

use crate::error::{CarisError, Result};
use crate::product::{ProductSpec, BATCH_ENGINE_EXE, DEFAULT_SUBDIR};
use crate::store::{InstallStore, RegistryStore};

/// One discovered batch engine: the executable path and the version it
/// belongs to.
///
/// Version strings are carried as `f64` ("11.4" is 11.4). This is lossy for
/// any scheme with more than one dot or non-numeric segments; CARIS versions
/// are simple decimals, so it holds in practice.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionMatch {
    /// Absolute path to the executable. Existed on disk at the moment of the
    /// check; no guarantee beyond that.
    pub path: PathBuf,
    /// Parsed version number.
    pub version: f64,
}

/// Searches an [`InstallStore`] for a CARIS executable across an ordered list
/// of accepted versions.
///
/// Each call is a stateless one-shot query; search order is exactly the
/// caller's version order. Per-version lookup failures (key missing, value
/// missing, access denied) are treated as "not installed" and skipped.
///
/// By default the finder looks for `carisbatch.exe` under the `bin`
/// subdirectory of each registered install root; both can be overridden.
pub struct CommandFinder<S> {
    store: S,
    exe_name: String,
    subdir: PathBuf,
}

impl CommandFinder<RegistryStore> {
    /// Create a finder backed by the Windows registry.
    ///
    /// Fails on non-Windows hosts with [`CarisError::UnsupportedPlatform`].
    pub fn new() -> Result<Self> {
        Ok(Self::with_store(RegistryStore::connect()?))
    }
}

impl<S: InstallStore> CommandFinder<S> {
    /// Create a finder over an explicit store backend.
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            exe_name: BATCH_ENGINE_EXE.to_string(),
            subdir: PathBuf::from(DEFAULT_SUBDIR),
        }
    }

    /// Override the executable name to search for.
    pub fn executable(mut self, name: impl Into<String>) -> Self {
        self.exe_name = name.into();
        self
    }

    /// Override the subdirectory between the install root and the executable.
    pub fn subdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.subdir = dir.into();
        self
    }

    /// Return the first accepted version that resolves to an existing
    /// executable, or `None` if nothing matched.
    pub fn find_first(&self, product_key: &str, accepted_versions: &[&str]) -> Option<VersionMatch> {
        accepted_versions
            .iter()
            .find_map(|vers| self.probe(product_key, vers))
    }

    /// Return every accepted version that resolves to an existing executable,
    /// preserving the input order. Possibly empty.
    pub fn find_all(&self, product_key: &str, accepted_versions: &[&str]) -> Vec<VersionMatch> {
        accepted_versions
            .iter()
            .filter_map(|vers| self.probe(product_key, vers))
            .collect()
    }

    /// First match across a product family's accepted versions, or
    /// [`CarisError::NoInstallationFound`] if nothing is installed.
    pub fn first_of(&self, product: &ProductSpec) -> Result<VersionMatch> {
        self.find_first(product.key, product.versions)
            .ok_or_else(|| CarisError::NoInstallationFound {
                product: product.label.to_string(),
            })
    }

    /// All matches across a product family's accepted versions, or
    /// [`CarisError::NoInstallationFound`] if the list comes back empty.
    pub fn all_of(&self, product: &ProductSpec) -> Result<Vec<VersionMatch>> {
        let matches = self.find_all(product.key, product.versions);
        if matches.is_empty() {
            return Err(CarisError::NoInstallationFound {
                product: product.label.to_string(),
            });
        }
        Ok(matches)
    }

    /// Resolve one specific version of a product family, or
    /// [`CarisError::VersionNotInstalled`] naming the requested version.
    pub fn exact(&self, product: &ProductSpec, version: &str) -> Result<PathBuf> {
        self.find_first(product.key, &[version])
            .map(|m| m.path)
            .ok_or_else(|| CarisError::VersionNotInstalled {
                product: product.label.to_string(),
                version: version.to_string(),
            })
    }

    fn probe(&self, product_key: &str, version: &str) -> Option<VersionMatch> {
        let install_dir = match self.store.install_dir(product_key, version) {
            Ok(dir) => dir,
            Err(e) => {
                debug!(product_key, version, reason = %e.reason, "version not registered");
                return None;
            }
        };

        let path = install_dir.join(&self.subdir).join(&self.exe_name);
        if !path.exists() {
            debug!(product_key, version, path = %path.display(), "registered but executable missing");
            return None;
        }

        let Ok(parsed) = version.parse::<f64>() else {
            debug!(product_key, version, "version string is not a simple decimal");
            return None;
        };

        debug!(product_key, version, path = %path.display(), "found batch engine");
        Some(VersionMatch {
            path,
            version: parsed,
        })
    }
}
