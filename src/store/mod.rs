pub(crate) mod registry;

pub use registry::RegistryStore;

use std::path::PathBuf;

/// Why a per-version store probe failed.
///
/// "No node registered", "value missing", and "access denied" are deliberately
/// collapsed into one category: the search treats all of them as "this version
/// is not installed" and moves on to the next candidate.
#[derive(Debug, thiserror::Error)]
#[error("version not registered: {reason}")]
pub struct NotRegistered {
    /// Backend-specific detail, used for debug logging only.
    pub reason: String,
}

/// Read-only view over the hierarchical store where CARIS products register
/// their install roots.
///
/// The shipped backend is [`RegistryStore`] (the Windows registry). The trait
/// exists so other backends, including in-memory fakes for tests, can drive
/// the same search.
pub trait InstallStore {
    /// Return the registered install root for one product version, or
    /// [`NotRegistered`] if the store has no usable entry for it.
    fn install_dir(&self, product_key: &str, version: &str) -> Result<PathBuf, NotRegistered>;
}
