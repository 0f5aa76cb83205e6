#![doc = r#"
`caris-finder` locates installed versions of the CARIS hydrographic-survey
suite and returns paths to the batch engine (`carisbatch.exe`) bundled with
each one, so other tooling can invoke it without manual path configuration.

Core capabilities:
- Probe the Windows registry for registered CARIS product versions
- Resolve the newest installed HIPS and SIPS or BASE Editor batch engine
- Collect every installed version of a family, in search-priority order

Discovery reads `HKLM\SOFTWARE\CARIS\<product>\<version>\Environment Variables`
(`install_dir`) and checks that the executable exists on disk. The registry
backend is Windows-only; on other platforms [`RegistryStore::connect`] fails
with [`CarisError::UnsupportedPlatform`]. The search itself is generic over
[`InstallStore`], so alternative backends (or test fakes) can drive it.
"#]

mod error;
mod finder;
mod product;
mod store;

pub use crate::error::{CarisError, Result};
pub use crate::finder::{CommandFinder, VersionMatch};
pub use crate::product::{ProductSpec, BASE_EDITOR, BATCH_ENGINE_EXE, DEFAULT_SUBDIR, HIPS};
pub use crate::store::{InstallStore, NotRegistered, RegistryStore};

use std::path::PathBuf;

/// First installed HIPS and SIPS batch engine, searching newest-first.
///
/// Errors with [`CarisError::NoInstallationFound`] if no accepted version is
/// installed.
pub fn find_hips() -> Result<VersionMatch> {
    CommandFinder::new()?.first_of(&HIPS)
}

/// Every installed HIPS and SIPS batch engine, newest-first.
///
/// Errors with [`CarisError::NoInstallationFound`] if the list would be empty.
pub fn find_all_hips() -> Result<Vec<VersionMatch>> {
    CommandFinder::new()?.all_of(&HIPS)
}

/// First installed BASE Editor batch engine, searching newest-first.
pub fn find_base_editor() -> Result<VersionMatch> {
    CommandFinder::new()?.first_of(&BASE_EDITOR)
}

/// Every installed BASE Editor batch engine, newest-first.
pub fn find_all_base_editor() -> Result<Vec<VersionMatch>> {
    CommandFinder::new()?.all_of(&BASE_EDITOR)
}

/// Batch engine path for one specific HIPS and SIPS version.
///
/// Errors with [`CarisError::VersionNotInstalled`] naming the requested
/// version if it is not installed.
pub fn hips_batch_engine(version: &str) -> Result<PathBuf> {
    CommandFinder::new()?.exact(&HIPS, version)
}
