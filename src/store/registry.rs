use std::path::PathBuf;

use crate::error::Result;
use crate::store::{InstallStore, NotRegistered};

#[cfg(not(windows))]
use crate::error::CarisError;

/// Registry key under HKEY_LOCAL_MACHINE where CARIS products register.
#[cfg(windows)]
const VENDOR_KEY: &str = r"SOFTWARE\CARIS";

/// Value name holding a product version's install root.
#[cfg(windows)]
const INSTALL_DIR_VALUE: &str = "install_dir";

/// [`InstallStore`] backed by the machine-level Windows registry hive.
///
/// CARIS installers register each product version at
/// `HKLM\SOFTWARE\CARIS\<product>\<version>\Environment Variables`, with an
/// `install_dir` value pointing at the installation root.
pub struct RegistryStore {
    #[cfg(windows)]
    hklm: winreg::RegKey,
}

impl RegistryStore {
    /// Open the machine-level hive.
    ///
    /// Fails with [`CarisError::UnsupportedPlatform`] on non-Windows hosts;
    /// there is no registry to probe and pretending otherwise would only
    /// produce confusing lower-level errors.
    #[cfg(windows)]
    pub fn connect() -> Result<Self> {
        Ok(Self {
            hklm: winreg::RegKey::predef(winreg::enums::HKEY_LOCAL_MACHINE),
        })
    }

    #[cfg(not(windows))]
    pub fn connect() -> Result<Self> {
        Err(CarisError::UnsupportedPlatform)
    }
}

#[cfg(windows)]
impl InstallStore for RegistryStore {
    fn install_dir(
        &self,
        product_key: &str,
        version: &str,
    ) -> std::result::Result<PathBuf, NotRegistered> {
        let key_path = format!(r"{VENDOR_KEY}\{product_key}\{version}\Environment Variables");
        let key = self
            .hklm
            .open_subkey(&key_path)
            .map_err(|e| NotRegistered {
                reason: format!("{key_path}: {e}"),
            })?;
        let dir: String = key.get_value(INSTALL_DIR_VALUE).map_err(|e| NotRegistered {
            reason: format!(r"{key_path}\{INSTALL_DIR_VALUE}: {e}"),
        })?;
        Ok(PathBuf::from(dir))
    }
}

// connect() never succeeds off Windows, so this impl only exists to keep the
// type usable with the generic finder.
#[cfg(not(windows))]
impl InstallStore for RegistryStore {
    fn install_dir(
        &self,
        _product_key: &str,
        _version: &str,
    ) -> std::result::Result<PathBuf, NotRegistered> {
        Err(NotRegistered {
            reason: "the Windows registry is not available on this platform".to_string(),
        })
    }
}
