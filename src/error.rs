/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, CarisError>;

/// Error type for `caris-finder`.
#[derive(thiserror::Error, Debug)]
pub enum CarisError {
    /// The registry-backed store is only available on Windows.
    #[error("CARIS discovery requires the Windows registry and is not supported on this platform")]
    UnsupportedPlatform,

    /// The machine-level registry hive could not be opened.
    #[error("cannot open the system registry: {message}")]
    StoreUnavailable {
        /// Human-readable message from the registry backend.
        message: String,
    },

    /// No accepted version of a product family resolved to an existing batch engine.
    #[error("no batch engine found; is CARIS {product} installed?")]
    NoInstallationFound {
        /// Display label of the product family that was searched.
        product: String,
    },

    /// A specific requested version is not installed.
    #[error("no batch engine found; is CARIS {product} {version} installed?")]
    VersionNotInstalled {
        /// Display label of the product family that was searched.
        product: String,
        /// The version that was requested.
        version: String,
    },
}
