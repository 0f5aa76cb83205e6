//! Supported CARIS product families and their accepted version lists.

/// Default executable located by the finder.
pub const BATCH_ENGINE_EXE: &str = "carisbatch.exe";

/// Subdirectory of an install root where executables live.
pub const DEFAULT_SUBDIR: &str = "bin";

/// A CARIS product family: the registry key it registers under, the display
/// label used in error messages, and the accepted versions in search order
/// (newest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSpec {
    /// Registry key segment under the vendor key.
    pub key: &'static str,
    /// Human-readable product name.
    pub label: &'static str,
    /// Accepted versions, highest priority first.
    pub versions: &'static [&'static str],
}

/// CARIS HIPS and SIPS.
pub const HIPS: ProductSpec = ProductSpec {
    key: "HIPS",
    label: "HIPS and SIPS",
    versions: &["12.0", "11.4", "11.3", "11.2", "11.1", "10.4", "10.3", "10.2"],
};

/// CARIS BASE Editor.
pub const BASE_EDITOR: ProductSpec = ProductSpec {
    key: "BASE Editor",
    label: "BASE Editor",
    versions: &["6.1", "5.5", "5.4", "5.3", "5.2", "5.1", "4.4", "4.3", "4.2"],
};
