//! Integration tests for the family-level and exact-version wrappers: typed
//! domain errors on no-match, never an error when a version resolves.
use caris_finder::{CarisError, CommandFinder, InstallStore, NotRegistered, BASE_EDITOR, HIPS};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct FakeStore {
    entries: HashMap<(String, String), PathBuf>,
}

impl InstallStore for FakeStore {
    fn install_dir(&self, product_key: &str, version: &str) -> Result<PathBuf, NotRegistered> {
        self.entries
            .get(&(product_key.to_string(), version.to_string()))
            .cloned()
            .ok_or_else(|| NotRegistered {
                reason: format!("{product_key} {version} not registered"),
            })
    }
}

fn empty_store() -> FakeStore {
    FakeStore {
        entries: HashMap::new(),
    }
}

fn store_with_install(root: &TempDir, product: &str, version: &str) -> (FakeStore, PathBuf) {
    let dir = root.path().join(format!("{product} {version}"));
    fs::create_dir_all(dir.join("bin")).unwrap();
    let exe = dir.join("bin").join("carisbatch.exe");
    fs::write(&exe, "stub").unwrap();
    let mut entries = HashMap::new();
    entries.insert((product.to_string(), version.to_string()), dir);
    (FakeStore { entries }, exe)
}

#[test]
fn hips_first_match_error_carries_the_product_label() {
    let finder = CommandFinder::with_store(empty_store());
    let err = finder.first_of(&HIPS).unwrap_err();
    match &err {
        CarisError::NoInstallationFound { product } => assert_eq!(product, "HIPS and SIPS"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("HIPS"));
}

#[test]
fn base_editor_first_match_error_carries_the_product_label() {
    let finder = CommandFinder::with_store(empty_store());
    let err = finder.first_of(&BASE_EDITOR).unwrap_err();
    match err {
        CarisError::NoInstallationFound { product } => assert_eq!(product, "BASE Editor"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn collect_all_wrapper_errors_on_empty_result() {
    let finder = CommandFinder::with_store(empty_store());
    assert!(matches!(
        finder.all_of(&HIPS),
        Err(CarisError::NoInstallationFound { .. })
    ));
}

#[test]
fn wrappers_never_error_when_a_version_resolves() {
    let root = tempfile::tempdir().unwrap();
    let (store, exe) = store_with_install(&root, "HIPS", "11.4");
    let finder = CommandFinder::with_store(store);

    let first = finder.first_of(&HIPS).unwrap();
    assert_eq!(first.path, exe);
    assert_eq!(first.version, 11.4);

    let all = finder.all_of(&HIPS).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].path, exe);
}

#[test]
fn exact_version_lookup_returns_the_path() {
    let root = tempfile::tempdir().unwrap();
    let (store, exe) = store_with_install(&root, "HIPS", "11.2");
    let finder = CommandFinder::with_store(store);

    assert_eq!(finder.exact(&HIPS, "11.2").unwrap(), exe);
}

#[test]
fn exact_version_error_names_the_requested_version() {
    let finder = CommandFinder::with_store(empty_store());
    let err = finder.exact(&HIPS, "11.1").unwrap_err();
    match &err {
        CarisError::VersionNotInstalled { product, version } => {
            assert_eq!(product, "HIPS and SIPS");
            assert_eq!(version, "11.1");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("11.1"));
}

#[test]
fn family_search_covers_the_scenario_only_11_4_installed() {
    let root = tempfile::tempdir().unwrap();
    let (store, exe) = store_with_install(&root, "HIPS", "11.4");
    let finder = CommandFinder::with_store(store);

    // "12.0" is in the accepted list ahead of "11.4" but is not installed.
    let first = finder.find_first(HIPS.key, &["12.0", "11.4"]).unwrap();
    assert_eq!(first.path, exe);
    assert_eq!(first.version, 11.4);

    let all = finder.find_all(HIPS.key, &["12.0", "11.4"]);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].version, 11.4);
}

#[cfg(not(windows))]
#[test]
fn registry_backend_fails_fast_off_windows() {
    use caris_finder::RegistryStore;
    assert!(matches!(
        RegistryStore::connect(),
        Err(CarisError::UnsupportedPlatform)
    ));
    assert!(matches!(
        caris_finder::find_hips(),
        Err(CarisError::UnsupportedPlatform)
    ));
}
