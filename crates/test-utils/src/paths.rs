//! Locating test data files.

use std::io::Write;
use std::path::PathBuf;

/// The workspace root, two levels above this crate.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(manifest_dir))
}

/// `crates/{crate_name}/testdata/`
pub fn crate_testdata_dir(crate_name: &str) -> PathBuf {
    workspace_root()
        .join("crates")
        .join(crate_name)
        .join("testdata")
}

/// Search `TEST_DATA_DIR` and then each crate's testdata directory.
pub fn find_test_file(name: &str) -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(test_data_dir) = std::env::var("TEST_DATA_DIR") {
        candidates.push(PathBuf::from(test_data_dir).join(name));
    }
    candidates.extend(
        ["grid-coverage", "station-subset"]
            .iter()
            .map(|krate| crate_testdata_dir(krate).join(name)),
    );

    candidates.into_iter().find(|path| path.exists())
}

/// Write `contents` to a named temporary file that lives as long as the handle.
pub fn temp_file_with(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temporary test file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temporary test file");
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_root_is_valid() {
        let root = workspace_root();
        assert!(
            root.join("Cargo.toml").exists(),
            "Workspace root should contain Cargo.toml: {:?}",
            root
        );
    }

    #[test]
    fn test_crate_testdata_dir() {
        let dir = crate_testdata_dir("station-subset");
        assert!(dir.ends_with("crates/station-subset/testdata"));
    }

    #[test]
    fn test_temp_file_with_contents() {
        let file = temp_file_with(".json", "{}");
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "{}");
        assert!(file.path().to_string_lossy().ends_with(".json"));
    }
}
