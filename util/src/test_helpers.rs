use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a unique temporary storage root. The directory is automatically
/// cleaned up when the returned `TempDir` is dropped.
///
/// Keep the returned `TempDir` in scope for as long as you need the files.
pub fn setup_test_storage_root() -> TempDir {
    TempDir::new().expect("failed to create tempdir")
}

/// Writes `bytes` to `{dir}/{file_name}`, creating `dir` first.
pub fn seed_file(dir: &Path, file_name: &str, bytes: &[u8]) -> PathBuf {
    std::fs::create_dir_all(dir).expect("failed to create seed dir");
    let path = dir.join(file_name);
    std::fs::write(&path, bytes).expect("failed to write seed file");
    path
}
