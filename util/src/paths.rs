use crate::config::AppConfig;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Create a directory (and all parents) if it doesn't exist, and return the path.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
    let p = path.as_ref();
    fs::create_dir_all(p)?;
    Ok(p.to_path_buf())
}

/// Global storage root (absolute), from `STORAGE_ROOT`.
/// If relative in env, resolve against current_dir().
pub fn storage_root() -> PathBuf {
    let root = AppConfig::global().storage_root.clone();
    absolute(PathBuf::from(root))
}

fn absolute(p: PathBuf) -> PathBuf {
    if p.is_absolute() {
        p
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}

/// Student submissions: {root}/uploads
pub fn uploads_dir(root: &Path) -> PathBuf {
    root.join("uploads")
}

/// Graded results: {root}/results
pub fn results_dir(root: &Path) -> PathBuf {
    root.join("results")
}
