use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable that overrides data directory detection.
pub const DATA_DIR_ENV: &str = "SMART_DATA_DIR";

/// Cached path to the directory containing the loader's data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
///
/// Absolute `relative` paths are returned unchanged.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Location of `smart.toml`: the user's config dir wins over the data dir.
pub fn config_path() -> PathBuf {
    if let Some(dir) = dirs::config_dir() {
        let user_config = dir.join("smart_engine").join("smart.toml");
        if user_config.is_file() {
            return user_config;
        }
    }
    data_path("smart.toml")
}

/// Resolve the most likely location of the data directory.
fn detect_data_root() -> PathBuf {
    let mut candidates = Vec::new();

    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        candidates.push(PathBuf::from(dir));
    }

    // Common layouts: workspace root and flattened `data/`.
    candidates.push(PathBuf::from("smart_engine/data"));
    candidates.push(PathBuf::from("data"));

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("data"));
        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("smart_engine/data"));
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("smart_engine/data"))
}
