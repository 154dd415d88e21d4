use std::path::{Path, PathBuf};

pub const CARRENTAL_DIR: &str = ".carrental";
pub const CONFIG_FILE: &str = ".carrental/config.yaml";

/// Registration endpoint owned by the customer registration service.
pub const DEFAULT_REGISTRATION_PATH: &str = "register_customer";

pub fn carrental_dir(root: &Path) -> PathBuf {
    root.join(CARRENTAL_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
