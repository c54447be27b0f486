//! Store location configuration
//!
//! The whole ledger lives in one JSON file. Resolution order:
//!
//! 1. `LEDGERKEEP_STORE` environment variable (if set)
//! 2. `ledgerkeep.json` in the current working directory

use std::path::{Path, PathBuf};

/// Environment variable overriding the store file location
pub const STORE_ENV_VAR: &str = "LEDGERKEEP_STORE";

/// Default store file name, relative to the working directory
pub const DEFAULT_STORE_FILE: &str = "ledgerkeep.json";

/// Resolved location of the ledger store file
#[derive(Debug, Clone)]
pub struct StoreConfig {
    store_file: PathBuf,
}

impl StoreConfig {
    /// Resolve the store path from the environment, falling back to the
    /// default file in the working directory
    pub fn from_env() -> Self {
        let store_file = std::env::var(STORE_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_FILE));
        Self { store_file }
    }

    /// Use an explicit store file path (CLI flag, tests)
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            store_file: path.into(),
        }
    }

    /// Path to the store file
    pub fn store_file(&self) -> &Path {
        &self.store_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_path() {
        let config = StoreConfig::with_path("/tmp/ledger.json");
        assert_eq!(config.store_file(), Path::new("/tmp/ledger.json"));
    }

    // One test so the env var mutations cannot race each other
    #[test]
    fn test_env_resolution() {
        std::env::remove_var(STORE_ENV_VAR);
        let config = StoreConfig::from_env();
        assert_eq!(config.store_file(), Path::new(DEFAULT_STORE_FILE));

        std::env::set_var(STORE_ENV_VAR, "/tmp/custom-store.json");
        let config = StoreConfig::from_env();
        assert_eq!(config.store_file(), Path::new("/tmp/custom-store.json"));
        std::env::remove_var(STORE_ENV_VAR);
    }
}
