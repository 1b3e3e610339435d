use crate::model::Scope;
use std::path::{Path, PathBuf};

pub const DATA_FILENAME: &str = "dados_estoque.json";

/// Environment variable overriding the data file location.
pub const DATA_FILE_ENV: &str = "TECHLOJINHA_DATA";

/// Candidate directories for the data file.
#[derive(Debug, Clone)]
pub struct StockPaths {
    /// The working directory the program was started in.
    pub project: PathBuf,
    /// Per-user data directory.
    pub global: PathBuf,
}

impl StockPaths {
    pub fn scope_dir(&self, scope: Scope) -> &Path {
        match scope {
            Scope::Project => &self.project,
            Scope::Global => &self.global,
        }
    }
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockConfig {
    pub data_file: PathBuf,
    pub scope: Scope,
}

impl StockConfig {
    /// Picks the data file: explicit path, then environment, then the scope's
    /// directory.
    pub fn resolve(
        paths: &StockPaths,
        scope: Scope,
        explicit: Option<PathBuf>,
        from_env: Option<PathBuf>,
    ) -> Self {
        let data_file = explicit
            .or(from_env)
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| paths.scope_dir(scope).join(DATA_FILENAME));
        Self { data_file, scope }
    }
}
