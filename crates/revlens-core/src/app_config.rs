use std::path::PathBuf;

/// File name of the collected (raw) review table inside the data directory.
pub const COLLECTED_FILE_NAME: &str = "collected_reviews.csv";

/// File name of the analyzed review table inside the data directory.
pub const ANALYZED_FILE_NAME: &str = "analyzed_reviews.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub data_dir: PathBuf,
    /// `None` means the built-in catalog is used.
    pub catalog_path: Option<PathBuf>,
    pub max_results: usize,
    pub trending_limit: usize,
}

impl AppConfig {
    #[must_use]
    pub fn collected_path(&self) -> PathBuf {
        self.data_dir.join(COLLECTED_FILE_NAME)
    }

    #[must_use]
    pub fn analyzed_path(&self) -> PathBuf {
        self.data_dir.join(ANALYZED_FILE_NAME)
    }
}
