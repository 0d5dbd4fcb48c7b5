use thiserror::Error;

/// Problems with tree configuration. These surface when configuration is loaded, never during
/// detection.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("tree definition `{tree}` has no log materials")]
    EmptyLogMaterials { tree: String },

    #[error("tree definition `{tree}` is defined more than once")]
    DuplicateTree { tree: String },

    #[error("tree definition `{tree}` needs a positive max_log_distance_from_trunk")]
    InvalidLogDistance { tree: String },

    #[error("no material id left for `{material}`")]
    PaletteFull { material: String },
}
