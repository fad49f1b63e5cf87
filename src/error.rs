use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Unable to read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse {}: {reason}", path.display())]
    ConfigParse { path: PathBuf, reason: String },

    #[error("Build failed: {0}")]
    BuildFailure(String),

    #[error("{cause}; {} was left modified: {restore}", path.display())]
    ConfigNotRestored {
        path: PathBuf,
        restore: Box<Error>,
        cause: Box<Error>,
    },

    #[error("No build output found (looked for: {0})")]
    MissingArtifact(String),

    #[error("{0}")]
    Custom(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),
}

impl Error {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }
}
