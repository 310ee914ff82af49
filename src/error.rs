use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Invalid argument <{name}>: '{value}' is not a non-negative integer")]
    InvalidArgument { name: &'static str, value: String },
    #[error("Missing numeric index prefix in file name '{0}' (expected '<index>_<name>')")]
    MissingIndexPrefix(String),
    #[error("Refusing to overwrite existing '{}'", .0.display())]
    RenameCollision(PathBuf),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
