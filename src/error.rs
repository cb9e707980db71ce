#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    Regex(#[from] fancy_regex::Error),
    #[error("unknown browser {0:?} in profile document")]
    UnknownBrowser(String),
    #[error("duplicate profile entry for {0}")]
    DuplicateProfile(&'static str),
    #[error("profile document has no entry for {0}")]
    MissingProfile(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
