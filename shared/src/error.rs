use thiserror::Error;

/// The built-in state tables disagree with each other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("state `{name}` has a FIPS code but no abbreviation")]
    MissingAbbreviation { name: String },
    #[error("state `{name}` has an abbreviation but no FIPS code")]
    MissingFips { name: String },
    #[error("duplicate key `{key}` in state table")]
    DuplicateKey { key: String },
    #[error("duplicate state name `{name}` in state table")]
    DuplicateName { name: String },
}

/// Failure to load the customer record set.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetch error: {0}")]
    Fetch(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("geometry error: {0}")]
    Geometry(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{0}`, expected #rrggbb")]
pub struct ColorParseError(pub String);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid widget config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("viewport must be positive, got {width}x{height}")]
    Viewport { width: f64, height: f64 },
}
