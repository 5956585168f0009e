use std::io;
use std::path::PathBuf;
use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Cannot open version file {}: {source}", .path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid version format: {0}")]
    FormatError(String),

    #[error("Failed to write version file: {0}")]
    WriteFailure(#[source] io::Error),

    #[error("{0}: {1}")]
    WithContext(String, Box<VersionError>),
}

impl VersionError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        VersionError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            VersionError::ResourceNotFound { path, source } if source.kind() == io::ErrorKind::NotFound => {
                format!("Version file not found: {}", path.display())
            }
            VersionError::FormatError(reason) => {
                format!("Expected MAJOR.MINOR.PATCH on the first line, {reason}")
            }
            VersionError::WithContext(ctx, err) => format!("{}: {}", ctx, err.user_message()),
            _ => format!("{}", self),
        }
    }

    /// The error underneath any context wrappers
    pub fn root(&self) -> &VersionError {
        match self {
            VersionError::WithContext(_, err) => err.root(),
            other => other,
        }
    }
}

pub type Result<T> = result::Result<T, VersionError>;

// Helper trait for adding context to results
pub trait ResultExt<T> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| err.with_context(context()))
    }
}
