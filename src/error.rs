use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Version error: {0}")]
    Version(#[from] version::VersionError),
}

impl CliError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Version(err) => err.user_message(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
