use thiserror::Error;

/// Errors produced while loading or assembling car rosters.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A scenario row failed to parse; the message carries row context.
    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RosterResult<T> = Result<T, RosterError>;
