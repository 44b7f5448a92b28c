use thiserror::Error;

#[derive(Debug, Error)]
pub enum CampusError {
    #[error("topology must declare at least one zone")]
    EmptyTopology,

    #[error("duplicate zone name {0:?}")]
    DuplicateZone(String),

    #[error("topology parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CampusResult<T> = Result<T, CampusError>;
