use footfall_core::FootfallError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid simulation parameters: {0}")]
    Params(#[from] FootfallError),
}

pub type SimResult<T> = Result<T, SimError>;
