use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("failed to bind observer listener: {0}")]
    Bind(std::io::Error),

    #[error("observer server error: {0}")]
    Serve(std::io::Error),
}

pub type ObserverResult<T> = Result<T, ObserverError>;
