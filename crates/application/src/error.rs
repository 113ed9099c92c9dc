use effect_studio_domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("no image selected")]
    NoImageSelected,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("backend answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("io error: {0}")]
    Io(String),
}

impl ApplicationError {
    /// True when the pipeline was rejected before any request was sent.
    pub fn is_incomplete_pipeline(&self) -> bool {
        matches!(self, Self::Domain(DomainError::IncompletePipeline))
    }
}
