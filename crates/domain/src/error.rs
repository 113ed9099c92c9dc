#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("image id must not be negative, got {0}")]
    InvalidImageId(i64),
    #[error("unknown effect type: {0}")]
    UnknownEffectType(String),
    #[error("effect {effect} has no parameter named {key}")]
    UnknownParameter { effect: String, key: String },
    #[error("value {value} is not an option of {key}")]
    OptionNotAllowed { key: String, value: String },
    #[error("value {value} of {key} is outside [{min}, {max}]")]
    ValueOutOfRange {
        key: String,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("unsupported image format: {0}")]
    UnsupportedImageFormat(String),
    #[error("pipeline has unset parameters")]
    IncompletePipeline,
}
