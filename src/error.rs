pub type RadarResult<T> = Result<T, RadarError>;

#[derive(thiserror::Error, Debug)]
pub enum RadarError {
    #[error("invalid timestamp in '{path}': {reason}")]
    InvalidTimestamp { path: String, reason: String },

    #[error("invalid speed: {0} (must be a positive number)")]
    InvalidSpeed(f64),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RadarError {
    pub fn invalid_timestamp(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidTimestamp {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
