/// Errors that can occur during a correction round-trip
#[derive(Debug, thiserror::Error)]
pub enum CorrectionError {
    #[error("Correction failed: {details}")]
    Provider { details: String },

    #[error("Could not decode checker response: {details}")]
    InvalidResponse { details: String },
}

pub type Result<T> = std::result::Result<T, CorrectionError>;
