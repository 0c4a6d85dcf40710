use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccrualError {
    #[error("field {field} is not a number: {input:?}")]
    NonNumericValue {
        field: &'static str,
        input: String,
    },

    #[error("field {field} must not be negative: {value}")]
    NegativeValue {
        field: &'static str,
        value: i64,
    },

    #[error("premium banking flag must be 0 or 1, got {value}")]
    InvalidPremiumFlag {
        value: u64,
    },

    #[error("malformed input record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AccrualError>;
