use thiserror::Error;

pub type TdResult<T> = Result<T, TdError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TdError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
