use thiserror::Error;

pub type LqResult<T> = Result<T, LqError>;

#[derive(Error, Debug)]
pub enum LqError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
