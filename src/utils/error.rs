use thiserror::Error;

#[derive(Error, Debug)]
pub enum SumError {
    #[error("invalid operand: the {position} operand is missing or empty")]
    InvalidOperand { position: &'static str },

    #[error("invalid arguments: {reason}")]
    InvalidArguments { reason: String },
}

pub type Result<T> = std::result::Result<T, SumError>;
