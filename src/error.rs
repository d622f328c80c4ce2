use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),
  #[error("Overflow: {0}")]
  Overflow(String),
}

pub type Result<T> = std::result::Result<T, ArithmeticError>;
