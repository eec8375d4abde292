use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
  ValidationError,
  ServerError,
  RidesNotFoundError,
}

/// Error envelope returned to clients. Every outcome is sent with status 200,
/// the failure is carried by `error_code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpError {
  pub error_code: ErrorCode,
  pub message: String,
}

impl HttpError {
  pub fn new(error_code: ErrorCode, message: impl Into<String>) -> Self {
    Self {
      error_code,
      message: message.into(),
    }
  }

  pub fn validation(message: impl Into<String>) -> Self {
    Self::new(ErrorCode::ValidationError, message)
  }

  /// The underlying cause is never exposed.
  pub fn server_error() -> Self {
    Self::new(ErrorCode::ServerError, "Unknown error")
  }

  pub fn rides_not_found() -> Self {
    Self::new(ErrorCode::RidesNotFoundError, "Could not find any rides")
  }
}
