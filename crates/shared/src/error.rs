use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// Caller passed inputs that violate an operation's precondition
  InvalidArgument,
}

impl Display for ErrorKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::InvalidArgument => f.write_str("invalid argument"),
    }
  }
}

#[derive(Debug)]
pub struct AppError {
  err: anyhow::Error,
  kind: ErrorKind,
}

impl AppError {
  pub fn with_kind<E: Into<anyhow::Error>>(kind: ErrorKind, err: E) -> Self {
    Self {
      err: err.into(),
      kind,
    }
  }

  #[must_use]
  pub const fn kind(&self) -> ErrorKind {
    self.kind
  }
}

impl Display for AppError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{}] {}", self.kind, self.err)
  }
}

impl std::error::Error for AppError {}
