//! Unified error types using thiserror
//!
//! WHY: Filesystem operations are guarded by explicit precondition checks, so callers get a
//! typed reason (`AlreadyExists`, `NotFound`, `NotEmpty`) instead of whatever the native call
//! happens to report. Every variant knows its HTTP status; `Reply::from_error` turns it into
//! the response.
//!
//! 中文：統一錯誤型別；前置條件檢查回傳具型別的錯誤，並由 `ResponseError` 對應 HTTP 狀態碼。

use std::path::PathBuf;

use actix_web::{ ResponseError, http::StatusCode };
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
  #[error("{0}")] Io(#[from] std::io::Error),
  #[error("Config error: {0}")] Config(#[from] config::ConfigError),
  #[error("Payload error: {0}")] Payload(#[from] actix_web::error::PayloadError),
  #[error("EEXIST: file already exists, '{}'", .0.display())] AlreadyExists(PathBuf),
  #[error("ENOENT: no such file or directory, '{}'", .0.display())] NotFound(PathBuf),
  #[error("ENOTEMPTY: directory not empty, '{}'", .0.display())] NotEmpty(PathBuf),
  #[error("path escapes the served root: {0}")] Traversal(String),
  #[error("request body exceeds {limit} bytes")] PayloadTooLarge { limit: usize },
  #[error("method {0} not allowed")] MethodNotAllowed(String),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Io(e) => match e.kind() {
        std::io::ErrorKind::NotFound => StatusCode::NOT_FOUND,
        std::io::ErrorKind::PermissionDenied => StatusCode::FORBIDDEN,
        std::io::ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
      },
      AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
      AppError::Payload(_) => StatusCode::BAD_REQUEST,
      AppError::AlreadyExists(_) | AppError::NotEmpty(_) => StatusCode::CONFLICT,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Traversal(_) => StatusCode::FORBIDDEN,
      AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
      AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
    }
  }
}

pub(crate) type AppResult<T> = Result<T, AppError>;
