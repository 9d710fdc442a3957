//! Request extractors whose rejections use the [`AppError`] envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor.
///
/// Behaves like [`axum::Json`] but rejects with [`AppError`], so malformed
/// bodies produce the same `{ "error", "code" }` shape as every other error.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
