//! Request extractors whose rejections use the JSON error envelope.
//!
//! Axum's stock `Json`, `Form` and `Path` reject bad input with plain-text
//! responses. These wrappers route every rejection through [`AppError`] so
//! clients always get `{ "error", "code" }`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// URL-encoded form body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct AppForm<T>(pub T);

/// Path parameters. An unparseable id answers 404 like any unknown id.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
