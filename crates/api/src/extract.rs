//! Request extractors whose rejections use the JSON error envelope.

use std::collections::HashMap;

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde_json::{Map, Value};

use crate::error::AppError;

/// [`axum::extract::Path`] rejecting with a `BAD_REQUEST` error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// [`axum::extract::Query`] rejecting with a `BAD_REQUEST` error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// A submitted record as field name -> raw value, before any validation.
///
/// Accepts a JSON object body, or an `application/x-www-form-urlencoded`
/// body whose values all arrive as strings.
#[derive(Debug, Clone)]
pub struct RecordBody(pub Map<String, Value>);

impl<S> FromRequest<S> for RecordBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            let record = fields
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect();
            return Ok(RecordBody(record));
        }

        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        match value {
            Value::Object(record) => Ok(RecordBody(record)),
            _ => Err(AppError::BadRequest(
                "Request body must be a JSON object".into(),
            )),
        }
    }
}
