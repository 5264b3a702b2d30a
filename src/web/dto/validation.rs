//! Body extractors for the board API.

use axum::{
    async_trait,
    body::Body,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderValue},
    Form, Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::web::error::ApiError;

/// A body extractor that accepts either a JSON or a URL-encoded form body.
///
/// `Content-Type: application/json` selects JSON and a form content type
/// selects the form decoder. Requests with no or another content type are
/// read as an empty form, so a bodyless PUT or DELETE gets every field's
/// default.
pub struct FormOrJson<T>(pub T);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if content_type.starts_with("application/json") {
        BodyKind::Json
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

/// Replace the body with an empty form.
fn empty_form(req: Request) -> Request {
    let (mut parts, _) = req.into_parts();
    parts.headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded"),
    );
    Request::from_parts(parts, Body::empty())
}

#[async_trait]
impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let req = match body_kind(&req) {
            BodyKind::Json => {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e)))?;
                return Ok(FormOrJson(value));
            }
            BodyKind::Form => req,
            BodyKind::Other => empty_form(req),
        };

        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid form body: {}", e)))?;
        Ok(FormOrJson(value))
    }
}

/// A [`FormOrJson`] extractor that also validates the decoded body.
///
/// If validation fails, it returns a `400` with field-level error
/// information.
///
/// # Example
///
/// ```ignore
/// use anonboard::web::dto::ValidatedFormOrJson;
///
/// async fn create_thread(
///     ValidatedFormOrJson(payload): ValidatedFormOrJson<CreateThreadRequest>,
/// ) -> Result<Redirect, ApiError> {
///     // payload.text and payload.delete_password are present
///     // ...
/// }
/// ```
pub struct ValidatedFormOrJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedFormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let FormOrJson(value) = FormOrJson::<T>::from_request(req, state).await?;
        value.validate().map_err(ApiError::from_validation_errors)?;
        Ok(ValidatedFormOrJson(value))
    }
}
