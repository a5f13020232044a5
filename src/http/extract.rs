//! Extractor wrappers whose rejections are reported as [`HrError`].

use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::response::IntoResponse;
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use crate::error::HrError;

/// `Json<T>` that rejects with an `HrError`
pub struct ApiJson<T>(pub T);

/// `Form<T>` that rejects with an `HrError`
pub struct ApiForm<T>(pub T);

/// `Path<T>` that rejects with an `HrError`
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HrError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl<S, T> FromRequest<S> for ApiForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HrError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HrError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) =
            axum::extract::Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

fn rejected(rejection: impl IntoResponse + std::fmt::Display) -> HrError {
    let message = rejection.to_string();
    let status = rejection.into_response().status().as_u16();
    HrError::InvalidRequest { status, message }
}

impl From<JsonRejection> for HrError {
    fn from(rejection: JsonRejection) -> Self {
        rejected(rejection)
    }
}

impl From<FormRejection> for HrError {
    fn from(rejection: FormRejection) -> Self {
        rejected(rejection)
    }
}

impl From<PathRejection> for HrError {
    fn from(rejection: PathRejection) -> Self {
        rejected(rejection)
    }
}
