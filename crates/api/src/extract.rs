//! Request extractors with the API's error shape.

use std::marker::PhantomData;

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;
use starlog_core::types::DbId;
use starlog_db::models::mission::Mission;
use starlog_db::models::scientist::Scientist;

use crate::error::AppError;

/// JSON request body.
///
/// Behaves like [`axum::Json`] but reports malformed bodies, a wrong content
/// type, or fields outside a DTO's allow-list as [`AppError::BadRequest`],
/// which renders the same 400 payload as a failed validation.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// A record type addressable as `/<collection>/{id}`.
pub trait Resource {
    /// Entity name used in the 404 payload.
    const NAME: &'static str;
}

impl Resource for Scientist {
    const NAME: &'static str = "Scientist";
}

impl Resource for Mission {
    const NAME: &'static str = "Mission";
}

/// The `{id}` path segment of a single-record route.
///
/// A segment that is not an integer cannot name any row, so it is rejected
/// as [`AppError::InvalidId`] (404 for `E`) instead of axum's plain-text 400.
#[derive(Debug)]
pub struct EntityId<E> {
    pub id: DbId,
    entity: PhantomData<fn() -> E>,
}

impl<E, S> FromRequestParts<S> for EntityId<E>
where
    E: Resource,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::InvalidId {
                entity: E::NAME,
                raw: rejection.body_text(),
            })?;

        match raw.parse::<DbId>() {
            Ok(id) => Ok(Self {
                id,
                entity: PhantomData,
            }),
            Err(_) => Err(AppError::InvalidId { entity: E::NAME, raw }),
        }
    }
}
