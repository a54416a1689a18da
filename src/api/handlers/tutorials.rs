//! Handlers for tutorial endpoints.
//!
//! One handler per route; each performs a single service call and maps the
//! result to a status code and JSON body. Failures are rendered by
//! [`AppError`]'s `IntoResponse`.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::dto::message::{DeleteAllResponse, MessageResponse};
use crate::api::dto::tutorial::{CreateTutorialRequest, TutorialItem, UpdateTutorialRequest};
use crate::api::extract::{JsonBody, TutorialId};
use crate::domain::entities::NewTutorial;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all tutorials in store order.
///
/// # Endpoint
///
/// `GET /api/tutorials`
///
/// # Errors
///
/// Returns 404 if there are no tutorials.
/// Returns 500 on store errors.
pub async fn list_tutorials_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<TutorialItem>>, AppError> {
    let tutorials = state.tutorial_service.list_tutorials().await?;

    Ok(Json(tutorials.into_iter().map(TutorialItem::from).collect()))
}

/// Returns one tutorial.
///
/// # Endpoint
///
/// `GET /api/tutorials/{id}`
///
/// # Errors
///
/// Returns 404 if no tutorial has this id.
/// Returns 500 on store errors.
pub async fn get_tutorial_handler(
    TutorialId(id): TutorialId,
    State(state): State<AppState>,
) -> Result<Json<TutorialItem>, AppError> {
    let tutorial = state.tutorial_service.get_tutorial(&id).await?;

    Ok(Json(tutorial.into()))
}

/// Creates a tutorial.
///
/// # Endpoint
///
/// `POST /api/tutorials`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "react native",
///   "description": "mobile development",  // optional
///   "published": true                     // optional, default false
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the title is missing or blank; the store is not called.
/// Returns 500 on store errors.
pub async fn create_tutorial_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateTutorialRequest>,
) -> Result<(StatusCode, Json<TutorialItem>), AppError> {
    let new_tutorial = NewTutorial::try_from(payload)?;

    let created = state.tutorial_service.create_tutorial(new_tutorial).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Partially updates a tutorial.
///
/// # Endpoint
///
/// `PUT /api/tutorials/{id}`
///
/// Only supplied fields change. An empty body is a no-op update.
///
/// # Errors
///
/// Returns 400 if a blank title is supplied.
/// Returns 404 with `"Not Found"` if no tutorial has this id.
/// Returns 500 on store errors.
pub async fn update_tutorial_handler(
    TutorialId(id): TutorialId,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UpdateTutorialRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .tutorial_service
        .update_tutorial(&id, payload.into())
        .await?;

    Ok(Json(MessageResponse::new(
        "Tutorial was updated successfully.",
    )))
}

/// Deletes one tutorial.
///
/// # Endpoint
///
/// `DELETE /api/tutorials/{id}`
///
/// # Errors
///
/// Returns 404 if no tutorial has this id.
/// Returns 500 on store errors.
pub async fn delete_tutorial_handler(
    TutorialId(id): TutorialId,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.tutorial_service.delete_tutorial(&id).await?;

    Ok(Json(MessageResponse::new("Tutorial was deleted successfully!")))
}

/// Deletes every tutorial.
///
/// # Endpoint
///
/// `DELETE /api/tutorials`
///
/// Succeeds even when there was nothing to delete.
///
/// # Errors
///
/// Returns 500 with a generic message on store errors.
pub async fn delete_all_tutorials_handler(
    State(state): State<AppState>,
) -> Result<Json<DeleteAllResponse>, AppError> {
    let deleted_count = state.tutorial_service.delete_all_tutorials().await?;

    Ok(Json(DeleteAllResponse {
        message: "Tutorials were deleted successfully!".to_string(),
        deleted_count,
    }))
}
