//! Routes for creating, reading, updating and deleting events.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get, routing::post};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{info, instrument};
use uuid::Uuid;

use eventdesk_core::error::DomainError;
use eventdesk_core::event::{Event, EventPatch};
use eventdesk_core::id::EventId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /event. Any `ID` field is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateEventRequest {
    /// Title of the new event.
    #[serde(rename = "Title")]
    pub title: String,
    /// Description of the new event.
    #[serde(rename = "Description")]
    pub description: String,
}

fn parse_id(raw: &str) -> Result<EventId, ApiError> {
    Ok(raw.parse::<EventId>()?)
}

/// Decode a JSON request body regardless of its `Content-Type`. An empty
/// body decodes as `T::default()`.
fn decode_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    Ok(serde_json::from_slice(body)?)
}

/// POST /event
#[instrument(skip_all)]
async fn create_event(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let request: CreateEventRequest = decode_body(&body)?;

    // The id is allocated before the repository lock is taken.
    let event = Event::new(
        state.id_generator.next_id(),
        request.title,
        request.description,
    );

    info!(correlation_id = %Uuid::new_v4(), event_id = %event.id, "creating event");

    state.event_repository.set(event.clone()).await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /events
#[instrument(skip_all)]
async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.event_repository.get_all().await?;

    info!(correlation_id = %Uuid::new_v4(), count = events.len(), "listing events");

    Ok(Json(events))
}

/// GET /events/{id}
#[instrument(skip_all)]
async fn get_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    let id = parse_id(&raw_id)?;

    info!(correlation_id = %Uuid::new_v4(), event_id = %id, "fetching event");

    state
        .event_repository
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| DomainError::EventNotFound(id).into())
}

/// PATCH /events/{id}
#[instrument(skip_all)]
async fn update_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Event>, ApiError> {
    let id = parse_id(&raw_id)?;
    let patch: EventPatch = decode_body(&body)?;

    info!(correlation_id = %Uuid::new_v4(), event_id = %id, "updating event");

    // Nothing to change: a read answers the request.
    let updated = if patch.is_empty() {
        state.event_repository.get(id).await?
    } else {
        state.event_repository.update(id, patch).await?
    };

    updated
        .map(Json)
        .ok_or_else(|| DomainError::EventNotFound(id).into())
}

/// DELETE /events/{id}
#[instrument(skip_all)]
async fn delete_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;

    info!(correlation_id = %Uuid::new_v4(), event_id = %id, "deleting event");

    state.event_repository.delete(id).await?;

    Ok(StatusCode::OK)
}

/// Returns the router for the event resource.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/event", post(create_event))
        .route("/events", get(list_events))
        .route(
            "/events/{id}",
            get(get_event).patch(update_event).delete(delete_event),
        )
}
