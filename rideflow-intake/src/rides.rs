use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use tracing::info;

use rideflow_shared::validate::{validate_submission, RideSubmission};
use rideflow_shared::RideRequestedEvent;
use rideflow_store::{EventSink, RideRepository};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub ok: bool,
    pub published: String,
    pub event: RideRequestedEvent,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/rides/request", post(request_ride))
}

async fn request_ride(
    State(state): State<AppState>,
    Json(body): Json<RideSubmission>,
) -> Result<Json<SubmitResponse>, AppError> {
    let response = submit_ride(
        state.rides.as_ref(),
        state.events.as_ref(),
        &state.topics.ride_requested,
        body,
    )
    .await?;
    Ok(Json(response))
}

/// Validate, persist and announce a ride request.
///
/// Persistence and publish are two independent operations. A crash between
/// them leaves a ride row that was never announced to the pipeline; that
/// window is accepted here, not reconciled.
pub async fn submit_ride(
    rides: &dyn RideRepository,
    events: &dyn EventSink,
    topic: &str,
    body: RideSubmission,
) -> Result<SubmitResponse, AppError> {
    let ride = validate_submission(body).map_err(|e| AppError::Validation(e.to_string()))?;

    let inserted = rides.insert_ride(&ride).await?;
    if !inserted {
        info!("Ride {} already persisted, skipping insert", ride.ride_id);
    }

    let event = RideRequestedEvent::from(ride);
    let payload = serde_json::to_string(&event).map_err(anyhow::Error::from)?;
    events.publish(topic, &event.ride_id, &payload).await?;

    Ok(SubmitResponse {
        ok: true,
        published: topic.to_string(),
        event,
    })
}
