use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::ride::{GeoPoint, Ride};

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Missing fields. Required: rideId, userId, pickup{{lat,lng}}, dropoff{{lat,lng}}")]
    MissingFields,
    #[error("{field} must carry numeric lat/lng")]
    BadCoordinates { field: &'static str },
}

/// Loosely-typed body of `POST /rides/request`. Every field is a raw JSON
/// value so that presence and shape are checked here instead of by the
/// serde extractor, and a bad request surfaces as a 400 validation error
/// rather than an extractor rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideSubmission {
    pub ride_id: Option<Value>,
    pub user_id: Option<Value>,
    pub pickup: Option<Value>,
    pub dropoff: Option<Value>,
}

/// Check a submission and stamp it into a `Ride`. All four fields are
/// required; ids must be non-empty strings, pickup and dropoff must each
/// carry numeric lat/lng. A wrong-typed id counts as missing.
pub fn validate_submission(body: RideSubmission) -> Result<Ride, ValidationError> {
    let ride_id = id_string(body.ride_id.as_ref());
    let user_id = id_string(body.user_id.as_ref());

    let (ride_id, user_id) = match (ride_id, user_id, &body.pickup, &body.dropoff) {
        (Some(r), Some(u), Some(_), Some(_)) => (r, u),
        _ => return Err(ValidationError::MissingFields),
    };

    let pickup = geo_point(body.pickup.as_ref())
        .ok_or(ValidationError::BadCoordinates { field: "pickup" })?;
    let dropoff = geo_point(body.dropoff.as_ref())
        .ok_or(ValidationError::BadCoordinates { field: "dropoff" })?;

    Ok(Ride {
        ride_id,
        user_id,
        pickup,
        dropoff,
        requested_at: Utc::now(),
    })
}

fn id_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn geo_point(value: Option<&Value>) -> Option<GeoPoint> {
    let value = value?;
    let lat = value.get("lat")?.as_f64()?;
    let lng = value.get("lng")?.as_f64()?;
    Some(GeoPoint { lat, lng })
}
