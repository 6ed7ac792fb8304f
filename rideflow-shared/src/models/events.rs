use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ride::{GeoPoint, Ride};

pub const VEHICLE_ASSIGNED_EVENT_TYPE: &str = "VehicleAssigned";

/// Announced by Ride Intake on `ride.requested`, key = rideId.
/// Emitted logically once per ride but delivered at-least-once; consumers
/// must tolerate duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideRequestedEvent {
    pub ride_id: String,
    pub user_id: String,
    pub pickup: GeoPoint,
    pub dropoff: GeoPoint,
    pub requested_at: DateTime<Utc>,
}

impl From<Ride> for RideRequestedEvent {
    fn from(ride: Ride) -> Self {
        Self {
            ride_id: ride.ride_id,
            user_id: ride.user_id,
            pickup: ride.pickup,
            dropoff: ride.dropoff,
            requested_at: ride.requested_at,
        }
    }
}

/// Published by the Assignment Engine on `vehicle.assigned`, key = rideId.
/// Driver and vehicle ids come from fixed bounded pools with no
/// availability tracking, so the same id can appear on concurrent rides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleAssignedEvent {
    pub event_type: String,
    pub ride_id: String,
    pub user_id: String,
    pub driver_id: String,
    pub vehicle_id: String,
    pub assigned_at: DateTime<Utc>,
}

impl VehicleAssignedEvent {
    pub fn new(
        ride_id: String,
        user_id: String,
        driver_id: String,
        vehicle_id: String,
        assigned_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_type: VEHICLE_ASSIGNED_EVENT_TYPE.to_string(),
            ride_id,
            user_id,
            driver_id,
            vehicle_id,
            assigned_at,
        }
    }
}

/// Published by the Notification Dispatcher on `notification.sent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSentEvent {
    pub user_id: String,
    pub ride_id: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}
