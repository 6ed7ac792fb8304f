use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rideflow_intake::AppState;
use rideflow_shared::Ride;
use rideflow_store::app_config::TopicsConfig;
use rideflow_store::{EventSink, PublishError, RideRepository};

#[derive(Default)]
pub struct MemoryRides(pub Mutex<Vec<Ride>>);

#[async_trait]
impl RideRepository for MemoryRides {
    async fn insert_ride(&self, ride: &Ride) -> Result<bool, sqlx::Error> {
        let mut rows = self.0.lock().unwrap();
        if rows.iter().any(|r| r.ride_id == ride.ride_id) {
            return Ok(false);
        }
        rows.push(ride.clone());
        Ok(true)
    }
}

/// Captures (topic, key, payload) triples in publish order.
#[derive(Default)]
pub struct MemorySink(pub Mutex<Vec<(String, String, String)>>);

#[async_trait]
impl EventSink for MemorySink {
    async fn publish(&self, topic: &str, key: &str, payload: &str) -> Result<(), PublishError> {
        self.0
            .lock()
            .unwrap()
            .push((topic.to_string(), key.to_string(), payload.to_string()));
        Ok(())
    }
}

pub fn topics() -> TopicsConfig {
    TopicsConfig {
        ride_requested: "ride.requested".to_string(),
        vehicle_assigned: "vehicle.assigned".to_string(),
        notification_sent: "notification.sent".to_string(),
    }
}

pub fn test_state() -> (Arc<MemoryRides>, Arc<MemorySink>, AppState) {
    let rides = Arc::new(MemoryRides::default());
    let sink = Arc::new(MemorySink::default());
    let state = AppState {
        rides: rides.clone(),
        events: sink.clone(),
        topics: topics(),
    };
    (rides, sink, state)
}
