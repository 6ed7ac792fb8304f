use std::sync::Arc;

use rideflow_store::app_config::TopicsConfig;
use rideflow_store::{EventSink, RideRepository};

#[derive(Clone)]
pub struct AppState {
    pub rides: Arc<dyn RideRepository>,
    pub events: Arc<dyn EventSink>,
    pub topics: TopicsConfig,
}
