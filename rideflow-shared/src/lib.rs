pub mod models;
pub mod validate;

pub use models::events::{NotificationSentEvent, RideRequestedEvent, VehicleAssignedEvent};
pub use models::ride::{GeoPoint, Ride};
