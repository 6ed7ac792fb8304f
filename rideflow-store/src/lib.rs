pub mod app_config;
pub mod database;
pub mod events;
pub mod ride_repo;

pub use database::DbClient;
pub use events::{new_stream_consumer, EventProducer, EventSink, PublishError};
pub use ride_repo::{PostgresRideRepository, RideRepository};
