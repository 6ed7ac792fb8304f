use std::sync::Arc;

use rideflow_store::app_config::Config;
use rideflow_store::{new_stream_consumer, EventProducer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rideflow_assign=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!(
        "Starting Assignment Engine: group {} consuming {} producing {}",
        config.consumer.assignment_group,
        config.topics.ride_requested,
        config.topics.vehicle_assigned
    );

    let consumer = new_stream_consumer(
        &config.kafka.brokers,
        &config.consumer.assignment_group,
        &config.topics.ride_requested,
    )
    .expect("Failed to create Kafka consumer");

    let producer =
        EventProducer::new(&config.kafka.brokers).expect("Failed to create Kafka producer");

    rideflow_assign::worker::run(
        consumer,
        Arc::new(producer),
        config.topics.vehicle_assigned.clone(),
    )
    .await;
}
