use std::sync::Arc;

use rideflow_store::app_config::Config;
use rideflow_store::{new_stream_consumer, EventProducer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rideflow_notify=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!(
        "Starting Notification Dispatcher: group {} consuming {} producing {}",
        config.consumer.notification_group,
        config.topics.vehicle_assigned,
        config.topics.notification_sent
    );

    let consumer = new_stream_consumer(
        &config.kafka.brokers,
        &config.consumer.notification_group,
        &config.topics.vehicle_assigned,
    )
    .expect("Failed to create Kafka consumer");

    let producer =
        EventProducer::new(&config.kafka.brokers).expect("Failed to create Kafka producer");

    rideflow_notify::worker::run(
        consumer,
        Arc::new(producer),
        config.topics.notification_sent.clone(),
    )
    .await;
}
