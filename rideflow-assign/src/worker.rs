use std::sync::Arc;

use rdkafka::consumer::StreamConsumer;
use rdkafka::message::Message;
use rideflow_store::EventSink;
use tracing::{error, info};

/// Consume `ride.requested` and publish one `vehicle.assigned` per
/// delivered message. Messages are handled one at a time; publish failures
/// are logged and the offset follows the auto-commit policy.
pub async fn run(consumer: StreamConsumer, events: Arc<dyn EventSink>, output_topic: String) {
    info!("Assignment engine started, listening for ride requests...");

    loop {
        match consumer.recv().await {
            Err(e) => error!("Kafka error: {}", e),
            Ok(m) => {
                let payload = match m.payload_view::<str>() {
                    Some(Ok(p)) => Some(p),
                    Some(Err(e)) => {
                        error!("Non-UTF8 payload at offset {}: {}", m.offset(), e);
                        None
                    }
                    None => None,
                };

                let event =
                    crate::handle_ride_requested(payload, m.offset(), &mut rand::thread_rng());

                match serde_json::to_string(&event) {
                    Ok(json) => {
                        if let Err(e) = events.publish(&output_topic, &event.ride_id, &json).await {
                            error!(
                                "Failed to publish assignment for ride {}: {}",
                                event.ride_id, e
                            );
                        } else {
                            info!(
                                "Assigned {} / {} to ride {}",
                                event.driver_id, event.vehicle_id, event.ride_id
                            );
                        }
                    }
                    Err(e) => error!("Failed to serialize assignment event: {}", e),
                }
            }
        }
    }
}
