use std::sync::Arc;

use chrono::Utc;
use rdkafka::consumer::StreamConsumer;
use rdkafka::message::Message;
use rideflow_store::EventSink;
use tracing::{error, info};

/// Consume `vehicle.assigned` and publish one `notification.sent` per
/// delivered message.
pub async fn run(consumer: StreamConsumer, events: Arc<dyn EventSink>, output_topic: String) {
    info!("Notification dispatcher started, listening for assignments...");

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

                let event = crate::build_notification(payload, m.offset(), Utc::now());

                match serde_json::to_string(&event) {
                    Ok(json) => {
                        if let Err(e) = events.publish(&output_topic, &event.ride_id, &json).await {
                            error!(
                                "Failed to publish notification for ride {}: {}",
                                event.ride_id, e
                            );
                        } else {
                            info!("Notification sent for ride {}", event.ride_id);
                        }
                    }
                    Err(e) => error!("Failed to serialize notification event: {}", e),
                }
            }
        }
    }
}
