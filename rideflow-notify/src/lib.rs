use chrono::{DateTime, Utc};
use rideflow_shared::NotificationSentEvent;

pub mod worker;

/// Fixed rider-facing message template; no per-ride content beyond ids.
pub const MESSAGE_TEMPLATE: &str = "Your vehicle is on the way 🚗";

/// Project one `vehicle.assigned` message into a rider notification.
///
/// Pure field projection plus a timestamp. Fields that cannot be read get
/// offset-derived fallbacks so that a malformed message still produces a
/// notification instead of stalling the stream. Duplicate deliveries
/// produce duplicate notifications; dedup is left to downstream consumers.
pub fn build_notification(
    payload: Option<&str>,
    offset: i64,
    sent_at: DateTime<Utc>,
) -> NotificationSentEvent {
    let doc = payload.and_then(|raw| serde_json::from_str::<serde_json::Value>(raw).ok());

    let field = |name: &str| {
        doc.as_ref()
            .and_then(|d| d.get(name).and_then(|v| v.as_str()))
            .map(String::from)
    };

    NotificationSentEvent {
        user_id: field("userId").unwrap_or_else(|| format!("user-unknown-{}", offset)),
        ride_id: field("rideId").unwrap_or_else(|| format!("ride-unknown-{}", offset)),
        message: MESSAGE_TEMPLATE.to_string(),
        sent_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn projects_ids_from_the_assignment_event() {
        let payload = r#"{
            "eventType": "VehicleAssigned",
            "rideId": "r1",
            "userId": "u1",
            "driverId": "driver-004",
            "vehicleId": "vehicle-117",
            "assignedAt": "2025-06-01T11:59:00Z"
        }"#;

        let event = build_notification(Some(payload), 5, ts());

        assert_eq!(event.ride_id, "r1");
        assert_eq!(event.user_id, "u1");
        assert_eq!(event.message, MESSAGE_TEMPLATE);
        assert_eq!(event.sent_at, ts());
    }

    #[test]
    fn missing_ride_id_still_yields_a_notification() {
        let payload = r#"{"userId":"u1","driverId":"driver-004"}"#;
        let event = build_notification(Some(payload), 31, ts());

        assert_eq!(event.ride_id, "ride-unknown-31");
        assert_eq!(event.user_id, "u1");
    }

    #[test]
    fn unparsable_payload_still_yields_a_notification() {
        let event = build_notification(Some("{{{"), 8, ts());
        assert_eq!(event.ride_id, "ride-unknown-8");
        assert_eq!(event.user_id, "user-unknown-8");
        assert_eq!(event.message, MESSAGE_TEMPLATE);
    }

    #[test]
    fn empty_payload_still_yields_a_notification() {
        let event = build_notification(None, 0, ts());
        assert_eq!(event.ride_id, "ride-unknown-0");
    }
}
