use chrono::Utc;
use rand::Rng;
use rideflow_shared::VehicleAssignedEvent;

pub mod worker;

pub const DRIVER_POOL: std::ops::RangeInclusive<u32> = 1..=50;
pub const VEHICLE_POOL: std::ops::RangeInclusive<u32> = 1..=200;

/// Sample driver and vehicle ids independently and uniformly from the
/// fixed pools. Nothing tracks availability, so the same id can be handed
/// out to concurrent rides; a stand-in for a real dispatch algorithm.
pub fn sample_assignment(rng: &mut impl Rng) -> (String, String) {
    let driver = rng.gen_range(DRIVER_POOL);
    let vehicle = rng.gen_range(VEHICLE_POOL);
    (
        format!("driver-{:03}", driver),
        format!("vehicle-{:03}", vehicle),
    )
}

/// Turn one delivered `ride.requested` message into an assignment event.
///
/// The payload is parsed best-effort: when rideId cannot be extracted the
/// log offset is folded into a fallback id and processing continues, so a
/// malformed message never stalls the consumer group. Because the sampling
/// is stateless, redelivery of the same message produces a second,
/// differently-sampled assignment for the same ride.
pub fn handle_ride_requested(
    payload: Option<&str>,
    offset: i64,
    rng: &mut impl Rng,
) -> VehicleAssignedEvent {
    let doc = payload.and_then(|raw| serde_json::from_str::<serde_json::Value>(raw).ok());

    let field = |name: &str| {
        doc.as_ref()
            .and_then(|d| d.get(name).and_then(|v| v.as_str()))
            .map(String::from)
    };

    let ride_id = field("rideId").unwrap_or_else(|| format!("ride-unknown-{}", offset));
    let user_id = field("userId").unwrap_or_else(|| format!("user-unknown-{}", offset));

    let (driver_id, vehicle_id) = sample_assignment(rng);
    VehicleAssignedEvent::new(ride_id, user_id, driver_id, vehicle_id, Utc::now())
}
