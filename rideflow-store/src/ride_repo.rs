use async_trait::async_trait;
use rideflow_shared::Ride;
use tracing::debug;

/// Access to the rides table. The table is owned exclusively by Ride
/// Intake; no other service reads or writes ride rows.
#[async_trait]
pub trait RideRepository: Send + Sync {
    /// Insert-if-absent keyed by ride_id. Returns false when a row for this
    /// ride_id already existed; the stored row is left untouched either way.
    async fn insert_ride(&self, ride: &Ride) -> Result<bool, sqlx::Error>;
}

pub struct PostgresRideRepository {
    pub pool: sqlx::PgPool,
}

#[async_trait]
impl RideRepository for PostgresRideRepository {
    async fn insert_ride(&self, ride: &Ride) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO rides (ride_id, user_id, pickup_lat, pickup_lng, dropoff_lat, dropoff_lng, requested_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (ride_id) DO NOTHING
            "#,
        )
        .bind(&ride.ride_id)
        .bind(&ride.user_id)
        .bind(ride.pickup.lat)
        .bind(ride.pickup.lng)
        .bind(ride.dropoff.lat)
        .bind(ride.dropoff.lng)
        .bind(ride.requested_at)
        .execute(&self.pool)
        .await?;

        let inserted = result.rows_affected() > 0;
        debug!("insert_ride {} -> inserted={}", ride.ride_id, inserted);
        Ok(inserted)
    }
}
