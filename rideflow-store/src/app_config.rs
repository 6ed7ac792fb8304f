use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub kafka: KafkaConfig,
    pub topics: TopicsConfig,
    pub consumer: ConsumerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct KafkaConfig {
    pub brokers: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TopicsConfig {
    pub ride_requested: String,
    pub vehicle_assigned: String,
    pub notification_sent: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConsumerConfig {
    pub assignment_group: String,
    pub notification_group: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Per-environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Environment variables, e.g. RIDEFLOW__KAFKA__BROKERS=redpanda:9092
            .add_source(config::Environment::with_prefix("RIDEFLOW").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
