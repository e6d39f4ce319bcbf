pub mod configuration;
pub mod email;
pub mod telemetry;
pub mod transport;
