pub mod configuration;
pub mod email_log;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod util;
