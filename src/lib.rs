pub mod client;
pub mod configuration;
pub mod domain;
pub mod email_client;
pub mod handler;
pub mod mail_sender;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utility;
