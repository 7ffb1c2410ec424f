// Domain Vault services
// Pure engines and stateless helpers behind the managers and the UI.

pub mod auth_gate;
pub mod calendar_engine;
pub mod ics_exporter;
pub mod localization_engine;
pub mod lookup_service;
pub mod notification_engine;
pub mod stats_engine;
pub mod theme_engine;
