// Domain Vault shared type definitions
// Each submodule defines types used across the application.

pub mod calendar;
pub mod domain;
pub mod errors;
pub mod lookup;
pub mod notification;
pub mod provider;
pub mod settings;
pub mod stats;
