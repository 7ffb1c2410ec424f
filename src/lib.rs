//! Domain Vault — a domain portfolio dashboard with renewal tracking.
//!
//! This library crate exposes all modules for use by the binaries and
//! integration tests.

pub mod app;
pub mod managers;
pub mod rpc_handler;
pub mod services;
pub mod store;
pub mod types;
pub mod ui;
