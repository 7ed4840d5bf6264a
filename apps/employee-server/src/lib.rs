//! Employee Directory Server
//!
//! Hosts the employee service over HTTP: layered configuration, logging
//! setup and the serve loop.

pub mod config;
pub mod logging;
pub mod server;

pub use config::AppConfig;
