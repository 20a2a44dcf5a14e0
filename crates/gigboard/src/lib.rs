//! Core library for the Gigboard freelance marketplace: the job discovery
//! and filtering engine plus the ambient configuration, telemetry, and error
//! plumbing shared by its services.

pub mod config;
pub mod discovery;
pub mod error;
pub mod seed;
pub mod telemetry;
