//! Shared plain-data types for SpeakInfra.
//!
//! Everything here is serde-serializable and free of behavior beyond
//! constructors and read-only accessors. The intent engine (`si-intent`),
//! the Terraform renderer (`si-terraform`), and the assistant front-end
//! (`si-assistant`) all speak these types across their boundaries.

pub mod config;
pub mod detection;
pub mod provider;
pub mod request;

pub use config::*;
pub use detection::*;
pub use provider::*;
pub use request::*;
