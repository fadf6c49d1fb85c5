//! SpeakInfra assistant — library crate for the text front-end.
//!
//! Re-exports the config, pipeline, and REPL modules so integration
//! tests can drive the detection → config derivation path directly.

pub mod config;
pub mod pipeline;
pub mod repl;
