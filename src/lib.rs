//! ecg-strip-rs: paginated strip-chart rendering for 1-D biosignals.
//!
//! This crate lays a flat sample sequence out across a configurable number of
//! horizontal strips, auto-scales it from data statistics to the render
//! surface, and paints it over a fixed-pitch graph-paper grid through a
//! backend-agnostic renderer contract.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{StripEngine, StripEngineConfig};
pub use error::{StripError, StripResult};
