//! ISS sighting pipeline
//!
//! Four stages (locate, geocode, predict, display) run strictly in sequence. Each
//! stage waits out an artificial delay, then the driver hands its output to the
//! next stage. The driver is a small state machine; the value a stage needs lives
//! inside the state that precedes it.

pub mod driver;
pub mod source;

pub use driver::{PipelineReport, PipelineState, SightingPipeline, StageKind};
pub use source::{Coordinates, Location, PlaceholderSource, SightingSource, SightingTime};
