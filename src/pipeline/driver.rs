use super::source::{Coordinates, Location, SightingSource, SightingTime};
use crate::output::OutputSink;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Locate,
    Geocode,
    Predict,
    Display,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StageKind::Locate => "locate",
            StageKind::Geocode => "geocode",
            StageKind::Predict => "predict",
            StageKind::Display => "display",
        };
        f.write_str(name)
    }
}

/// Where the pipeline is, and the value the next stage consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineState {
    Locating,
    Geocoding(Location),
    Predicting(Coordinates),
    Displaying(SightingTime),
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// Stages in the order they completed.
    pub completed: Vec<StageKind>,
    /// Set once the display stage has run.
    pub sighting_time: Option<SightingTime>,
}

pub struct SightingPipeline {
    source: Arc<dyn SightingSource>,
    sink: Arc<dyn OutputSink>,
    stage_delay: Duration,
    state: PipelineState,
    completed: Vec<StageKind>,
    sighting_time: Option<SightingTime>,
}

impl SightingPipeline {
    pub fn new(
        source: Arc<dyn SightingSource>,
        sink: Arc<dyn OutputSink>,
        stage_delay: Duration,
    ) -> Self {
        Self {
            source,
            sink,
            stage_delay,
            state: PipelineState::Locating,
            completed: Vec::new(),
            sighting_time: None,
        }
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Runs the current stage to completion and moves to the next state.
    /// Returns `None` once the pipeline is done.
    pub async fn step(&mut self) -> Option<StageKind> {
        let state = std::mem::replace(&mut self.state, PipelineState::Done);
        let (stage, next) = match state {
            PipelineState::Locating => {
                let location = self.locate().await;
                (StageKind::Locate, PipelineState::Geocoding(location))
            }
            PipelineState::Geocoding(location) => {
                let coords = self.geocode(&location).await;
                (StageKind::Geocode, PipelineState::Predicting(coords))
            }
            PipelineState::Predicting(coords) => {
                let time = self.predict(&coords).await;
                (StageKind::Predict, PipelineState::Displaying(time))
            }
            PipelineState::Displaying(time) => {
                self.display(&time);
                self.sighting_time = Some(time);
                (StageKind::Display, PipelineState::Done)
            }
            PipelineState::Done => return None,
        };
        log::debug!("Stage {} complete, next state {:?}", stage, next);
        self.state = next;
        self.completed.push(stage);
        Some(stage)
    }

    pub async fn run(mut self) -> PipelineReport {
        while self.step().await.is_some() {}
        PipelineReport {
            completed: self.completed,
            sighting_time: self.sighting_time,
        }
    }

    async fn locate(&self) -> Location {
        self.sink.line("Getting the user's location...");
        tokio::time::sleep(self.stage_delay).await;
        let location = self.source.locate();
        self.sink.line(&format!("Location is {}", location));
        self.sink.line("");
        location
    }

    async fn geocode(&self, location: &Location) -> Coordinates {
        self.sink
            .line(&format!("Getting coordinates for {}...", location));
        tokio::time::sleep(self.stage_delay).await;
        let coords = self.source.geocode(location);
        self.sink
            .line(&format!("Coordinates for {} are {}", location, coords));
        self.sink.line("");
        coords
    }

    async fn predict(&self, coords: &Coordinates) -> SightingTime {
        self.sink
            .line(&format!("Getting next ISS sighting time for {}...", coords));
        tokio::time::sleep(self.stage_delay).await;
        self.sink
            .line(&format!("Next sighting time for {} retrieved.", coords));
        self.sink.line("");
        self.source.predict(coords)
    }

    fn display(&self, time: &SightingTime) {
        self.sink
            .line(&format!("The next ISS sighting time in your area is: {}", time));
    }
}
