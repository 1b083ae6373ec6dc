use crate::config::SnippetConfig;
use crate::deferred::DeferredError;
use crate::output::OutputSink;
use crate::pipeline::{PipelineReport, PlaceholderSource, SightingPipeline};
use crate::quotes::run_quote;
use crate::random::{Deviate, RngDeviate};
use crate::reward::{DisplaySurface, run_reward};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snippet {
    IssSighting,
    IceCream,
    Quote,
}

impl Snippet {
    pub const ALL: [Snippet; 3] = [Snippet::IssSighting, Snippet::IceCream, Snippet::Quote];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetOutcome {
    Sighting(PipelineReport),
    Reward(DisplaySurface),
    Quote(Option<&'static str>),
}

/// Runs snippets one after another, sharing one deviate source.
pub struct SnippetRunner {
    config: SnippetConfig,
    sink: Arc<dyn OutputSink>,
    deviate: Box<dyn Deviate + Send>,
}

impl SnippetRunner {
    pub fn new(config: SnippetConfig, sink: Arc<dyn OutputSink>) -> Self {
        let deviate: Box<dyn Deviate + Send> = match config.seed {
            Some(seed) => Box::new(RngDeviate::seeded(seed)),
            None => Box::new(RngDeviate::from_os()),
        };
        Self::with_deviate(config, sink, deviate)
    }

    pub fn with_deviate(
        config: SnippetConfig,
        sink: Arc<dyn OutputSink>,
        deviate: Box<dyn Deviate + Send>,
    ) -> Self {
        Self {
            config,
            sink,
            deviate,
        }
    }

    pub async fn run(&mut self, snippet: Snippet) -> Result<SnippetOutcome, DeferredError> {
        log::info!("Running snippet {:?}", snippet);
        let outcome = match snippet {
            Snippet::IssSighting => {
                let pipeline = SightingPipeline::new(
                    Arc::new(PlaceholderSource),
                    self.sink.clone(),
                    self.config.stage_delay,
                );
                SnippetOutcome::Sighting(pipeline.run().await)
            }
            Snippet::IceCream => {
                let surface = run_reward(
                    &mut self.deviate,
                    self.config.homework_probability,
                    self.config.homework_override,
                    self.config.reward_delay,
                    self.sink.as_ref(),
                )
                .await?;
                SnippetOutcome::Reward(surface)
            }
            Snippet::Quote => SnippetOutcome::Quote(run_quote(
                &mut self.deviate,
                self.sink.as_ref(),
            )),
        };
        Ok(outcome)
    }
}
