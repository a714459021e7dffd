//! Stub generators, research and observers.

use async_trait::async_trait;
use marquee_agents::{MovieGenerator, ResearchGatherer, StateObserver};
use marquee_core::{CastMember, FieldName, MovieState, Review};
use marquee_error::{GenerationError, GenerationErrorKind, MarqueeResult};
use marquee_interface::ResearchReader;
use std::sync::Mutex;

/// Generator returning fixed values and recording every call.
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    fail_on: Option<FieldName>,
    calls: Mutex<Vec<FieldName>>,
    snapshots: Mutex<Vec<MovieState>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the step for `field` with an API error.
    pub fn failing_on(field: FieldName) -> Self {
        Self {
            fail_on: Some(field),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<FieldName> {
        self.calls.lock().unwrap().clone()
    }

    /// Snapshot each step was given, in call order.
    pub fn snapshots(&self) -> Vec<MovieState> {
        self.snapshots.lock().unwrap().clone()
    }

    fn record(&self, field: FieldName, movie: &MovieState) -> MarqueeResult<()> {
        self.calls.lock().unwrap().push(field);
        self.snapshots.lock().unwrap().push(movie.clone());
        if self.fail_on == Some(field) {
            return Err(GenerationError::new(GenerationErrorKind::HttpStatus {
                status_code: 503,
                message: format!("{} service unavailable", field),
            })
            .into());
        }
        Ok(())
    }

    pub fn cast() -> Vec<CastMember> {
        vec![CastMember {
            character: "Vincent Hanna".to_string(),
            actor: "Al Pacino".to_string(),
        }]
    }

    pub fn reviews() -> Vec<Review> {
        vec![Review {
            author: "Reel Rita".to_string(),
            text: "Relentless.".to_string(),
            rating: 5,
        }]
    }
}

#[async_trait]
impl MovieGenerator for ScriptedGenerator {
    async fn gritty_scale(&self, movie: &MovieState) -> MarqueeResult<u8> {
        self.record(FieldName::GrittyScale, movie)?;
        Ok(4)
    }

    async fn description(&self, movie: &MovieState) -> MarqueeResult<String> {
        self.record(FieldName::Description, movie)?;
        Ok(format!("{} is a story told at gritty level {:?}", movie.title(), movie.gritty_scale()))
    }

    async fn tagline(&self, movie: &MovieState) -> MarqueeResult<String> {
        self.record(FieldName::Tagline, movie)?;
        Ok("A Los Angeles crime saga".to_string())
    }

    async fn cast(&self, movie: &MovieState) -> MarqueeResult<Vec<CastMember>> {
        self.record(FieldName::Cast, movie)?;
        Ok(Self::cast())
    }

    async fn poster(&self, movie: &MovieState) -> MarqueeResult<String> {
        self.record(FieldName::PosterUrl, movie)?;
        Ok("/images/posters/test/poster.jpg".to_string())
    }

    async fn reviews(&self, movie: &MovieState) -> MarqueeResult<Vec<Review>> {
        self.record(FieldName::Reviews, movie)?;
        Ok(Self::reviews())
    }
}

/// Research reader with fixed lists.
#[derive(Debug, Default, Clone)]
pub struct StubResearch {
    pub trends: Vec<String>,
    pub actors: Vec<String>,
}

impl ResearchReader for StubResearch {
    fn popular_trends(&self) -> Vec<String> {
        self.trends.clone()
    }

    fn popular_actors(&self) -> Vec<String> {
        self.actors.clone()
    }
}

/// Gatherer returning fixed lists, optionally failing extraction.
#[derive(Debug, Default)]
pub struct ScriptedGatherer {
    pub trends: Vec<String>,
    pub actors: Vec<String>,
    pub fail_extraction: Mutex<bool>,
    pub gathers: Mutex<usize>,
}

impl ScriptedGatherer {
    pub fn new(trends: &[&str], actors: &[&str]) -> Self {
        Self {
            trends: trends.iter().map(|s| s.to_string()).collect(),
            actors: actors.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        *self.fail_extraction.lock().unwrap() = failing;
    }

    pub fn gather_count(&self) -> usize {
        *self.gathers.lock().unwrap()
    }
}

#[async_trait]
impl ResearchGatherer for ScriptedGatherer {
    async fn fetch_digest(&self) -> MarqueeResult<String> {
        *self.gathers.lock().unwrap() += 1;
        Ok("# Popular movies\n\n- Heat".to_string())
    }

    async fn extract_trends(&self, _digest: &str) -> MarqueeResult<Vec<String>> {
        if *self.fail_extraction.lock().unwrap() {
            return Err(GenerationError::new(GenerationErrorKind::SchemaMismatch(
                "trends: expected array".to_string(),
            ))
            .into());
        }
        Ok(self.trends.clone())
    }

    async fn extract_actors(&self, _digest: &str) -> MarqueeResult<Vec<String>> {
        Ok(self.actors.clone())
    }
}

/// Observer keeping every state it was shown.
#[derive(Debug, Default)]
pub struct RecordingObserver<S> {
    states: Mutex<Vec<S>>,
}

impl<S: Clone> RecordingObserver<S> {
    pub fn new() -> Self {
        Self {
            states: Mutex::new(Vec::new()),
        }
    }

    pub fn states(&self) -> Vec<S> {
        self.states.lock().unwrap().clone()
    }
}

impl<S: Clone + Send> StateObserver<S> for RecordingObserver<S> {
    fn on_state(&self, state: &S) {
        self.states.lock().unwrap().push(state.clone());
    }
}
