//! Typed client for the research actor.

use crate::call::unwrap_call_result;
use crate::{
    Observers, Research, ResearchActor, ResearchGatherer, ResearchMessage, WatchObserver,
};
use marquee_core::ResearchState;
use marquee_error::{EntityError, EntityErrorKind, MarqueeResult};
use marquee_interface::ResearchReader;
use ractor::{Actor, ActorRef};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, instrument};

/// Cloneable handle to the research actor.
///
/// Reads through [`ResearchReader`] never wait on the actor: they return the
/// last committed state, even while a gather is in progress.
#[derive(Debug, Clone)]
pub struct ResearchHandle {
    actor: ActorRef<ResearchMessage>,
    snapshot: watch::Receiver<ResearchState>,
}

impl ResearchHandle {
    /// Spawn the research actor.
    #[instrument(skip_all)]
    pub async fn spawn(
        gatherer: Arc<dyn ResearchGatherer>,
        observers: Observers<ResearchState>,
    ) -> MarqueeResult<Self> {
        let (watch, snapshot) = WatchObserver::channel(ResearchState::default());
        let mut all = Observers::new().with(Arc::new(watch));
        all.extend(observers);

        let research = Research::new(gatherer).with_observers(all);
        let (actor, _) = Actor::spawn(None, ResearchActor, research)
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to spawn research actor");
                EntityError::new(EntityErrorKind::Spawn {
                    name: "research".to_string(),
                    reason: e.to_string(),
                })
            })?;

        Ok(Self { actor, snapshot })
    }

    /// Gather now, waiting for the result.
    pub async fn gather_trends(&self) -> MarqueeResult<ResearchState> {
        unwrap_call_result(
            self.actor
                .call(|reply| ResearchMessage::Gather { reply }, None)
                .await,
        )?
    }

    /// State as committed by the actor, after any queued work.
    pub async fn state(&self) -> MarqueeResult<ResearchState> {
        unwrap_call_result(
            self.actor
                .call(|reply| ResearchMessage::GetState { reply }, None)
                .await,
        )
    }

    /// Latest committed state without waiting on the actor.
    pub fn snapshot(&self) -> ResearchState {
        self.snapshot.borrow().clone()
    }

    /// Gather every `interval`, starting now. Failures are logged, not returned.
    pub fn start_schedule(&self, interval: Duration) -> MarqueeResult<()> {
        self.send(ResearchMessage::StartSchedule { interval })
    }

    /// Cancel periodic gathering.
    pub fn stop_schedule(&self) -> MarqueeResult<()> {
        self.send(ResearchMessage::StopSchedule)
    }

    /// Stop the actor.
    pub fn stop(&self) {
        self.actor.stop(None);
    }

    fn send(&self, message: ResearchMessage) -> MarqueeResult<()> {
        self.actor.send_message(message).map_err(|e| {
            EntityError::new(EntityErrorKind::Messaging(e.to_string())).into()
        })
    }
}

impl ResearchReader for ResearchHandle {
    fn popular_trends(&self) -> Vec<String> {
        self.snapshot.borrow().trends().clone()
    }

    fn popular_actors(&self) -> Vec<String> {
        self.snapshot.borrow().actors().clone()
    }
}
