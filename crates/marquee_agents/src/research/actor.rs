//! Actor hosting the research entity.

use crate::Research;
use async_trait::async_trait;
use marquee_core::ResearchState;
use marquee_error::MarqueeResult;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use std::time::Duration;
use tokio::time;
use tracing::{error, info, instrument, warn};

/// Messages for the research actor.
#[derive(Debug)]
pub enum ResearchMessage {
    /// Gather now and report the outcome.
    Gather {
        /// Reply port for RPC response.
        reply: RpcReplyPort<MarqueeResult<ResearchState>>,
    },
    /// Gather sent by the schedule; failures are only logged.
    ScheduledGather,
    /// Gather every `interval`, starting immediately.
    StartSchedule {
        /// Time between gathers
        interval: Duration,
    },
    /// Cancel the schedule.
    StopSchedule,
    /// Read the current state.
    GetState {
        /// Reply port for RPC response.
        reply: RpcReplyPort<ResearchState>,
    },
}

/// State for the research actor.
pub struct ResearchActorState {
    research: Research,
    schedule: Option<tokio::task::JoinHandle<()>>,
}

impl ResearchActorState {
    /// The hosted entity.
    pub fn research(&self) -> &Research {
        &self.research
    }

    /// Whether periodic gathering is active.
    pub fn is_scheduled(&self) -> bool {
        self.schedule.is_some()
    }

    fn cancel_schedule(&mut self) {
        if let Some(handle) = self.schedule.take() {
            handle.abort();
        }
    }
}

/// Actor that owns the single [`Research`] entity.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResearchActor;

#[async_trait]
impl Actor for ResearchActor {
    type Msg = ResearchMessage;
    type State = ResearchActorState;
    type Arguments = Research;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        research: Research,
    ) -> Result<Self::State, ActorProcessingErr> {
        info!("Research actor started");
        Ok(ResearchActorState {
            research,
            schedule: None,
        })
    }

    async fn post_stop(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        state.cancel_schedule();
        info!("Research actor stopped");
        Ok(())
    }

    #[instrument(skip(self, myself, state))]
    async fn handle(
        &self,
        myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            ResearchMessage::Gather { reply } => {
                let result = state
                    .research
                    .gather()
                    .await
                    .map(|()| state.research.state().clone());
                let _ = reply.send(result);
            }
            ResearchMessage::ScheduledGather => {
                if let Err(e) = state.research.gather().await {
                    error!(error = %e, "Scheduled research gather failed");
                }
            }
            ResearchMessage::StartSchedule { interval } => {
                if state.schedule.is_some() {
                    warn!("Research schedule already running, restarting");
                    state.cancel_schedule();
                }

                info!(interval_secs = interval.as_secs(), "Starting research schedule");
                let myself_clone = myself.clone();
                let handle = tokio::spawn(async move {
                    let mut ticker = time::interval(interval);
                    loop {
                        ticker.tick().await;
                        if let Err(e) = myself_clone.send_message(ResearchMessage::ScheduledGather)
                        {
                            error!(error = ?e, "Failed to send ScheduledGather message");
                            break;
                        }
                    }
                });
                state.schedule = Some(handle);
            }
            ResearchMessage::StopSchedule => {
                info!("Stopping research schedule");
                state.cancel_schedule();
            }
            ResearchMessage::GetState { reply } => {
                let _ = reply.send(state.research.state().clone());
            }
        }
        Ok(())
    }
}
