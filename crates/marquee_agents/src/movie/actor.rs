//! Actor hosting one movie entity.

use crate::{Movie, MovieGenerator, Observers};
use async_trait::async_trait;
use marquee_core::{FieldName, FieldUpdate, MovieState};
use marquee_error::MarqueeResult;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Messages a movie actor handles, one at a time.
///
/// Every message replies with the state committed by the operation, so a
/// caller never has to issue a second read.
#[derive(Debug)]
pub enum MovieMessage {
    /// Retitle and regenerate every unlocked generated field.
    Regenerate {
        /// New title
        title: String,
        /// Reply port for RPC response.
        reply: RpcReplyPort<MarqueeResult<MovieState>>,
    },
    /// Lock a field.
    Lock {
        /// Field to lock
        field: FieldName,
        /// Reply port for RPC response.
        reply: RpcReplyPort<MovieState>,
    },
    /// Unlock a field.
    Unlock {
        /// Field to unlock
        field: FieldName,
        /// Reply port for RPC response.
        reply: RpcReplyPort<MovieState>,
    },
    /// Write one field, which also locks it.
    Update {
        /// The new value
        update: FieldUpdate,
        /// Reply port for RPC response.
        reply: RpcReplyPort<MovieState>,
    },
    /// Read the current state.
    GetState {
        /// Reply port for RPC response.
        reply: RpcReplyPort<MovieState>,
    },
}

/// Arguments for spawning a [`MovieActor`].
pub struct MovieActorArgs {
    /// Initial state, usually [`MovieState::for_slug`]
    pub state: MovieState,
    /// Source of generated values
    pub generator: Arc<dyn MovieGenerator>,
    /// Observers notified after every mutation
    pub observers: Observers<MovieState>,
}

/// Actor that owns a [`Movie`] and applies messages to it in order.
///
/// A regeneration runs to completion before the next message is taken off the
/// queue, so readers queued behind it see the finished result.
#[derive(Debug, Default, Clone, Copy)]
pub struct MovieActor;

#[async_trait]
impl Actor for MovieActor {
    type Msg = MovieMessage;
    type State = Movie;
    type Arguments = MovieActorArgs;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        args: MovieActorArgs,
    ) -> Result<Self::State, ActorProcessingErr> {
        info!(slug = ?args.state.slug(), "Movie actor started");
        Ok(Movie::new(args.state, args.generator).with_observers(args.observers))
    }

    async fn post_stop(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        info!(slug = ?state.state().slug(), "Movie actor stopped");
        Ok(())
    }

    #[instrument(skip_all, fields(slug = ?state.state().slug()))]
    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            MovieMessage::Regenerate { title, reply } => {
                let result = state
                    .regenerate(title)
                    .await
                    .map(|()| state.state().clone());
                let _ = reply.send(result);
            }
            MovieMessage::Lock { field, reply } => {
                state.lock(field);
                let _ = reply.send(state.state().clone());
            }
            MovieMessage::Unlock { field, reply } => {
                state.unlock(field);
                let _ = reply.send(state.state().clone());
            }
            MovieMessage::Update { update, reply } => {
                debug!(field = %update.field(), "Applying update");
                state.update(update);
                let _ = reply.send(state.state().clone());
            }
            MovieMessage::GetState { reply } => {
                let _ = reply.send(state.state().clone());
            }
        }
        Ok(())
    }
}
