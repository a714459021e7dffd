//! State-change observers.
//!
//! Entities call every registered observer synchronously after each committed
//! mutation. Observers must not block; a slow or absent subscriber never holds
//! up the entity.

use std::fmt::Debug;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tracing::debug;

/// Receives the entity state after every mutation.
pub trait StateObserver<S>: Send + Sync {
    /// Called with the freshly committed state.
    fn on_state(&self, state: &S);
}

/// An ordered list of observers notified together.
pub struct Observers<S> {
    observers: Vec<Arc<dyn StateObserver<S>>>,
}

impl<S> Observers<S> {
    /// No observers.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Register an observer.
    pub fn push(&mut self, observer: Arc<dyn StateObserver<S>>) {
        self.observers.push(observer);
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, observer: Arc<dyn StateObserver<S>>) -> Self {
        self.push(observer);
        self
    }

    /// Append every observer from `other`, keeping their order.
    pub fn extend(&mut self, other: Observers<S>) {
        self.observers.extend(other.observers);
    }

    /// Notify every observer in registration order.
    pub fn notify(&self, state: &S) {
        for observer in &self.observers {
            observer.on_state(state);
        }
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<S> Default for Observers<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for Observers<S> {
    fn clone(&self) -> Self {
        Self {
            observers: self.observers.clone(),
        }
    }
}

impl<S> std::fmt::Debug for Observers<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.observers.len())
            .finish()
    }
}

/// Fans state out to any number of subscribers over a broadcast channel.
///
/// Sending with no live receivers is not an error; lagging receivers skip
/// ahead to newer states.
#[derive(Debug, Clone)]
pub struct BroadcastObserver<S> {
    sender: broadcast::Sender<S>,
}

impl<S: Clone> BroadcastObserver<S> {
    /// Create an observer buffering up to `capacity` states per receiver.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// A new receiver that sees every state sent after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<S> {
        self.sender.subscribe()
    }

    /// The underlying sender.
    pub fn sender(&self) -> broadcast::Sender<S> {
        self.sender.clone()
    }
}

impl<S: Clone + Send + Sync> StateObserver<S> for BroadcastObserver<S> {
    fn on_state(&self, state: &S) {
        let _ = self.sender.send(state.clone());
    }
}

/// Keeps the latest state in a watch channel for synchronous reads.
#[derive(Debug)]
pub struct WatchObserver<S> {
    sender: watch::Sender<S>,
}

impl<S> WatchObserver<S> {
    /// Create the observer and a receiver holding `initial`.
    pub fn channel(initial: S) -> (Self, watch::Receiver<S>) {
        let (sender, receiver) = watch::channel(initial);
        (Self { sender }, receiver)
    }
}

impl<S: Clone + Send + Sync> StateObserver<S> for WatchObserver<S> {
    fn on_state(&self, state: &S) {
        self.sender.send_replace(state.clone());
    }
}

/// Logs every state change at debug level.
#[derive(Debug, Clone)]
pub struct TracingObserver {
    entity: String,
}

impl TracingObserver {
    /// Log changes tagged with `entity` (a slug or well-known name).
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
        }
    }
}

impl<S: Debug> StateObserver<S> for TracingObserver {
    fn on_state(&self, state: &S) {
        debug!(entity = %self.entity, state = ?state, "State changed");
    }
}
