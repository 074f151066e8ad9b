use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;

use crate::config::BotConfig;
use crate::error::CambioError;
use crate::timeframe::Timeframe;

/// Push-based streaming channel for one venue.
///
/// Implementations own their receive loop; this contract only covers
/// identity matching, pre-start initialization, and the start call. A
/// channel must be initialized with the resolved timeframes and pairs
/// before it is started, and is started at most once.
#[async_trait]
pub trait VenueStream: Send + Sync {
    /// Identity of the venue this channel serves, used for registry matching.
    fn venue(&self) -> &'static str;

    /// Hand the channel the resolved timeframes and pairs it should
    /// subscribe to. Must be called before [`VenueStream::start`].
    fn init(&mut self, timeframes: &[Timeframe], pairs: &[String]) -> Result<(), CambioError>;

    /// Start the channel's own receive loop and return a handle to it.
    async fn start(&mut self) -> Result<StreamHandle, CambioError>;
}

/// Factory registered for one venue identity.
pub trait StreamFactory: Send + Sync {
    /// The single venue identity this factory serves.
    fn venue(&self) -> &'static str;

    /// Build an uninitialized channel for the given configuration.
    fn create(&self, config: &BotConfig) -> Box<dyn VenueStream>;
}

/// Registration table matching venue identities to streaming factories.
///
/// Exact-match lookup only; a venue identity may be claimed by at most one
/// factory. The table is passed to the coordinator by value, so there is no
/// process-global registration state.
#[derive(Default)]
pub struct StreamRegistry {
    by_venue: HashMap<&'static str, Arc<dyn StreamFactory>>,
}

impl StreamRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under the venue identity it declares.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the identity is already claimed; two
    /// implementations claiming the same venue is a build-time mistake, not
    /// something to resolve at runtime.
    pub fn register(&mut self, factory: Arc<dyn StreamFactory>) -> Result<(), CambioError> {
        let venue = factory.venue();
        if self.by_venue.contains_key(venue) {
            return Err(CambioError::invalid_arg(format!(
                "streaming implementation already registered for venue {venue}"
            )));
        }
        self.by_venue.insert(venue, factory);
        Ok(())
    }

    /// Exact-match lookup by venue identity.
    #[must_use]
    pub fn lookup(&self, venue: &str) -> Option<&Arc<dyn StreamFactory>> {
        self.by_venue.get(venue)
    }

    /// Number of registered factories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_venue.len()
    }

    /// Whether no factory is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_venue.is_empty()
    }
}

/// Abstraction over a handle that can be queried for completion and aborted.
pub trait Abortable {
    /// Abort the underlying task if it is still running.
    fn abort(&mut self);
    /// Return `true` if the underlying task has completed.
    fn is_finished(&self) -> bool;
}

impl Abortable for JoinHandle<()> {
    fn abort(&mut self) {
        // JoinHandle::abort takes &self
        Self::abort(self);
    }

    fn is_finished(&self) -> bool {
        Self::is_finished(self)
    }
}

/// Abstraction over a one-shot stop signal.
pub trait Stoppable {
    /// Send a best-effort stop signal to request graceful shutdown.
    fn send(self);
}

impl Stoppable for tokio::sync::oneshot::Sender<()> {
    fn send(self) {
        let _ = Self::send(self, ());
    }
}

/// Drop-time logic for stream handles:
/// - send a best-effort stop signal if present
/// - abort the task if it hasn't finished yet
pub fn drop_impl<H, S>(inner: &mut Option<H>, stop_tx: &mut Option<S>)
where
    H: Abortable,
    S: Stoppable,
{
    if let Some(tx) = stop_tx.take() {
        tx.send();
    }
    if let Some(mut h) = inner.take()
        && !h.is_finished()
    {
        h.abort();
    }
}

/// Handle to a started streaming channel's receive loop.
///
/// Dropping the handle requests shutdown and aborts the loop if it does not
/// finish on its own; [`StreamHandle::stop`] waits for a graceful exit.
pub struct StreamHandle {
    inner: Option<JoinHandle<()>>,
    stop_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl StreamHandle {
    /// Wrap a spawned receive loop and its stop signal.
    #[must_use]
    pub fn new(task: JoinHandle<()>, stop_tx: tokio::sync::oneshot::Sender<()>) -> Self {
        Self {
            inner: Some(task),
            stop_tx: Some(stop_tx),
        }
    }

    /// Whether the receive loop has completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.inner.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Signal the loop to stop and wait for it to finish.
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(h) = self.inner.take() {
            let _ = h.await;
        }
    }
}

impl Drop for StreamHandle {
    fn drop(&mut self) {
        drop_impl(&mut self.inner, &mut self.stop_tx);
    }
}
