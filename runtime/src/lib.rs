//! # Eventos Runtime
//!
//! Runtime for the eventos reducers.
//!
//! This crate provides the [`Store`] that owns application state, runs the
//! reducer for each action and executes the effects it returns.
//!
//! ## Core Components
//!
//! - **Store**: holds state behind a lock and coordinates reducer execution
//! - **Effect Executor**: runs effect descriptions and feeds produced actions back
//! - **Action Broadcast**: lets callers observe actions produced by effects
//!
//! ## Example
//!
//! ```ignore
//! use eventos_runtime::Store;
//!
//! let store = Store::new(AppState::default(), AppReducer::new(), environment);
//!
//! // Resolves once the API round trip and its follow-up actions have settled
//! store.send(AppAction::FetchEvent { slug }).await;
//!
//! let name = store.state(|s| s.event_name().map(str::to_owned)).await;
//! ```

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Timeout waiting for a terminal action
        ///
        /// Returned by `send_and_wait_for` when the timeout expires before
        /// a matching action is received.
        #[error("Timeout waiting for action")]
        Timeout,

        /// Action broadcast channel closed
        #[error("Action broadcast channel closed")]
        ChannelClosed,
    }
}

/// Store module - the runtime for reducers
pub mod store {
    use crate::error::StoreError;
    use eventos_core::{effect::Effect, reducer::Reducer};
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::{broadcast, RwLock};

    /// Default capacity of the action broadcast channel
    const DEFAULT_BROADCAST_CAPACITY: usize = 16;

    /// The Store - runtime coordinator for a reducer
    ///
    /// One store is created per request (server side) or per session; it is
    /// passed explicitly to whoever needs it rather than living in a global.
    ///
    /// # Execution model
    ///
    /// [`Store::send`] runs the reducer under the write lock, releases the lock,
    /// then executes the returned effects:
    ///
    /// - `Future`: awaited; a produced action is broadcast and sent back in
    /// - `Parallel`: children are awaited concurrently
    /// - `Sequential`: children are awaited in order
    /// - `Delay`: spawned on the tokio runtime, `send` does not wait for it
    ///
    /// So `send` resolves once every request chain started by the action has
    /// settled. There is no sequencing guard between concurrent sends: the
    /// last completed write wins.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        /// Actions produced by effects, for request/response callers
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + Clone + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_broadcast_capacity(
                initial_state,
                reducer,
                environment,
                DEFAULT_BROADCAST_CAPACITY,
            )
        }

        /// Create a new Store with custom action broadcast capacity
        ///
        /// Increase the capacity if observers frequently lag.
        #[must_use]
        pub fn with_broadcast_capacity(
            initial_state: S,
            reducer: R,
            environment: E,
            capacity: usize,
        ) -> Self {
            let (action_broadcast, _) = broadcast::channel(capacity.max(1));

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                action_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// Runs the reducer, then executes the resulting effects. Resolves when
        /// all non-delayed effects (and the actions they feed back) are done.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) {
            metrics::counter!("store.actions.sent").increment(1);

            let effects = {
                let mut state = self.state.write().await;
                self.reducer.reduce(&mut state, action, &self.environment)
            };

            for effect in effects {
                self.execute_effect(effect).await;
            }
        }

        /// Send an action and wait for a matching result action
        ///
        /// Subscribes to the action broadcast before sending, so an action
        /// produced while `send` runs is never missed.
        ///
        /// # Errors
        ///
        /// - [`StoreError::Timeout`]: no matching action before `timeout`
        /// - [`StoreError::ChannelClosed`]: the broadcast channel closed
        ///
        /// # Example
        ///
        /// ```ignore
        /// let result = store.send_and_wait_for(
        ///     AppAction::FetchEvent { slug },
        ///     |a| matches!(a, AppAction::EventLoaded(_) | AppAction::EventFetchFailed { .. }),
        ///     Duration::from_secs(10),
        /// ).await?;
        /// ```
        pub async fn send_and_wait_for<F>(
            &self,
            action: A,
            predicate: F,
            timeout: Duration,
        ) -> Result<A, StoreError>
        where
            F: Fn(&A) -> bool,
        {
            // Subscribe BEFORE sending to avoid race condition
            let mut rx = self.action_broadcast.subscribe();

            self.send(action).await;

            tokio::time::timeout(timeout, async {
                loop {
                    match rx.recv().await {
                        Ok(action) if predicate(&action) => return Ok(action),
                        Ok(_) => {},
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "Action observer lagged");
                        },
                        Err(broadcast::error::RecvError::Closed) => {
                            return Err(StoreError::ChannelClosed);
                        },
                    }
                }
            })
            .await
            .map_err(|_| StoreError::Timeout)?
        }

        /// Subscribe to actions produced by effects
        ///
        /// Actions sent directly through `send` are not broadcast.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Read from the current state
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Execute one effect description
        ///
        /// Boxed because `Future` effects recurse into `send`.
        fn execute_effect(&self, effect: Effect<A>) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
            Box::pin(async move {
                match effect {
                    Effect::None => {
                        tracing::trace!("Executing Effect::None (no-op)");
                    },
                    Effect::Future(fut) => {
                        metrics::counter!("store.effects.executed", "type" => "future").increment(1);
                        if let Some(action) = fut.await {
                            tracing::trace!("Effect::Future produced an action, sending to store");
                            // No receivers is fine
                            let _ = self.action_broadcast.send(action.clone());
                            self.send(action).await;
                        }
                    },
                    Effect::Delay { duration, action } => {
                        metrics::counter!("store.effects.executed", "type" => "delay").increment(1);
                        let store = self.clone();
                        tokio::spawn(async move {
                            tokio::time::sleep(duration).await;
                            tracing::trace!(?duration, "Effect::Delay elapsed, sending action");
                            let _ = store.action_broadcast.send((*action).clone());
                            store.send(*action).await;
                        });
                    },
                    Effect::Parallel(effects) => {
                        metrics::counter!("store.effects.executed", "type" => "parallel").increment(1);
                        futures::future::join_all(
                            effects.into_iter().map(|effect| self.execute_effect(effect)),
                        )
                        .await;
                    },
                    Effect::Sequential(effects) => {
                        metrics::counter!("store.effects.executed", "type" => "sequential").increment(1);
                        for effect in effects {
                            self.execute_effect(effect).await;
                        }
                    },
                }
            })
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }
}

// Re-export for convenience
pub use error::StoreError;
pub use store::Store;
