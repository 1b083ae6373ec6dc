//! Single-assignment deferred result
//!
//! A [`Deferred`] starts out pending and is settled at most once through its
//! [`Resolver`]. Settling consumes the resolver, so a second transition cannot
//! be expressed. Observers wait for the terminal state and match on [`Settled`].

use std::fmt;
use tokio::sync::watch;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DeferredError {
    #[error("Resolver was dropped before the result was settled")]
    Abandoned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredState<T, E> {
    Pending,
    Fulfilled(T),
    Rejected(E),
}

/// Terminal outcome of a deferred result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled<T, E> {
    Fulfilled(T),
    Rejected(E),
}

impl<T: Clone, E: Clone> DeferredState<T, E> {
    pub fn is_pending(&self) -> bool {
        matches!(self, DeferredState::Pending)
    }

    pub fn settled(&self) -> Option<Settled<T, E>> {
        match self {
            DeferredState::Pending => None,
            DeferredState::Fulfilled(value) => Some(Settled::Fulfilled(value.clone())),
            DeferredState::Rejected(reason) => Some(Settled::Rejected(reason.clone())),
        }
    }
}

impl<T, E> fmt::Display for DeferredState<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeferredState::Pending => write!(f, "<pending>"),
            DeferredState::Fulfilled(_) => write!(f, "<fulfilled>"),
            DeferredState::Rejected(_) => write!(f, "<rejected>"),
        }
    }
}

/// Write side of a deferred result.
#[derive(Debug)]
pub struct Resolver<T, E> {
    tx: watch::Sender<DeferredState<T, E>>,
}

impl<T: Clone, E: Clone> Resolver<T, E> {
    pub fn fulfill(self, value: T) {
        self.settle(DeferredState::Fulfilled(value));
    }

    pub fn reject(self, reason: E) {
        self.settle(DeferredState::Rejected(reason));
    }

    /// Current state as seen from the write side.
    pub fn state(&self) -> DeferredState<T, E> {
        self.tx.borrow().clone()
    }

    /// A new observer of this result.
    pub fn subscribe(&self) -> Deferred<T, E> {
        Deferred {
            rx: self.tx.subscribe(),
        }
    }

    fn settle(self, state: DeferredState<T, E>) {
        // send_replace stores the value even when every observer is gone
        self.tx.send_replace(state);
    }
}

/// Read side of a deferred result.
#[derive(Debug, Clone)]
pub struct Deferred<T, E> {
    rx: watch::Receiver<DeferredState<T, E>>,
}

impl<T: Clone, E: Clone> Deferred<T, E> {
    pub fn state(&self) -> DeferredState<T, E> {
        self.rx.borrow().clone()
    }

    /// Waits for the terminal state.
    pub async fn settled(mut self) -> Result<Settled<T, E>, DeferredError> {
        let state = self
            .rx
            .wait_for(|state| !state.is_pending())
            .await
            .map_err(|_| DeferredError::Abandoned)?;
        state.settled().ok_or(DeferredError::Abandoned)
    }
}

/// Creates a pending deferred result and the resolver that settles it.
pub fn deferred<T, E>() -> (Resolver<T, E>, Deferred<T, E>) {
    let (tx, rx) = watch::channel(DeferredState::Pending);
    (Resolver { tx }, Deferred { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fulfill_settles_fulfilled() {
        let (resolver, deferred) = deferred::<u32, String>();
        assert!(deferred.state().is_pending());

        resolver.fulfill(7);
        assert_eq!(deferred.state(), DeferredState::Fulfilled(7));
        assert_eq!(deferred.settled().await, Ok(Settled::Fulfilled(7)));
    }

    #[tokio::test]
    async fn test_reject_settles_rejected() {
        let (resolver, deferred) = deferred::<(), &'static str>();
        resolver.reject("nope");
        assert_eq!(deferred.settled().await, Ok(Settled::Rejected("nope")));
    }

    #[tokio::test]
    async fn test_settled_waits_for_resolution_from_task() {
        let (resolver, deferred) = deferred::<(), ()>();
        let observer = deferred.clone();
        let handle = tokio::spawn(async move {
            tokio::task::yield_now().await;
            resolver.fulfill(());
        });

        assert_eq!(observer.settled().await, Ok(Settled::Fulfilled(())));
        handle.await.unwrap();
        assert_eq!(deferred.state(), DeferredState::Fulfilled(()));
    }

    #[tokio::test]
    async fn test_dropped_resolver_is_abandoned() {
        let (resolver, deferred) = deferred::<(), ()>();
        drop(resolver);
        assert_eq!(deferred.settled().await, Err(DeferredError::Abandoned));
    }

    #[test]
    fn test_resolver_sees_its_own_state() {
        let (resolver, _deferred) = deferred::<(), ()>();
        assert_eq!(resolver.state().to_string(), "<pending>");
    }

    #[test]
    fn test_state_display() {
        assert_eq!(DeferredState::<(), ()>::Fulfilled(()).to_string(), "<fulfilled>");
        assert_eq!(DeferredState::<(), ()>::Rejected(()).to_string(), "<rejected>");
    }
}
