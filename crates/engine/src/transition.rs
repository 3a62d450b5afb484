//! Per-tile transition-completion signals.
//!
//! The move engine never blocks a thread: after sliding, it suspends on
//! the completion signal of every tile that moved, and only then
//! finalizes merges and spawns. The render collaborator decides when a
//! transition is done; headless callers use [`InstantDriver`] and the
//! barrier degenerates to a no-op.

use tokio::sync::oneshot;

use crate::core::TileId;
use crate::types::TileValue;

/// Single-fire completion signal for one tile's move/merge transition.
///
/// Waiting is idempotent with respect to pending work: a handle created
/// with [`TransitionHandle::ready`] (no animation pending) resolves
/// immediately, and a handle whose [`TransitionSignal`] was dropped
/// resolves as well. The barrier must never deadlock on a sloppy driver.
#[derive(Debug)]
pub struct TransitionHandle {
    rx: Option<oneshot::Receiver<()>>,
}

impl TransitionHandle {
    /// A handle with no pending transition; resolves immediately.
    pub fn ready() -> Self {
        Self { rx: None }
    }

    /// A pending handle plus the signal that fires it.
    pub fn pending() -> (Self, TransitionSignal) {
        let (tx, rx) = oneshot::channel();
        (Self { rx: Some(rx) }, TransitionSignal { tx: Some(tx) })
    }

    /// Suspend until the transition completes.
    pub async fn wait(mut self) {
        if let Some(rx) = self.rx.take() {
            // A dropped sender counts as completed.
            let _ = rx.await;
        }
    }
}

/// The resolving end of a [`TransitionHandle`].
#[derive(Debug)]
pub struct TransitionSignal {
    tx: Option<oneshot::Sender<()>>,
}

impl TransitionSignal {
    /// Mark the transition as finished, waking the waiting resolution.
    pub fn complete(mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(());
        }
    }
}

/// What a single tile does during one move resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileChange {
    pub from: (u8, u8),
    pub to: (u8, u8),
    /// True when the tile is staged to merge into the destination.
    pub merging: bool,
    pub value: TileValue,
}

/// The render/animation collaborator boundary.
///
/// The engine registers one transition per relocated tile and has no
/// visibility into how (or whether) the change is rendered; it only
/// requires that every returned handle eventually resolves.
pub trait TransitionDriver {
    fn begin(&mut self, tile: TileId, change: TileChange) -> TransitionHandle;
}

/// Driver that completes every transition immediately (headless play,
/// tests, benches).
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantDriver;

impl TransitionDriver for InstantDriver {
    fn begin(&mut self, _tile: TileId, _change: TileChange) -> TransitionHandle {
        TransitionHandle::ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ready_handle_resolves_immediately() {
        TransitionHandle::ready().wait().await;
    }

    #[tokio::test]
    async fn test_pending_handle_resolves_on_complete() {
        let (handle, signal) = TransitionHandle::pending();
        signal.complete();
        handle.wait().await;
    }

    #[tokio::test]
    async fn test_dropped_signal_does_not_deadlock() {
        let (handle, signal) = TransitionHandle::pending();
        drop(signal);
        handle.wait().await;
    }

    #[tokio::test]
    async fn test_pending_handle_waits_for_signal() {
        let (handle, signal) = TransitionHandle::pending();

        let waiter = tokio::spawn(handle.wait());
        // Give the waiter a chance to suspend before firing.
        tokio::task::yield_now().await;
        assert!(!waiter.is_finished());

        signal.complete();
        waiter.await.unwrap();
    }

    #[tokio::test]
    async fn test_instant_driver() {
        let mut driver = InstantDriver;
        let change = TileChange {
            from: (0, 1),
            to: (0, 0),
            merging: false,
            value: 2,
        };
        driver.begin(1, change).wait().await;
    }
}
