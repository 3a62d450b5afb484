//! AnimationDriver: gives tile transitions real duration.
//!
//! Each relocated tile gets a timer task; the engine's barrier suspends
//! until every timer has fired. Merging tiles hold the signal a little
//! longer so the merge finalization lands after the pulse would end.
//! Must run inside a tokio runtime (the binary's `block_on` provides
//! one).

use std::time::Duration;

use crate::core::TileId;
use crate::engine::{TileChange, TransitionDriver, TransitionHandle};
use crate::types::{MERGE_PULSE_MS, MOVE_TRANSITION_MS};

#[derive(Debug, Default, Clone, Copy)]
pub struct AnimationDriver;

impl TransitionDriver for AnimationDriver {
    fn begin(&mut self, _tile: TileId, change: TileChange) -> TransitionHandle {
        let (handle, signal) = TransitionHandle::pending();
        let ms = if change.merging {
            MOVE_TRANSITION_MS + MERGE_PULSE_MS
        } else {
            MOVE_TRANSITION_MS
        };

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            signal.complete();
        });

        handle
    }
}
