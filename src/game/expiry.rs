//! Deadline queue for unclaimed power-ups.
//!
//! Every spawned power-up gets one entry. Entries are drained against the
//! game clock once per frame; an entry whose power-up was already picked up
//! (or that belongs to a previous game) simply finds nothing to remove.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use super::{GameState, PowerUpId};

#[derive(Debug, Default, Clone)]
pub struct ExpiryQueue {
    heap: BinaryHeap<Reverse<(Duration, PowerUpId)>>,
}

impl ExpiryQueue {
    pub fn schedule(&mut self, id: PowerUpId, deadline: Duration) {
        self.heap.push(Reverse((deadline, id)));
    }

    /// Pops every entry whose deadline is at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: Duration) -> Vec<PowerUpId> {
        let mut due = Vec::new();
        while let Some(Reverse((deadline, id))) = self.heap.peek().copied() {
            if deadline > now {
                break;
            }
            self.heap.pop();
            due.push(id);
        }
        due
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

/// Removes unclaimed power-ups whose board lifetime is over.
///
/// Returns how many were removed. Runs whatever the game phase is.
pub fn expire_map_power_ups(state: &mut GameState, now: Duration) -> usize {
    let mut removed = 0;
    for id in state.expiry.drain_due(now) {
        if let Some(index) = state
            .power_ups
            .iter()
            .position(|p| p.id == id && !p.active)
        {
            let power_up = state.power_ups.remove(index);
            bevy::log::debug!("{} expired unclaimed", power_up.kind);
            removed += 1;
        }
    }
    removed
}
