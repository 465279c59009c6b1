//! Power-up effects: activation, ageing and reverting.
//!
//! Several instances of one kind may run at once, each with its own
//! countdown. When one runs out, the flag it drove is re-derived from the
//! instances still running (the most recently activated wins), so an early
//! expiry never cancels an effect that another live instance provides.

use std::time::Duration;

use bevy::log::info;

use super::{ActivePowerUp, GameState, PowerUp, PowerUpKind};

/// Applies the effect of a picked-up power-up and starts its countdown.
pub fn activate_power_up(state: &mut GameState, mut power_up: PowerUp) {
    power_up.active = true;
    apply_effect(state, power_up.kind);
    info!("{} activated for {}s", power_up.kind, power_up.duration_secs);
    state.active_power_ups.push(ActivePowerUp {
        id: power_up.id,
        kind: power_up.kind,
        remaining_secs: power_up.duration_secs,
    });
}

/// Ages every running effect by `delta` and reverts those that ran out.
///
/// Returns the kinds that expired, in list order.
pub fn update_power_ups(state: &mut GameState, delta: Duration) -> Vec<PowerUpKind> {
    let elapsed = delta.as_secs_f64();
    let mut expired = Vec::new();
    state.active_power_ups.retain_mut(|p| {
        p.remaining_secs -= elapsed;
        if p.remaining_secs <= 0.0 {
            expired.push(p.kind);
            false
        } else {
            true
        }
    });
    for kind in &expired {
        revert_effect(state, *kind);
    }
    expired
}

/// Uses up the shield: clears the flag and drops the oldest running Shield.
pub fn consume_shield(state: &mut GameState) {
    if let Some(index) = state
        .active_power_ups
        .iter()
        .position(|p| p.kind == PowerUpKind::Shield)
    {
        state.active_power_ups.remove(index);
    }
    state.has_shield = false;
    info!("Shield absorbed a hit");
}

fn apply_effect(state: &mut GameState, kind: PowerUpKind) {
    match kind {
        PowerUpKind::SpeedBoost => state.speed_multiplier = 2.0,
        PowerUpKind::Shield => state.has_shield = true,
        PowerUpKind::ScoreMultiplier => state.score_multiplier = 2,
        PowerUpKind::SlowMotion => state.speed_multiplier = 0.5,
    }
}

fn revert_effect(state: &mut GameState, kind: PowerUpKind) {
    let still_running = state.active_power_ups.iter().any(|p| p.kind == kind);
    match kind {
        PowerUpKind::SpeedBoost | PowerUpKind::SlowMotion => {
            let latest = state
                .active_power_ups
                .iter()
                .rev()
                .find(|p| p.kind.affects_speed())
                .map(|p| p.kind);
            match latest {
                Some(other) => apply_effect(state, other),
                None => state.speed_multiplier = 1.0,
            }
        }
        PowerUpKind::Shield => state.has_shield = still_running,
        PowerUpKind::ScoreMultiplier => {
            state.score_multiplier = if still_running { 2 } else { 1 };
        }
    }
}
