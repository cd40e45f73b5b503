//! Session controller: the single owner of session and roster state.
//!
//! Every mutation of the placement map goes through here, and every one of
//! them updates the roster's `assigned` flags in the same step, so the two
//! representations cannot diverge. The controller is an owned value handed
//! to collaborators by `&mut` borrow; there is no global session.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, SessionError};
use crate::models::{Drill, Placement, Player, Session};
use crate::rink::{clamp_percent, SNAP_RADIUS_PCT};
use crate::roster::RosterModel;

/// Session state machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    DrillSelected,
    Running,
}

/// Controller knobs that the spec leaves to the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementPolicy {
    /// Reject placements beyond the selected drill's `max_players`.
    /// Off by default: over-filling a drill is permitted, matching the
    /// manual workflow where the coach validates counts in the UI.
    pub enforce_capacity: bool,

    /// Snap radius in percent units. Hosts that want snapping to feel the
    /// same at every zoom level can rescale this per viewport.
    pub snap_radius_pct: f32,
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        Self { enforce_capacity: false, snap_radius_pct: SNAP_RADIUS_PCT }
    }
}

#[derive(Debug, Clone)]
pub struct SessionController {
    session: Session,
    roster: RosterModel,
    policy: PlacementPolicy,

    /// Guard value for scheduled work. Bumped on every manual stop/clear;
    /// a scheduled step captured under an older epoch must not apply.
    epoch: u64,
}

impl SessionController {
    pub fn new(session: Session, roster: RosterModel) -> Self {
        Self { session, roster, policy: PlacementPolicy::default(), epoch: 0 }
    }

    pub fn with_policy(session: Session, roster: RosterModel, policy: PlacementPolicy) -> Self {
        Self { session, roster, policy, epoch: 0 }
    }

    // ========================
    // State machine
    // ========================

    /// Select a drill. Existing placements are left untouched.
    pub fn select_drill(&mut self, drill: Drill) {
        debug!(drill_id = %drill.id, "drill selected");
        self.session.current_drill = Some(drill);
    }

    /// Start the selected drill. Rejected without mutation when no drill is
    /// selected; elapsed time restarts from zero on every start.
    pub fn start_drill(&mut self) -> Result<()> {
        if self.session.current_drill.is_none() {
            warn!("start_drill rejected: no drill selected");
            return Err(SessionError::NoDrillSelected);
        }
        self.session.is_running = true;
        self.session.elapsed_secs = 0;
        Ok(())
    }

    /// Stop the running drill and drop the selection. Bumps the epoch so
    /// any scheduled demo step queued before the stop is discarded.
    pub fn stop_training(&mut self) {
        self.session.is_running = false;
        self.session.current_drill = None;
        self.epoch += 1;
    }

    pub fn phase(&self) -> SessionPhase {
        if self.session.is_running {
            SessionPhase::Running
        } else if self.session.current_drill.is_some() {
            SessionPhase::DrillSelected
        } else {
            SessionPhase::Idle
        }
    }

    // ========================
    // Placement
    // ========================

    /// Place a player at a dropped coordinate, snapping to the nearest free
    /// player slot of the selected drill when one is within the snap radius.
    ///
    /// Unknown player ids are a silent no-op (stale reference from an old
    /// session). The placement map and the roster assignment update in the
    /// same step.
    pub fn place_player(&mut self, player_id: &str, x: f32, y: f32) -> Result<()> {
        if !self.roster.contains(player_id) {
            debug!(player_id, "place_player ignored: unknown player");
            return Ok(());
        }

        if self.policy.enforce_capacity {
            if let Some(drill) = &self.session.current_drill {
                let already_placed = self.session.placements.contains_key(player_id);
                if !already_placed && self.session.placements.len() >= drill.max_players as usize {
                    return Err(SessionError::CapacityExceeded {
                        placed: self.session.placements.len(),
                        max: drill.max_players,
                    });
                }
            }
        }

        let (x, y) = clamp_percent((x, y));
        let placement = match self.snap_target(player_id, x, y) {
            Some((sx, sy, slot_id)) => {
                debug!(player_id, slot_id = %slot_id, "placement snapped to slot");
                Placement::at_slot(sx, sy, slot_id)
            }
            None => Placement::free(x, y),
        };

        let coords = (placement.x, placement.y);
        self.session.placements.insert(player_id.to_string(), placement);
        self.roster.set_assignment(player_id, true, Some(coords));
        Ok(())
    }

    /// Nearest free player slot within the snap radius, ties broken by
    /// catalog order. A slot claimed by a different player is never a
    /// candidate: later drops fall back to free placement.
    fn snap_target(&self, player_id: &str, x: f32, y: f32) -> Option<(f32, f32, String)> {
        let drill = self.session.current_drill.as_ref()?;

        let mut best: Option<(f32, &str, f32, f32)> = None;
        for slot in drill.player_slots() {
            if self.session.slot_claimed_by_other(&slot.id, player_id) {
                continue;
            }
            let dist = slot.distance_to(x, y);
            if dist >= self.policy.snap_radius_pct {
                continue;
            }
            // Strict less-than keeps the earliest slot on exact ties.
            if best.map_or(true, |(d, ..)| dist < d) {
                best = Some((dist, &slot.id, slot.x, slot.y));
            }
        }
        best.map(|(_, id, sx, sy)| (sx, sy, id.to_string()))
    }

    /// Remove a player from the rink. No-op for unplaced or unknown ids.
    pub fn remove_player(&mut self, player_id: &str) {
        if self.session.placements.remove(player_id).is_none() {
            return;
        }
        self.roster.set_assignment(player_id, false, None);
    }

    /// Remove every placement and clear all assignment flags in one step.
    /// Bumps the epoch: a clear is a manual intervention that invalidates
    /// pending scheduled work.
    pub fn clear_rink(&mut self) {
        self.session.placements.clear();
        self.roster.clear_assignments();
        self.epoch += 1;
    }

    /// Fill the selected drill's free player slots with unassigned players:
    /// roster order on one side, catalog order on the other, stopping when
    /// either runs out. Already-assigned players and non-player slots are
    /// untouched. No-op without a selected drill.
    pub fn auto_position(&mut self) {
        let Some(drill) = self.session.current_drill.as_ref() else {
            return;
        };

        let mut capacity_left = if self.policy.enforce_capacity {
            (drill.max_players as usize).saturating_sub(self.session.placements.len())
        } else {
            usize::MAX
        };

        let free_slots: Vec<(String, f32, f32)> = drill
            .player_slots()
            .filter(|slot| !self.session.slot_claimed_by_other(&slot.id, ""))
            .map(|slot| (slot.id.clone(), slot.x, slot.y))
            .collect();
        let unassigned: Vec<String> =
            self.roster.list_unassigned().iter().map(|p| p.id.clone()).collect();

        for ((slot_id, x, y), player_id) in free_slots.into_iter().zip(unassigned) {
            if capacity_left == 0 {
                break;
            }
            self.session
                .placements
                .insert(player_id.clone(), Placement::at_slot(x, y, slot_id));
            self.roster.set_assignment(&player_id, true, Some((x, y)));
            capacity_left -= 1;
        }
    }

    /// Move an already-placed player, keeping its slot binding. Used by the
    /// demo sequencer's path animation; no-op for unplaced players.
    pub fn update_placement_position(&mut self, player_id: &str, x: f32, y: f32) {
        let (x, y) = clamp_percent((x, y));
        let Some(placement) = self.session.placements.get_mut(player_id) else {
            return;
        };
        placement.x = x;
        placement.y = y;
        self.roster.set_assignment(player_id, true, Some((x, y)));
    }

    // ========================
    // Time
    // ========================

    /// Advance elapsed time; gated on the running flag.
    pub fn advance_elapsed(&mut self, delta_secs: u32) {
        if self.session.is_running {
            self.session.elapsed_secs += delta_secs;
        }
    }

    // ========================
    // Read accessors
    // ========================

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn roster(&self) -> &RosterModel {
        &self.roster
    }

    pub fn current_drill(&self) -> Option<&Drill> {
        self.session.current_drill.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.session.elapsed_secs
    }

    pub fn placements(&self) -> &HashMap<String, Placement> {
        &self.session.placements
    }

    pub fn placement(&self, player_id: &str) -> Option<&Placement> {
        self.session.placements.get(player_id)
    }

    pub fn assigned_count(&self) -> usize {
        self.session.placements.len()
    }

    pub fn assigned_players(&self) -> Vec<&Player> {
        self.roster.list_assigned()
    }

    pub fn unassigned_players(&self) -> Vec<&Player> {
        self.roster.list_unassigned()
    }

    pub fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}
