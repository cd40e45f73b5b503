//! Working roster for the active session.
//!
//! Holds the rosterable players in source order and their mutable training
//! attributes. All mutation goes through the session controller; the model
//! itself is deliberately forgiving (unknown ids are no-ops) to stay robust
//! against stale references from a previous session.

use crate::models::Player;
use crate::rink::clamp_percent;

#[derive(Debug, Clone, Default)]
pub struct RosterModel {
    players: Vec<Player>,
}

impl RosterModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the working roster. All players come back unassigned with
    /// coordinates unset, regardless of the state they arrive in.
    pub fn initialize(&mut self, players: Vec<Player>) {
        self.players = players;
        for player in &mut self.players {
            player.assigned = false;
            player.current_x = None;
            player.current_y = None;
        }
    }

    /// Set or clear a player's assignment. Unknown ids are a silent no-op.
    ///
    /// Coordinates are clamped to the rink and only stored while assigned.
    pub fn set_assignment(&mut self, player_id: &str, assigned: bool, coords: Option<(f32, f32)>) {
        let Some(player) = self.players.iter_mut().find(|p| p.id == player_id) else {
            return;
        };

        player.assigned = assigned;
        if assigned {
            if let Some(pos) = coords {
                let (x, y) = clamp_percent(pos);
                player.current_x = Some(x);
                player.current_y = Some(y);
            }
        } else {
            player.current_x = None;
            player.current_y = None;
        }
    }

    /// Clear every assignment in one step.
    pub fn clear_assignments(&mut self) {
        for player in &mut self.players {
            player.assigned = false;
            player.current_x = None;
            player.current_y = None;
        }
    }

    pub fn get(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.get(player_id).is_some()
    }

    /// Assigned players, roster order preserved.
    pub fn list_assigned(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.assigned).collect()
    }

    /// Unassigned players, roster order preserved.
    pub fn list_unassigned(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| !p.assigned).collect()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
