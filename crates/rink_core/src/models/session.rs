use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::drill::Drill;

/// One entry of the session's placement map.
///
/// `slot_id` is an explicit player-to-slot binding: it is set when the
/// placement snapped onto a drill slot and stays `None` for free placements.
/// Correlating players with slots by list index is deliberately not done
/// anywhere; reordering either list must never mis-pair them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<String>,
}

impl Placement {
    pub fn free(x: f32, y: f32) -> Self {
        Self { x, y, slot_id: None }
    }

    pub fn at_slot(x: f32, y: f32, slot_id: impl Into<String>) -> Self {
        Self { x, y, slot_id: Some(slot_id.into()) }
    }
}

/// Active training session.
///
/// Created once per page visit and mutated only through the session
/// controller; there is no persistence across visits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub team: String,
    pub date: DateTime<Utc>,

    /// Total planned duration in minutes.
    pub duration_minutes: u32,

    /// Currently selected drill, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_drill: Option<Drill>,

    /// player id -> placement. Kept in lockstep with the roster's
    /// `assigned` flags by the controller.
    #[serde(default)]
    pub placements: HashMap<String, Placement>,

    pub is_running: bool,

    /// Elapsed drill time in seconds. Advances only while running.
    pub elapsed_secs: u32,
}

impl Session {
    pub fn new(name: impl Into<String>, team: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            team: team.into(),
            date: Utc::now(),
            duration_minutes,
            current_drill: None,
            placements: HashMap::new(),
            is_running: false,
            elapsed_secs: 0,
        }
    }

    /// Whether the given player-type slot is claimed by a player other than
    /// `except_player`.
    pub fn slot_claimed_by_other(&self, slot_id: &str, except_player: &str) -> bool {
        self.placements
            .iter()
            .any(|(pid, p)| pid != except_player && p.slot_id.as_deref() == Some(slot_id))
    }
}
