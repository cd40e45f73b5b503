use serde::{Deserialize, Serialize};

use super::player::Position;

/// Drill category tag used for catalog filtering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DrillCategory {
    Skating,
    Shooting,
    Passing,
    Defensive,
    PowerPlay,
    PenaltyKill,
    Scrimmage,
}

/// What a drill slot expects at its coordinate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Player,
    Cone,
    Puck,
    Goal,
}

/// A drill-defined target location on the rink, in percent space.
///
/// Coordinates live in [0,100] on both axes. Only `Player` slots participate
/// in snapping and auto-positioning; cones, pucks and goals are scenery the
/// rink surface draws.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slot {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub kind: SlotKind,

    /// Playing position the slot calls for, only meaningful for player slots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    pub required: bool,
}

impl Slot {
    pub fn player(id: impl Into<String>, x: f32, y: f32, position: Position) -> Self {
        Self { id: id.into(), x, y, kind: SlotKind::Player, position: Some(position), required: true }
    }

    pub fn cone(id: impl Into<String>, x: f32, y: f32) -> Self {
        Self { id: id.into(), x, y, kind: SlotKind::Cone, position: None, required: true }
    }

    pub fn puck(id: impl Into<String>, x: f32, y: f32) -> Self {
        Self { id: id.into(), x, y, kind: SlotKind::Puck, position: None, required: true }
    }

    pub fn goal(id: impl Into<String>, x: f32, y: f32) -> Self {
        Self { id: id.into(), x, y, kind: SlotKind::Goal, position: None, required: true }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn is_player_slot(&self) -> bool {
        self.kind == SlotKind::Player
    }

    /// Euclidean distance from this slot to a rink-percent coordinate.
    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A named exercise: roster size range plus a fixed slot layout.
///
/// Immutable once defined; the catalog owns the definitions and sessions
/// select (never copy-and-edit) them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Drill {
    pub id: String,
    pub name: String,
    pub category: DrillCategory,

    /// Planned duration in minutes.
    pub duration_minutes: u32,

    pub description: String,
    pub min_players: u8,
    pub max_players: u8,

    /// Slot layout, ordered. Catalog order breaks snapping ties.
    pub slots: Vec<Slot>,

    /// Step-by-step coaching instructions shown next to the rink.
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl Drill {
    /// Player-type slots in catalog order.
    pub fn player_slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(|s| s.is_player_slot())
    }

    pub fn player_slot_count(&self) -> usize {
        self.player_slots().count()
    }

    pub fn slot_by_id(&self, slot_id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == slot_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_drill() -> Drill {
        Drill {
            id: "t1".to_string(),
            name: "Test".to_string(),
            category: DrillCategory::Skating,
            duration_minutes: 10,
            description: String::new(),
            min_players: 2,
            max_players: 4,
            slots: vec![
                Slot::player("s1", 20.0, 30.0, Position::Center),
                Slot::cone("c1", 50.0, 50.0),
                Slot::player("s2", 20.0, 70.0, Position::LeftWing),
            ],
            instructions: vec![],
        }
    }

    #[test]
    fn test_player_slots_keep_catalog_order() {
        let drill = sample_drill();
        let ids: Vec<&str> = drill.player_slots().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2"]);
        assert_eq!(drill.player_slot_count(), 2);
    }

    #[test]
    fn test_slot_distance() {
        let slot = Slot::player("s", 50.0, 50.0, Position::Center);
        assert!((slot.distance_to(52.0, 49.0) - 5.0f32.sqrt()).abs() < 1e-5);
        assert_eq!(slot.distance_to(50.0, 50.0), 0.0);
    }

    #[test]
    fn test_slot_by_id() {
        let drill = sample_drill();
        assert!(drill.slot_by_id("c1").is_some());
        assert!(drill.slot_by_id("nope").is_none());
    }
}
