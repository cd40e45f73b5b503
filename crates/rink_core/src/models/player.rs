use serde::{Deserialize, Serialize};

/// Rosterable player for the training planner.
///
/// Identity fields come from the roster source at session load. The mutable
/// tail (`energy`, `assigned`, `current_x`/`current_y`) is owned by the
/// session controller and changes on every placement, removal, or demo tick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub number: u8,
    pub position: Position,
    pub team: String,
    pub team_color: String,

    /// Energy level, 0-100.
    pub energy: u8,

    /// Current rink coordinate in percent space, set only while assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_y: Option<f32>,

    /// True iff the session's placement map holds an entry for this player.
    /// The controller keeps both sides in sync within a single step.
    #[serde(default)]
    pub assigned: bool,
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        number: u8,
        position: Position,
        team: impl Into<String>,
        team_color: impl Into<String>,
        energy: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number,
            position,
            team: team.into(),
            team_color: team_color.into(),
            energy: energy.min(100),
            current_x: None,
            current_y: None,
            assigned: false,
        }
    }

    /// Display band for the energy bar.
    pub fn energy_band(&self) -> EnergyBand {
        EnergyBand::from_energy(self.energy)
    }
}

/// Ice hockey playing position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Position {
    #[serde(rename = "G")]
    Goalie,
    #[serde(rename = "D")]
    Defense,
    #[serde(rename = "C")]
    Center,
    #[serde(rename = "LW")]
    LeftWing,
    #[serde(rename = "RW")]
    RightWing,
}

impl Position {
    /// Short label shown on jerseys and drill slots.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Position::Goalie => "G",
            Position::Defense => "D",
            Position::Center => "C",
            Position::LeftWing => "LW",
            Position::RightWing => "RW",
        }
    }

    pub fn from_abbreviation(s: &str) -> Option<Self> {
        match s {
            "G" => Some(Position::Goalie),
            "D" => Some(Position::Defense),
            "C" => Some(Position::Center),
            "LW" => Some(Position::LeftWing),
            "RW" => Some(Position::RightWing),
            _ => None,
        }
    }

    /// Color key the rink surface uses for the player marker.
    pub fn color_key(&self) -> &'static str {
        match self {
            Position::Goalie => "purple",
            Position::Defense => "blue",
            Position::Center => "green",
            Position::LeftWing => "yellow",
            Position::RightWing => "orange",
        }
    }

    pub fn is_goalie(&self) -> bool {
        matches!(self, Position::Goalie)
    }

    pub fn is_skater(&self) -> bool {
        !self.is_goalie()
    }
}

/// Energy display band for the on-rink energy bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyBand {
    High,
    Medium,
    Low,
    Critical,
}

impl EnergyBand {
    pub fn from_energy(energy: u8) -> Self {
        if energy > 75 {
            EnergyBand::High
        } else if energy > 50 {
            EnergyBand::Medium
        } else if energy > 25 {
            EnergyBand::Low
        } else {
            EnergyBand::Critical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_abbreviation_roundtrip() {
        for pos in [
            Position::Goalie,
            Position::Defense,
            Position::Center,
            Position::LeftWing,
            Position::RightWing,
        ] {
            assert_eq!(Position::from_abbreviation(pos.abbreviation()), Some(pos));
        }
        assert_eq!(Position::from_abbreviation("X"), None);
    }

    #[test]
    fn test_position_serde_uses_abbreviations() {
        let json = serde_json::to_string(&Position::LeftWing).unwrap();
        assert_eq!(json, "\"LW\"");
        let back: Position = serde_json::from_str("\"G\"").unwrap();
        assert_eq!(back, Position::Goalie);
    }

    #[test]
    fn test_energy_band_boundaries() {
        assert_eq!(EnergyBand::from_energy(100), EnergyBand::High);
        assert_eq!(EnergyBand::from_energy(76), EnergyBand::High);
        assert_eq!(EnergyBand::from_energy(75), EnergyBand::Medium);
        assert_eq!(EnergyBand::from_energy(51), EnergyBand::Medium);
        assert_eq!(EnergyBand::from_energy(50), EnergyBand::Low);
        assert_eq!(EnergyBand::from_energy(26), EnergyBand::Low);
        assert_eq!(EnergyBand::from_energy(25), EnergyBand::Critical);
        assert_eq!(EnergyBand::from_energy(0), EnergyBand::Critical);
    }

    #[test]
    fn test_new_player_is_unassigned() {
        let p = Player::new("p1", "Alex Bouchard", 91, Position::Center, "Titans", "red", 100);
        assert!(!p.assigned);
        assert!(p.current_x.is_none());
        assert!(p.current_y.is_none());
    }

    #[test]
    fn test_energy_clamped_at_creation() {
        let p = Player::new("p1", "Alex", 91, Position::Center, "Titans", "red", 200);
        assert_eq!(p.energy, 100);
    }
}
