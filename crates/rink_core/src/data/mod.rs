//! Embedded planner data.
//!
//! The default roster ships as JSON embedded at compile time with
//! `include_str!`, so a fresh session needs no file I/O or backend call.

use std::sync::OnceLock;

use crate::models::Player;

/// Default Titans U15 AAA roster (~2KB).
pub const DEFAULT_ROSTER_JSON: &str = include_str!("../../data/default_roster.json");

static DEFAULT_ROSTER: OnceLock<Vec<Player>> = OnceLock::new();

/// The embedded default roster, parsed once.
///
/// The embedded JSON is validated by tests; a corrupt edit fails there, not
/// at runtime.
pub fn default_roster() -> &'static [Player] {
    DEFAULT_ROSTER
        .get_or_init(|| serde_json::from_str(DEFAULT_ROSTER_JSON).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    #[test]
    fn test_embedded_roster_parses() {
        let roster: Vec<Player> = serde_json::from_str(DEFAULT_ROSTER_JSON).unwrap();
        assert_eq!(roster.len(), 20);
    }

    #[test]
    fn test_default_roster_contents() {
        let roster = default_roster();
        assert_eq!(roster.len(), 20);

        let first = &roster[0];
        assert_eq!(first.id, "p1");
        assert_eq!(first.name, "Alex Bouchard");
        assert_eq!(first.number, 91);
        assert_eq!(first.position, Position::Center);
        assert!(!first.assigned);

        // Two goalies in the default roster.
        let goalies = roster.iter().filter(|p| p.position.is_goalie()).count();
        assert_eq!(goalies, 2);
    }

    #[test]
    fn test_default_roster_energies_in_range() {
        assert!(default_roster().iter().all(|p| p.energy <= 100));
    }
}
