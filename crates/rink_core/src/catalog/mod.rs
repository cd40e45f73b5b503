//! Static drill catalog.
//!
//! Definitions are built once and served in definition order; that order is
//! also what breaks ties during snapping and feeds auto-positioning.

use once_cell::sync::Lazy;

use crate::models::{Drill, DrillCategory, Position, Slot};

static DRILLS: Lazy<Vec<Drill>> = Lazy::new(build_catalog);

/// Catalog filter. Both criteria are optional and combined with AND.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrillFilter {
    pub category: Option<DrillCategory>,
    /// Number of players the coach has available; keeps only drills whose
    /// required minimum does not exceed it.
    pub available_players: Option<u8>,
}

/// All catalog drills matching the filter, in stable definition order.
pub fn list_drills(filter: Option<&DrillFilter>) -> Vec<&'static Drill> {
    DRILLS
        .iter()
        .filter(|drill| match filter {
            Some(f) => {
                f.category.map_or(true, |c| drill.category == c)
                    && f.available_players.map_or(true, |n| drill.min_players <= n)
            }
            None => true,
        })
        .collect()
}

pub fn drill_by_id(drill_id: &str) -> Option<&'static Drill> {
    DRILLS.iter().find(|d| d.id == drill_id)
}

/// The fixed drill the demo sequencer runs: three skaters slaloming through
/// cones toward the far goal.
pub fn demo_drill() -> Drill {
    Drill {
        id: "demo-skating".to_string(),
        name: "Démonstration - Exercice de Patinage".to_string(),
        category: DrillCategory::Skating,
        duration_minutes: 5,
        description: "Démonstration automatique d'un exercice de patinage".to_string(),
        min_players: 6,
        max_players: 8,
        slots: vec![
            Slot::player("demo-1", 20.0, 30.0, Position::Center),
            Slot::player("demo-2", 20.0, 50.0, Position::LeftWing),
            Slot::player("demo-3", 20.0, 70.0, Position::RightWing),
            Slot::cone("demo-4", 50.0, 40.0),
            Slot::cone("demo-5", 50.0, 60.0),
            Slot::cone("demo-6", 80.0, 50.0),
        ],
        instructions: vec![
            "Les joueurs partent de la ligne de but".to_string(),
            "Contourner les cônes en slalom".to_string(),
            "Terminer avec un tir au but".to_string(),
        ],
    }
}

fn build_catalog() -> Vec<Drill> {
    vec![
        Drill {
            id: "slalom-cones".to_string(),
            name: "Slalom entre les cônes".to_string(),
            category: DrillCategory::Skating,
            duration_minutes: 10,
            description: "Patinage en slalom à pleine vitesse entre cinq cônes".to_string(),
            min_players: 3,
            max_players: 10,
            slots: vec![
                Slot::player("slalom-p1", 10.0, 30.0, Position::Center),
                Slot::player("slalom-p2", 10.0, 50.0, Position::LeftWing),
                Slot::player("slalom-p3", 10.0, 70.0, Position::RightWing),
                Slot::cone("slalom-c1", 30.0, 50.0),
                Slot::cone("slalom-c2", 45.0, 35.0),
                Slot::cone("slalom-c3", 60.0, 65.0),
                Slot::cone("slalom-c4", 75.0, 40.0),
                Slot::cone("slalom-c5", 88.0, 55.0),
            ],
            instructions: vec![
                "Départ en file à la ligne bleue".to_string(),
                "Croisements serrés autour de chaque cône".to_string(),
                "Retour en patinage arrière".to_string(),
            ],
        },
        Drill {
            id: "shooting-lanes".to_string(),
            name: "Couloirs de tir".to_string(),
            category: DrillCategory::Shooting,
            duration_minutes: 15,
            description: "Tirs sur réception depuis trois couloirs face au gardien".to_string(),
            min_players: 4,
            max_players: 8,
            slots: vec![
                Slot::player("lanes-g", 92.0, 50.0, Position::Goalie),
                Slot::player("lanes-lw", 65.0, 25.0, Position::LeftWing),
                Slot::player("lanes-c", 60.0, 50.0, Position::Center),
                Slot::player("lanes-rw", 65.0, 75.0, Position::RightWing),
                Slot::puck("lanes-puck1", 55.0, 40.0),
                Slot::puck("lanes-puck2", 55.0, 60.0),
                Slot::goal("lanes-goal", 96.0, 50.0),
            ],
            instructions: vec![
                "Une passe depuis le coin, un tir sur réception".to_string(),
                "Rotation des couloirs après chaque tir".to_string(),
            ],
        },
        Drill {
            id: "breakout-pass".to_string(),
            name: "Sortie de zone en passes".to_string(),
            category: DrillCategory::Passing,
            duration_minutes: 12,
            description: "Relance contrôlée depuis le fond de zone en trois passes".to_string(),
            min_players: 5,
            max_players: 10,
            slots: vec![
                Slot::player("breakout-d1", 15.0, 35.0, Position::Defense),
                Slot::player("breakout-d2", 15.0, 65.0, Position::Defense),
                Slot::player("breakout-c", 35.0, 50.0, Position::Center),
                Slot::player("breakout-lw", 45.0, 20.0, Position::LeftWing),
                Slot::player("breakout-rw", 45.0, 80.0, Position::RightWing),
                Slot::puck("breakout-puck", 10.0, 50.0),
            ],
            instructions: vec![
                "Le défenseur récupère derrière le filet".to_string(),
                "Première passe à l'ailier le long de la bande".to_string(),
                "Le centre soutient au centre de la glace".to_string(),
            ],
        },
        Drill {
            id: "defensive-box".to_string(),
            name: "Boîte défensive".to_string(),
            category: DrillCategory::Defensive,
            duration_minutes: 12,
            description: "Maintien de la boîte défensive devant le filet".to_string(),
            min_players: 4,
            max_players: 6,
            slots: vec![
                Slot::player("box-d1", 22.0, 38.0, Position::Defense),
                Slot::player("box-d2", 22.0, 62.0, Position::Defense),
                Slot::player("box-f1", 38.0, 38.0, Position::Center),
                Slot::player("box-f2", 38.0, 62.0, Position::RightWing),
                Slot::goal("box-goal", 8.0, 50.0),
            ],
            instructions: vec![
                "Garder la boîte compacte entre les points de mise au jeu".to_string(),
                "Bâtons dans les lignes de passe".to_string(),
            ],
        },
        Drill {
            id: "powerplay-umbrella".to_string(),
            name: "Avantage numérique en parapluie".to_string(),
            category: DrillCategory::PowerPlay,
            duration_minutes: 15,
            description: "Installation 1-3-1 en zone offensive".to_string(),
            min_players: 5,
            max_players: 10,
            slots: vec![
                Slot::player("pp-point", 55.0, 50.0, Position::Defense),
                Slot::player("pp-left", 68.0, 25.0, Position::LeftWing),
                Slot::player("pp-right", 68.0, 75.0, Position::RightWing),
                Slot::player("pp-bumper", 75.0, 50.0, Position::Center),
                Slot::player("pp-net", 88.0, 50.0, Position::Center).optional(),
                Slot::goal("pp-goal", 96.0, 50.0),
            ],
            instructions: vec![
                "Circulation de rondelle haut-bas".to_string(),
                "Tir de la pointe avec écran devant le filet".to_string(),
            ],
        },
        Drill {
            id: "pk-triangle".to_string(),
            name: "Triangle d'infériorité".to_string(),
            category: DrillCategory::PenaltyKill,
            duration_minutes: 10,
            description: "Rotation du triangle à trois contre l'avantage numérique".to_string(),
            min_players: 3,
            max_players: 8,
            slots: vec![
                Slot::player("pk-top", 35.0, 50.0, Position::Center),
                Slot::player("pk-d1", 20.0, 38.0, Position::Defense),
                Slot::player("pk-d2", 20.0, 62.0, Position::Defense),
                Slot::goal("pk-goal", 8.0, 50.0),
            ],
            instructions: vec![
                "Le sommet du triangle presse le porteur".to_string(),
                "Rotation courte, jamais deux joueurs sur la même rondelle".to_string(),
            ],
        },
        Drill {
            id: "scrimmage-half-ice".to_string(),
            name: "Match simulé demi-glace".to_string(),
            category: DrillCategory::Scrimmage,
            duration_minutes: 20,
            description: "Trois contre trois sur demi-glace, changements rapides".to_string(),
            min_players: 6,
            max_players: 12,
            slots: vec![
                Slot::player("scrim-a1", 60.0, 30.0, Position::Center),
                Slot::player("scrim-a2", 60.0, 50.0, Position::LeftWing),
                Slot::player("scrim-a3", 60.0, 70.0, Position::RightWing),
                Slot::player("scrim-b1", 80.0, 30.0, Position::Defense),
                Slot::player("scrim-b2", 80.0, 50.0, Position::Defense),
                Slot::player("scrim-b3", 80.0, 70.0, Position::Center),
                Slot::puck("scrim-puck", 70.0, 50.0),
                Slot::goal("scrim-goal", 96.0, 50.0),
            ],
            instructions: vec![
                "Mise au jeu au point central de la zone".to_string(),
                "Changement de trio toutes les 45 secondes".to_string(),
            ],
        },
    ]
}
