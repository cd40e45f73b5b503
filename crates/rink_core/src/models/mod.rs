//! Shared data model: players, drills, sessions.

pub mod drill;
pub mod player;
pub mod session;

pub use drill::{Drill, DrillCategory, Slot, SlotKind};
pub use player::{EnergyBand, Player, Position};
pub use session::{Placement, Session};
