//! # rink_core - Training-Session Planner Core
//!
//! In-memory core of the coaching dashboard's training planner: an
//! interactive rink where coaches drag players onto drill slots, with a
//! drill catalog, proximity snapping, session timing, and a scripted demo
//! walkthrough.
//!
//! ## Features
//! - Drill catalog with slot layouts in normalized rink-percent space
//! - Session controller keeping the placement map and roster flags in sync
//! - Pixel-to-percent mapping that never caches stale viewport ratios
//! - Epoch-guarded demo sequencer driven by an explicit clock
//! - JSON API for easy integration with a hosting shell

pub mod api;
pub mod catalog;
pub mod data;
pub mod demo;
pub mod error;
pub mod models;
pub mod rink;
pub mod roster;
pub mod session;

// Re-export main API surface
pub use api::{handle_session_request_json, SessionRequest, SessionResponse, SessionSnapshot};
pub use catalog::{demo_drill, drill_by_id, list_drills, DrillFilter};
pub use demo::{DemoPhase, DemoSequencer};
pub use error::{Result, SessionError};
pub use models::{
    Drill, DrillCategory, EnergyBand, Placement, Player, Position, Session, Slot, SlotKind,
};
pub use rink::{DragPreview, RinkViewport, SNAP_RADIUS_PCT};
pub use roster::RosterModel;
pub use session::{PlacementPolicy, SessionController, SessionPhase};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
