// Session JSON API for the hosting shell.
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{self, DrillFilter};
use crate::models::{Drill, DrillCategory, Placement, Player};
use crate::session::{SessionController, SessionPhase};
use crate::SCHEMA_VERSION;
use std::collections::HashMap;

/// Request envelope sent by the shell.
#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub schema_version: u8,
    pub request_type: SessionRequestType,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum SessionRequestType {
    /// Catalog listing, optionally filtered.
    ListDrills { category: Option<DrillCategory>, available_players: Option<u8> },

    /// Select a catalog drill into the session.
    SelectDrill { drill_id: String },

    /// Start the selected drill.
    StartDrill,

    /// Stop training and drop the drill selection.
    StopTraining,

    /// Commit a placement at a rink-percent coordinate.
    PlacePlayer { player_id: String, x: f32, y: f32 },

    /// Remove one player from the rink.
    RemovePlayer { player_id: String },

    /// Remove everyone from the rink.
    ClearRink,

    /// Fill the selected drill's slots with unassigned players.
    AutoPosition,

    /// Advance the elapsed-time counter.
    AdvanceTime { delta_secs: u32 },

    /// Full session snapshot.
    GetState,
}

/// Response envelope returned to the shell.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub schema_version: u8,
    pub success: bool,
    pub response_type: SessionResponseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum SessionResponseType {
    Drills { drills: Vec<Drill> },
    State { state: SessionSnapshot },
    Ack,
    Error,
}

/// Read-only view of the whole session, for badges and timers elsewhere in
/// the shell.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub name: String,
    pub team: String,
    pub phase: SessionPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_drill: Option<Drill>,
    pub is_running: bool,
    pub elapsed_secs: u32,
    pub placements: HashMap<String, Placement>,
    pub assigned: Vec<Player>,
    pub unassigned: Vec<Player>,
}

impl SessionSnapshot {
    pub fn of(controller: &SessionController) -> Self {
        let session = controller.session();
        Self {
            session_id: session.id.clone(),
            name: session.name.clone(),
            team: session.team.clone(),
            phase: controller.phase(),
            current_drill: session.current_drill.clone(),
            is_running: session.is_running,
            elapsed_secs: session.elapsed_secs,
            placements: session.placements.clone(),
            assigned: controller.assigned_players().into_iter().cloned().collect(),
            unassigned: controller.unassigned_players().into_iter().cloned().collect(),
        }
    }
}

/// Handle one JSON request against the controller and return the JSON
/// response. Errors come back as `success=false` envelopes; nothing
/// propagates to the shell as a fault.
pub fn handle_session_request_json(controller: &mut SessionController, request_json: &str) -> String {
    let request: SessionRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            warn!(error = %e, "malformed session request");
            return error_response(format!("invalid request: {}", e));
        }
    };

    let result = handle(controller, request.request_type);
    let response = match result {
        Ok(response_type) => SessionResponse {
            schema_version: SCHEMA_VERSION,
            success: true,
            response_type,
            error_message: None,
        },
        Err(e) => {
            warn!(error = %e, "session request rejected");
            return error_response(e.to_string());
        }
    };

    serialize_response(&response)
}

fn handle(
    controller: &mut SessionController,
    request: SessionRequestType,
) -> crate::error::Result<SessionResponseType> {
    match request {
        SessionRequestType::ListDrills { category, available_players } => {
            let filter = DrillFilter { category, available_players };
            let drills = catalog::list_drills(Some(&filter)).into_iter().cloned().collect();
            Ok(SessionResponseType::Drills { drills })
        }
        SessionRequestType::SelectDrill { drill_id } => {
            let drill = catalog::drill_by_id(&drill_id)
                .ok_or(crate::error::SessionError::UnknownDrill(drill_id))?;
            controller.select_drill(drill.clone());
            Ok(SessionResponseType::Ack)
        }
        SessionRequestType::StartDrill => {
            controller.start_drill()?;
            Ok(SessionResponseType::Ack)
        }
        SessionRequestType::StopTraining => {
            controller.stop_training();
            Ok(SessionResponseType::Ack)
        }
        SessionRequestType::PlacePlayer { player_id, x, y } => {
            controller.place_player(&player_id, x, y)?;
            Ok(SessionResponseType::Ack)
        }
        SessionRequestType::RemovePlayer { player_id } => {
            controller.remove_player(&player_id);
            Ok(SessionResponseType::Ack)
        }
        SessionRequestType::ClearRink => {
            controller.clear_rink();
            Ok(SessionResponseType::Ack)
        }
        SessionRequestType::AutoPosition => {
            controller.auto_position();
            Ok(SessionResponseType::Ack)
        }
        SessionRequestType::AdvanceTime { delta_secs } => {
            controller.advance_elapsed(delta_secs);
            Ok(SessionResponseType::Ack)
        }
        SessionRequestType::GetState => {
            Ok(SessionResponseType::State { state: SessionSnapshot::of(controller) })
        }
    }
}

fn error_response(message: String) -> String {
    serialize_response(&SessionResponse {
        schema_version: SCHEMA_VERSION,
        success: false,
        response_type: SessionResponseType::Error,
        error_message: Some(message),
    })
}

fn serialize_response(response: &SessionResponse) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        format!(
            r#"{{"schema_version":{},"success":false,"response_type":{{"type":"Error"}},"error_message":"serialization failed: {}"}}"#,
            SCHEMA_VERSION, e
        )
    })
}
