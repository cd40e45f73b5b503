//! JSON boundary for the hosting shell.

pub mod session_json;

pub use session_json::{
    handle_session_request_json, SessionRequest, SessionRequestType, SessionResponse,
    SessionResponseType, SessionSnapshot,
};
