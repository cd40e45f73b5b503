use thiserror::Error;

/// Planner error taxonomy.
///
/// Invalid-state rejections never mutate anything: the surrounding UI is
/// expected to disable the triggering control, so these errors stay local
/// and are never fatal.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no drill selected")]
    NoDrillSelected,

    #[error("session is already running")]
    SessionAlreadyRunning,

    #[error("demo sequence is already active")]
    DemoAlreadyActive,

    #[error("drill capacity exceeded: {placed} placed, max {max}")]
    CapacityExceeded { placed: usize, max: u8 },

    #[error("unknown drill: {0}")]
    UnknownDrill(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;
