use thiserror::Error;

/// Errors raised while setting up a simulation run.
///
/// The selection engine itself never fails; these come from the driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Track {track} outside configured range [{min}, {max}]")]
    TrackOutOfRange { track: i64, min: i64, max: i64 },
}

pub type Result<T> = std::result::Result<T, SchedError>;
