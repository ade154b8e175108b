use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("not initialized: run 'skillboard init'")]
    NotInitialized,

    #[error("consultant not found: {0}")]
    ConsultantNotFound(String),

    #[error("invalid consultant: {0}")]
    InvalidContact(String),

    #[error("unknown solution play: {0}")]
    UnknownSolutionPlay(String),

    #[error("unknown solution area: {0}")]
    UnknownSolutionArea(String),

    #[error("unknown industry: {0}")]
    UnknownIndustry(String),

    #[error("unknown region: {0}")]
    UnknownRegion(String),

    #[error("unknown hours range '{0}': expected 0-100, 101-500 or 501+")]
    UnknownHoursRange(String),

    #[error("solution play '{play}' is not part of solution area '{area}'")]
    PlayNotInArea { play: String, area: String },

    #[error("{hours} hours does not fall inside the {range} range")]
    HoursOutsideRange { hours: u64, range: String },

    #[error("submission not found: {0}")]
    SubmissionNotFound(String),

    #[error("identity unavailable: {0}")]
    IdentityUnavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
