//! Error types for scholarflow-core

use thiserror::Error;

/// Result type alias for scholarflow operations
pub type Result<T> = std::result::Result<T, ScholarflowError>;

/// Main error type for scholarflow operations
#[derive(Error, Debug)]
pub enum ScholarflowError {
    /// Sample data violates a model invariant
    #[error("Fixture error: {0}")]
    Fixture(#[from] FixtureError),

    /// An action the current view does not permit
    #[error("View error: {0}")]
    View(#[from] ViewError),

    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),
}

/// Sample data invariant violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    /// Rejection notice present without sent-back status, or the reverse
    #[error("Manuscript {id}: rejection notice present={has_notice} but status is {status}")]
    SentBackMismatch {
        id: String,
        status: String,
        has_notice: bool,
    },

    /// Manuscript has no authors
    #[error("Manuscript {0} has no authors")]
    NoAuthors(String),

    /// Two checks on one manuscript share a name
    #[error("Manuscript {id} has duplicate check {check}")]
    DuplicateCheck { id: String, check: String },

    /// Score outside 0-100
    #[error("{owner}: score {score} is out of range 0-100")]
    ScoreOutOfRange { owner: String, score: u8 },

    /// Identifier used twice in one collection
    #[error("Duplicate identifier: {0}")]
    DuplicateId(String),

    /// A collection the views index into is empty
    #[error("Collection is empty: {0}")]
    EmptyCollection(&'static str),
}

/// Actions the current view state does not allow
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Editor assignment needs exactly one EE and at least one AE
    #[error("Select one Executive Editor and at least one Associate Editor")]
    IncompleteAssignment,

    /// Rejection requires a comment for the author
    #[error("Rejection comments are required")]
    MissingComments,

    /// Reviewer cannot be invited in its current state
    #[error("Reviewer {id} cannot be invited ({reason})")]
    InviteNotAllowed { id: String, reason: String },

    /// Replace is only offered on selected recommended reviewers that
    /// have not accepted
    #[error("Reviewer {id} cannot be replaced ({reason})")]
    ReplaceNotAllowed { id: String, reason: String },

    /// Editor is not among the candidates for the requested role
    #[error("{id} is not a candidate {role}")]
    NotACandidate { id: String, role: &'static str },

    /// Reviewer is not part of the current selection
    #[error("Reviewer {0} is not selected")]
    NotSelected(String),

    /// No dialog is open for the requested confirmation
    #[error("No {0} dialog is open")]
    NoDialog(&'static str),
}

/// Configuration validation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Threshold values are invalid relative to each other
    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),

    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Required field is missing
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Config file could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<std::io::Error> for ScholarflowError {
    fn from(err: std::io::Error) -> Self {
        ScholarflowError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ScholarflowError {
    fn from(err: serde_json::Error) -> Self {
        ScholarflowError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ScholarflowError {
    fn from(err: toml::de::Error) -> Self {
        ScholarflowError::Config(ConfigError::Parse(err.to_string()))
    }
}
