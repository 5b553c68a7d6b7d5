//! Error types for the frame solver

use thiserror::Error;

/// Main error type for analysis operations
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("node index {0} not found in structure")]
    NodeNotFound(usize),

    #[error("element index {0} not found in structure")]
    ElementNotFound(usize),

    #[error("direction token must be 'X', 'Y', or 'R', got '{0}'")]
    UnknownDirection(String),

    #[error("unknown load record '{0}': expected 'ELEMENT' or 'POINT'")]
    UnknownLoadRecord(String),

    #[error("element load shape must be 'DISTRIBUTED' or 'POINT', got '{0}'")]
    UnknownLoadShape(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("singular stiffness matrix - structure may be unstable or have insufficient supports")]
    SingularMatrix,

    #[error("structure not analyzed - run analyze() first")]
    NotAnalyzed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for analysis operations
pub type FrameResult<T> = Result<T, FrameError>;
