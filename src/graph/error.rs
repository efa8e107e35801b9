use thiserror::Error;

/// Why a mutation of the follow graph was refused.
///
/// Every variant is recoverable; the graph is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("capacity of {capacity} reached")]
    AtCapacity { capacity: usize },

    #[error("user {name} already exists")]
    DuplicateUser { name: String },

    #[error("no user named {name}")]
    UnknownUser { name: String },

    #[error("{name} cannot follow themselves")]
    SelfFollow { name: String },

    #[error("{follower} already follows {followee}")]
    AlreadyFollowing { follower: String, followee: String },
}

/// Failure reading or writing a network fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed fixture: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("could not serialize fixture: {0}")]
    Serialize(#[from] ron::Error),

    #[error("{field} must be at least 1")]
    InvalidCapacity { field: &'static str },
}
