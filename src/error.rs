use thiserror::Error;

use crate::entity::user::Role;

/// Application error types
///
/// Every failure carries enough context (record id, attempted action,
/// required role or location) for the caller to render a precise message.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{username} has no access to location {location:?}")]
    LocationDenied {
        username: String,
        location: Option<String>,
    },

    #[error("no transition {action:?} from status {status:?} on {entity} record {record_id}")]
    UnknownTransition {
        entity: &'static str,
        record_id: i64,
        status: String,
        action: String,
    },

    #[error("role {role:?} may not {action:?} a {entity} record in status {status:?}")]
    ForbiddenTransition {
        entity: &'static str,
        record_id: i64,
        status: String,
        action: String,
        role: Role,
    },

    #[error("side effect failed on {entity} record {record_id}: {source}")]
    SideEffectFailed {
        entity: &'static str,
        record_id: i64,
        #[source]
        source: anyhow::Error,
    },

    #[error("the asset referenced by {entity} record {record_id} no longer exists")]
    AssetAlreadyDeleted {
        entity: &'static str,
        record_id: i64,
    },

    #[error("unknown status tag {0:?}")]
    UnknownStatus(String),
}

impl AppError {
    /// Whether the caller may retry the operation unchanged.
    ///
    /// Only collaborator failures are transient; every other variant is a
    /// definitive decision and will not change on retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::SideEffectFailed { .. })
    }

    pub fn side_effect(entity: &'static str, record_id: i64, source: anyhow::Error) -> Self {
        AppError::SideEffectFailed {
            entity,
            record_id,
            source,
        }
    }
}

/// Result type alias for application
pub type AppResult<T> = Result<T, AppError>;
