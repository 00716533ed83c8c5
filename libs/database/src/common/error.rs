/// Errors raised by the health and migration helpers in this crate.
///
/// Connection helpers return the driver error (`sea_orm::DbErr`) unchanged.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
