use sea_orm::DatabaseConnection;
use std::time::Instant;
use tracing::debug;

use crate::common::{DatabaseError, DatabaseResult};

/// Ping the pool; used by the readiness endpoint.
pub async fn check_health(db: &DatabaseConnection) -> DatabaseResult<()> {
    debug!("Running PostgreSQL health check");

    db.ping()
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("PostgreSQL ping failed: {}", e)))
}

/// Health check result with timing, for detailed status reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub healthy: bool,
    pub message: Option<String>,
    pub response_time_ms: u64,
}

impl HealthStatus {
    pub fn healthy(response_time_ms: u64) -> Self {
        Self {
            healthy: true,
            message: None,
            response_time_ms,
        }
    }

    pub fn unhealthy(message: String, response_time_ms: u64) -> Self {
        Self {
            healthy: false,
            message: Some(message),
            response_time_ms,
        }
    }
}

/// Like [`check_health`], but never fails and reports the round-trip time.
pub async fn check_health_detailed(db: &DatabaseConnection) -> HealthStatus {
    let start = Instant::now();
    let result = check_health(db).await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(()) => HealthStatus::healthy(elapsed),
        Err(e) => HealthStatus::unhealthy(e.to_string(), elapsed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[test]
    fn test_health_status_constructors() {
        assert_eq!(
            HealthStatus::healthy(42),
            HealthStatus {
                healthy: true,
                message: None,
                response_time_ms: 42
            }
        );

        let status = HealthStatus::unhealthy("connection refused".to_string(), 7);
        assert!(!status.healthy);
        assert_eq!(status.message.as_deref(), Some("connection refused"));
    }

    #[tokio::test]
    async fn test_check_health_detailed_reports_healthy_mock() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let status = check_health_detailed(&db).await;

        assert!(status.healthy, "{:?}", status.message);
    }
}
