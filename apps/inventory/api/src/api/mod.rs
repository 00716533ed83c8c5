use axum::{Router, routing::get};

pub mod health;
pub mod items;

/// Business routes. Every sub-router has its state applied, so the result
/// is stateless and can be handed to `create_router`.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/items", items::router(state))
}

/// `/ready`, backed by a real database ping.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use database::postgres::PostgresConfig;
    use domain_items::entity;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn state(db: MockDatabase) -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                database: PostgresConfig::new("postgresql://localhost/inventory"),
                server: ServerConfig::default(),
                environment: Environment::Development,
                run_migrations: false,
            },
            db: db.into_connection(),
        }
    }

    async fn json_body(body: Body) -> Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_items_are_mounted_at_items() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![
            entity::Model {
                id: 1,
                name: "magic sword".to_string(),
                description: Some("a mighty sword".to_string()),
            },
        ]]);
        let app = routes(&state(db));

        let response = app
            .oneshot(Request::builder().uri("/items").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response.into_body()).await,
            json!([{"id": 1, "name": "magic sword", "description": "a mighty sword"}])
        );
    }

    #[tokio::test]
    async fn test_ready_reports_database() {
        let app = ready_router(state(MockDatabase::new(DatabaseBackend::Postgres)));

        let response = app
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["status"], "ready");
        assert_eq!(body["database"], "connected");
    }
}
