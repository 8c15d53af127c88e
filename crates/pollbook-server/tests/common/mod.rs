//! Shared helpers for HTTP-level tests
//!
//! Tests run against an in-memory SQLite database. The pool is pinned to a
//! single connection because every fresh in-memory SQLite connection is a
//! brand-new database.

use std::sync::Arc;

use base64::Engine;
use config::Config;

use pollbook_auth::model::TOKEN_SECRET_KEY;
use pollbook_auth::service::credential;
use pollbook_registry::service::voter;
use pollbook_server::model::{AppState, Configuration};

pub const TEST_NUMBER: &str = "2456789";
pub const NONEXISTENT_NUMBER: &str = "0000000";
pub const TEST_OPERATOR: &str = "team_1";
pub const TEST_PASSWORD: &str = "team_1password";

pub fn test_secret() -> String {
    base64::engine::general_purpose::STANDARD.encode(b"an-hs256-test-secret-of-decent-length")
}

/// App state with a seeded operator and one unvoted voter on the roll.
pub async fn test_state() -> Arc<AppState> {
    let db = pollbook_persistence::connect("sqlite::memory:", 1)
        .await
        .unwrap();
    pollbook_persistence::setup_schema(&db).await.unwrap();

    credential::create(&db, TEST_OPERATOR, TEST_PASSWORD)
        .await
        .unwrap();
    voter::create(&db, TEST_NUMBER, "Werner Wusel")
        .await
        .unwrap();

    let config = Config::builder()
        .set_override(TOKEN_SECRET_KEY, test_secret())
        .unwrap()
        .build()
        .unwrap();

    Arc::new(AppState::new(Configuration::from_config(config), db))
}

/// Build the service under test with the full middleware stack.
#[macro_export]
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(pollbook_server::middleware::auth::Authentication)
                .app_data(actix_web::web::Data::from($state.clone()))
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler(pollbook_server::model::response::json_error_handler),
                )
                .configure(pollbook_server::api::route::configure),
        )
        .await
    };
}

/// Log in through the API and yield a bearer token string.
#[macro_export]
macro_rules! login {
    ($app:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/token")
            .set_form(serde_json::json!({
                "username": $crate::common::TEST_OPERATOR,
                "password": $crate::common::TEST_PASSWORD,
            }))
            .to_request();
        let body: serde_json::Value =
            actix_web::test::call_and_read_body_json($app, req).await;
        body["access_token"].as_str().unwrap().to_string()
    }};
}
