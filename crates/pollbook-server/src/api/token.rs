//! Login endpoint: exchanges operator credentials for a session token

use actix_web::{HttpRequest, HttpResponse, http::StatusCode, post, web};
use serde::{Deserialize, Serialize};

use pollbook_auth::service::{credential, token::encode_jwt_token};
use pollbook_common::TOKEN_TYPE_BEARER;

use crate::model::{AppState, ErrorResult};

#[derive(Debug, Deserialize)]
struct LoginData {
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginResult {
    access_token: String,
    token_type: &'static str,
}

/// Bad credentials and unknown usernames share one response, so the login
/// endpoint cannot be used to probe which operator accounts exist.
const LOGIN_FAILED_MESSAGE: &str = "incorrect username or password";

#[post("/token")]
async fn login(
    req: HttpRequest,
    data: web::Data<AppState>,
    form: web::Form<LoginData>,
) -> HttpResponse {
    let username = form.username.clone().unwrap_or_default();
    let password = form.password.clone().unwrap_or_default();

    if username.is_empty() || password.is_empty() {
        return ErrorResult::http_response(
            StatusCode::UNAUTHORIZED,
            LOGIN_FAILED_MESSAGE,
            req.path(),
        );
    }

    let verified = match credential::verify(data.db(), &username, &password).await {
        Ok(v) => v,
        Err(e) => {
            tracing::error!("Failed to verify credentials for '{}': {}", username, e);
            return ErrorResult::http_response_internal(req.path());
        }
    };

    if !verified {
        return ErrorResult::http_response(
            StatusCode::UNAUTHORIZED,
            LOGIN_FAILED_MESSAGE,
            req.path(),
        );
    }

    let access_token = match encode_jwt_token(
        &username,
        &data.configuration.token_secret_key(),
        data.configuration.token_expire_seconds(),
    ) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Failed to issue token for '{}': {}", username, e);
            return ErrorResult::http_response_internal(req.path());
        }
    };

    tracing::info!(operator = %username, "operator logged in");

    HttpResponse::Ok().json(LoginResult {
        access_token,
        token_type: TOKEN_TYPE_BEARER,
    })
}
