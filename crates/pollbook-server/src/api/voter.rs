//! Voter lookup and check-in endpoints

use actix_web::{HttpRequest, HttpResponse, get, http::StatusCode, post, web};
use serde::Deserialize;

use pollbook_registry::model::{CheckInError, VoterView};
use pollbook_registry::service::voter;

use crate::authenticated;
use crate::model::{AppState, ErrorResult};

const PERSON_NOT_FOUND_MESSAGE: &str = "Person not found";

#[derive(Debug, Deserialize)]
struct HasVotedMetadata {
    ballot_box_id: String,
    running_number: i32,
}

#[get("/number/{number}")]
async fn lookup(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let _operator = authenticated!(req);
    let number = path.into_inner();

    match voter::find(data.db(), &number).await {
        Ok(Some(model)) => HttpResponse::Ok().json(VoterView::from(model)),
        Ok(None) => {
            ErrorResult::http_response(StatusCode::NOT_FOUND, PERSON_NOT_FOUND_MESSAGE, req.path())
        }
        Err(e) => {
            tracing::error!("Failed to look up voter '{}': {}", number, e);
            ErrorResult::http_response_internal(req.path())
        }
    }
}

#[post("/number/{number}")]
async fn check_in(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<HasVotedMetadata>,
) -> HttpResponse {
    let operator = authenticated!(req);
    let number = path.into_inner();

    // Malformed input never reaches the registry
    if body.ballot_box_id.trim().is_empty() {
        return ErrorResult::http_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "ballot_box_id must not be empty",
            req.path(),
        );
    }
    if body.running_number <= 0 {
        return ErrorResult::http_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "running_number must be positive",
            req.path(),
        );
    }

    let result = voter::mark_voted(
        data.db(),
        &number,
        &body.ballot_box_id,
        body.running_number,
        &operator,
        chrono::Utc::now(),
    )
    .await;

    match result {
        Ok(model) => HttpResponse::Ok().json(VoterView::from(model)),
        Err(CheckInError::NotFound(_)) => {
            ErrorResult::http_response(StatusCode::NOT_FOUND, PERSON_NOT_FOUND_MESSAGE, req.path())
        }
        Err(CheckInError::AlreadyVoted(_)) => ErrorResult::http_response(
            StatusCode::FORBIDDEN,
            "Person already voted",
            req.path(),
        ),
        Err(CheckInError::Db(e)) => {
            tracing::error!("Failed to check in voter '{}': {}", number, e);
            ErrorResult::http_response_internal(req.path())
        }
    }
}
