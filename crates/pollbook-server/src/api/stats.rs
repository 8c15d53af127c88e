//! Check-in statistics endpoint

use actix_web::{HttpRequest, HttpResponse, get, web};
use serde::Serialize;
use std::collections::BTreeMap;

use pollbook_registry::service::stats;

use crate::authenticated;
use crate::model::{AppState, ErrorResult};

#[derive(Debug, Serialize)]
struct StatsResult {
    marked_as_voted: BTreeMap<String, u64>,
}

#[get("/stats")]
async fn hourly_stats(req: HttpRequest, data: web::Data<AppState>) -> HttpResponse {
    let _operator = authenticated!(req);

    match stats::hourly_counts(data.db()).await {
        Ok(marked_as_voted) => HttpResponse::Ok().json(StatsResult { marked_as_voted }),
        Err(e) => {
            tracing::error!("Failed to aggregate check-in stats: {}", e);
            ErrorResult::http_response_internal(req.path())
        }
    }
}
