//! Static assets for the poll-station terminal page
//!
//! Unauthenticated on purpose: the page itself prompts for login before it
//! can do anything.

use actix_web::{HttpResponse, get, http::header::ContentType};

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(include_str!("../../static/index.html"))
}

#[get("/bootstrap.min.css")]
async fn stylesheet() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(include_str!("../../static/bootstrap.min.css"))
}
