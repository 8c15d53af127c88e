//! Route registration

use actix_web::web;

use super::{home, stats, token, voter};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(token::login)
        .service(stats::hourly_stats)
        .service(voter::lookup)
        .service(voter::check_in)
        .service(home::index)
        .service(home::stylesheet);
}
