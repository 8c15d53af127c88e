//! HTTP server setup

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};

use crate::{
    api,
    middleware::auth::Authentication,
    model::{AppState, response},
};

/// Creates and binds the HTTP server.
pub fn http_server(
    app_state: Arc<AppState>,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Authentication)
            .app_data(web::Data::from(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(response::json_error_handler))
            .configure(api::route::configure)
    })
    .bind((address, port))?
    .run())
}
