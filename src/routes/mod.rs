// Route exports
pub mod candidates;
pub mod health;
pub mod jobs;
pub mod matches;

use actix_web::web;
use std::sync::Arc;

use crate::error::{handle_json_payload_error, handle_path_error, handle_query_payload_error};
use crate::services::RecordStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

/// Shared state, extractor error handlers and every route
///
/// Used by the server and by the HTTP tests so both see the same app.
pub fn configure_app(state: AppState) -> impl Fn(&mut web::ServiceConfig) + Clone {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .configure(configure_routes);
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .configure(jobs::configure)
        .configure(candidates::configure)
        .configure(matches::configure);
}
