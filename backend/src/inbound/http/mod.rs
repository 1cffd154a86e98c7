//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod brand_creations;
pub mod error;
pub mod feedback;
pub mod health;
pub mod json;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

/// Register the REST endpoints and the JSON extractor config on a scope.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
///
/// let app = App::new().service(web::scope("/api/v1").configure(backend::inbound::http::configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(brand_creations::create_brand_creation)
        .service(brand_creations::list_brand_creations)
        .service(brand_creations::get_brand_creation)
        .service(brand_creations::update_brand_creation)
        .service(feedback::submit_feedback)
        .service(feedback::list_feedback_for_brand_creation);
}
