//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod lenient;
pub mod responses;
pub mod schedules;
pub mod state;
pub mod users;

pub use error::ApiResult;

/// Register the resource endpoints and their extractor error handlers.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use business_backend::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config =
        web::JsonConfig::default().error_handler(|err, req| error::json_error_handler(&err, req));
    let path_config =
        web::PathConfig::default().error_handler(|err, req| error::path_error_handler(&err, req));

    cfg.app_data(json_config)
        .app_data(path_config)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::create_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(schedules::list_schedules)
        .service(schedules::get_schedule)
        .service(schedules::create_schedule)
        .service(schedules::update_schedule)
        .service(schedules::delete_schedule);
}
