pub mod application;
pub mod auth;
pub mod error;
pub mod health;
pub mod job;
pub mod ui;
pub mod validation;

use std::sync::Arc;

use actix_web::web;

use crate::db::Store;
use crate::notify::Mailer;
use application::{ApplicationService, handlers::application_config};
use auth::{AuthService, handlers::auth_config};
use health::health_config;
use job::{JobService, handlers::job_config};
use ui::ui_config;

/// Register every route together with the services they depend on
///
/// `mailer` is `None` when email delivery is not configured. `max_payload_size`
/// bounds JSON request bodies.
pub fn configure(
    config: &mut web::ServiceConfig,
    store: Arc<dyn Store>,
    mailer: Option<Mailer>,
    max_payload_size: usize,
) {
    config
        .app_data(web::Data::<dyn Store>::from(store.clone()))
        .app_data(web::Data::new(AuthService::new(store.clone(), mailer)))
        .app_data(web::Data::new(JobService::new(store.clone())))
        .app_data(web::Data::new(ApplicationService::new(store)))
        .app_data(validation::json_config(max_payload_size))
        .configure(ui_config)
        .configure(health_config)
        .configure(auth_config)
        .configure(job_config)
        .configure(application_config);
}
