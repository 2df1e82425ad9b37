pub mod handlers;
pub mod models;
pub mod service;

pub use models::ApplyRequest;
pub use service::ApplicationService;
