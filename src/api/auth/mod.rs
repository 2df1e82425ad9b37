pub mod dto;
pub mod handlers;
pub mod models;
pub mod service;

pub use models::{LoginRequest, VerifyRequest};
pub use service::AuthService;
