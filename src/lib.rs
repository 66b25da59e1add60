pub mod app;
pub mod config;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;
pub mod validation;

pub use app::{ApiDoc, Services, build_app};
