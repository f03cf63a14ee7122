pub mod app;
pub mod auth;
pub mod config;
pub mod email;
pub mod error;
pub mod rest;
pub mod state;

pub use error::AppError;
