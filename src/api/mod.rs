//! HTTP client wrapper for the backend API.

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;
