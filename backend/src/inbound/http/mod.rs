//! HTTP inbound adapter exposing the form endpoints.

pub mod cache_control;
pub mod error;
pub mod health;
pub mod invoices;
pub mod outcome;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
