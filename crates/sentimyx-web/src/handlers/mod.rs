//! HTTP handlers for all routes.

pub mod system;
pub mod sentiment;
