//! Request extractors and middleware shared by all routes.

pub mod auth;
pub mod logging;
pub mod panic;
