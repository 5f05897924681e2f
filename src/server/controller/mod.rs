//! HTTP request handlers.
//!
//! Controllers extract and validate request input, call into the service layer and
//! convert domain models into DTOs. Each handler carries a `#[utoipa::path]`
//! annotation that feeds the OpenAPI document served by the router.

pub mod auth;
pub mod discord;
pub mod embed;
pub mod health;

#[cfg(test)]
mod test;
