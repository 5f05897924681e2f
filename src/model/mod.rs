//! Wire-level DTOs exchanged with the dashboard frontend.
//!
//! Every request and response body of the HTTP bridge is defined here so the JSON
//! shape of the API lives in one place, separate from the server-side domain models.

pub mod api;
pub mod auth;
pub mod discord;
pub mod embed;
pub mod health;
