//! Server-side backend: the Discord bot session and the HTTP bridge in front of it.
//!
//! The backend uses Axum as the web framework and Serenity for the Discord bot. It
//! keeps no persistent state; everything is read either from the bot's gateway cache
//! or from Discord's REST API with the caller's own token.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, input validation and DTO conversion
//! - **Service Layer** (`service/`) - Permission checks and upstream orchestration
//! - **Model Layer** (`model/`) - Domain models built from Serenity types and DTOs
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token extraction, request logging, panic recovery
//! - **Bot** (`bot/`) - Gateway event handlers and the `BotSession` abstraction
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (HTTP clients, bot session)
//! - **Startup** (`startup`) - Tracing, HTTP/OAuth clients and CORS setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the request; middleware logs it
//! 2. **Controller** extracts the bearer token and body, rejecting malformed input
//! 3. **Service** checks the bot session and calls Discord with the caller's token
//! 4. **Controller** converts the result to a DTO and returns the HTTP response

pub mod bot;
pub mod config;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
