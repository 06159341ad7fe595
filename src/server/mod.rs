//! Server-side web application and business logic.
//!
//! The server renders HTML pages with Dioxus SSR, serves them through Axum and
//! persists data with SeaORM on SQLite.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control and form handling
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session helpers, authorization guard and method override
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, image stores)
//! - **Startup** (`startup`) - Initialization of database, sessions and clients
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Method override** rewrites `POST ?_method=DELETE` before routing
//! 2. **Router** dispatches to a controller, falling back to static files
//! 3. **Controller** loads the actor, authorizes, validates the form token
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Controller** renders a view or redirects to the owning page

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
