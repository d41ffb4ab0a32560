//! Skyvex API - a small read-only backend for the Skyvex marketing site.
//!
//! The service exposes two JSON endpoints over HTTP:
//!
//! - `GET /api` - fixed confirmation payload, used to verify the API is up
//! - `GET /api/services` - the `services` table, ordered for display
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries, pooled connections)
//! - **Format**: JSON responses
//!
//! The service never writes to the database; the `services` table is owned
//! and maintained by an external administrative process.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
