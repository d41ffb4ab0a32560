//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data
//! 2. Performs any database queries
//! 3. Returns HTTP response (JSON, status code)

/// Root confirmation endpoint
pub mod api;
/// Service listing endpoint
pub mod services;
