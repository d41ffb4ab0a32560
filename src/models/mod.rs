//! Data models representing database entities.

/// Service record shown on the marketing site
pub mod service;
