// ABOUTME: HTTP middleware shared by every route
// ABOUTME: Cross-origin configuration for browser clients

/// CORS configuration
pub mod cors;

pub use cors::setup_cors;
