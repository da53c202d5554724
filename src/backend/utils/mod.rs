//! Utility modules for the application backend.
//!
//! Configuration, routing and embedded asset loading.

/// Application configuration stored as JSON.
pub mod config;
/// Asset and CSS loading and caching utilities.
pub mod css;
/// Application routing system.
pub mod route;
