//! Data models for the cost estimator
//!
//! This module contains the core data structures:
//! - Category and feature records loaded from the catalog API
//! - Enums for form focus state

pub mod catalog;
pub mod enums;

// Re-exports for convenient access
pub use catalog::{Category, Feature};
pub use enums::Focus;
