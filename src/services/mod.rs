//! Service layer for business logic.
//!
//! This module contains services that encapsulate application logic
//! above the raw models: the saved-location directory, the built-in
//! forecast dataset, and unit/time formatting.

pub mod forecast;
pub mod locations;
pub mod units;

// Re-export commonly used types and functions
pub use locations::LocationDirectory;
