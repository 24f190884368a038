//! Filter implementations for title lookups.

pub mod gender;

// Re-export for convenience
pub use gender::GenderFilter;
