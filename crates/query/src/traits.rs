//! Core traits for cast filtering.
//!
//! Title lookups hand the cast of a movie through a chain of filters. Each
//! filter only drops members; none may reorder what it keeps.

use data_loader::CastMember;

/// Filters a movie's cast.
///
/// Filters work on borrowed members so a lookup never copies the index.
pub trait CastFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Keep the members that pass, in their original order.
    fn apply<'a>(&self, members: Vec<&'a CastMember>) -> Vec<&'a CastMember>;
}
