//! The CastFilterPipeline chains cast filters.

use crate::filters::GenderFilter;
use crate::traits::CastFilter;
use data_loader::{CastMember, Gender};

/// Chains multiple cast filters into one pass.
///
/// ## Usage
/// ```ignore
/// let pipeline = CastFilterPipeline::new()
///     .add_filter(GenderFilter::new(Gender::Female));
///
/// let members = pipeline.apply(movie.cast.iter().collect());
/// ```
pub struct CastFilterPipeline {
    filters: Vec<Box<dyn CastFilter>>,
}

impl CastFilterPipeline {
    /// Create a new empty pipeline. An empty pipeline keeps every member.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Pipeline for a title lookup's optional gender restriction
    pub fn for_gender(gender: Option<Gender>) -> Self {
        match gender {
            Some(gender) => Self::new().add_filter(GenderFilter::new(gender)),
            None => Self::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl CastFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence.
    pub fn apply<'a>(&self, members: Vec<&'a CastMember>) -> Vec<&'a CastMember> {
        let mut current = members;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for CastFilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
