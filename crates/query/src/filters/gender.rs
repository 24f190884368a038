//! Filter to restrict a cast to one gender.

use crate::traits::CastFilter;
use data_loader::{CastMember, Gender};

/// Keeps cast members whose stored gender case-folds to `gender`.
///
/// Stored values are free-form, so `"Female"` and `"FEMALE"` both match
/// `Gender::Female` while anything unrecognised never matches.
pub struct GenderFilter {
    gender: Gender,
}

impl GenderFilter {
    pub fn new(gender: Gender) -> Self {
        Self { gender }
    }
}

impl CastFilter for GenderFilter {
    fn name(&self) -> &str {
        "GenderFilter"
    }

    fn apply<'a>(&self, members: Vec<&'a CastMember>) -> Vec<&'a CastMember> {
        members
            .into_iter()
            .filter(|member| self.gender.matches(&member.gender))
            .collect()
    }
}
