//! Title and actor lookups.
//!
//! Both lookups case-fold the query, hit one map, and borrow the answer
//! straight out of the index. A miss is a `QueryError::NotFound` carrying
//! the query as typed.

use crate::error::{QueryError, Result};
use crate::filter_pipeline::CastFilterPipeline;
use data_loader::{
    fold_key, ActorIndex, AppearanceRecord, CastMember, FilmographyIndex, Gender, TitleIndex, Year,
};
use serde::Serialize;

/// A found movie with its (possibly filtered) cast
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleResult<'a> {
    pub display_title: &'a str,
    pub year: Year,
    pub members: Vec<&'a CastMember>,
}

/// Every appearance of a found actor, in file order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorResult<'a> {
    pub appearances: &'a [AppearanceRecord],
}

/// Look up a movie by title.
///
/// With `gender_filter` set, only cast members whose stored gender
/// case-insensitively equals it are kept. Cast order is preserved either way.
pub fn lookup_title<'a>(
    titles: &'a TitleIndex,
    query_title: &str,
    gender_filter: Option<Gender>,
) -> Result<TitleResult<'a>> {
    let movie = titles
        .get(&fold_key(query_title))
        .ok_or_else(|| QueryError::NotFound {
            query: query_title.to_string(),
        })?;

    let members = CastFilterPipeline::for_gender(gender_filter).apply(movie.cast.iter().collect());

    Ok(TitleResult {
        display_title: &movie.display_title,
        year: movie.year,
        members,
    })
}

/// Look up every role played by an actor ("first last").
pub fn lookup_actor<'a>(actors: &'a ActorIndex, query_name: &str) -> Result<ActorResult<'a>> {
    let appearances = actors
        .get(&fold_key(query_name))
        .ok_or_else(|| QueryError::NotFound {
            query: query_name.to_string(),
        })?;

    Ok(ActorResult { appearances })
}

/// Both lookups bound to one built index.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    index: &'a FilmographyIndex,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a FilmographyIndex) -> Self {
        Self { index }
    }

    pub fn lookup_title(&self, title: &str, gender: Option<Gender>) -> Result<TitleResult<'a>> {
        lookup_title(self.index.titles(), title, gender)
    }

    pub fn lookup_actor(&self, name: &str) -> Result<ActorResult<'a>> {
        lookup_actor(self.index.actors(), name)
    }
}
