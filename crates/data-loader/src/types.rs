//! Core domain types for the filmography dataset.
//!
//! One input line becomes a [`FilmographyRow`]. The indexer spreads every
//! row over two views:
//! - [`TitleIndex`]: lower-cased title -> [`MovieEntry`] with its cast
//! - [`ActorIndex`]: lower-cased "first last" -> [`AppearanceRecord`]s
//!
//! Both views are owned by [`FilmographyIndex`], which only hands out
//! shared references once it has been built.

use crate::error::ParseGenderError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Release year as it appears in the first column of the dataset
pub type Year = i32;

/// Lower-cased title -> aggregated movie entry
pub type TitleIndex = HashMap<String, MovieEntry>;

/// Lower-cased actor name -> appearances in file order
pub type ActorIndex = HashMap<String, Vec<AppearanceRecord>>;

/// Case-fold a display string into the key used by both indexes.
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

// =============================================================================
// Input Row
// =============================================================================

/// One parsed line of the TSV file, fields in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmographyRow {
    pub year: Year,
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub character: String,
}

impl FilmographyRow {
    /// First and last name joined by a single space.
    ///
    /// The space is kept even when one of the parts is empty, so
    /// `("Cher", "")` becomes `"Cher "`.
    pub fn actor_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Index Records
// =============================================================================

/// One actor's billed role within a movie entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    pub gender: String,
    pub character: String,
}

/// All appearances sharing one title key.
///
/// `year` and `display_title` come from the first row seen for the key and
/// are never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieEntry {
    pub year: Year,
    pub display_title: String,
    pub cast: Vec<CastMember>,
}

impl MovieEntry {
    pub fn new(year: Year, display_title: impl Into<String>) -> Self {
        Self {
            year,
            display_title: display_title.into(),
            cast: Vec::new(),
        }
    }
}

/// One movie role attributed to an actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceRecord {
    pub year: Year,
    pub title: String,
    pub character: String,
    pub actor_name: String,
    pub gender: String,
}

// =============================================================================
// Gender filter value
// =============================================================================

/// Gender restriction accepted by title lookups.
///
/// Stored cast genders stay free-form strings; this enum is only the
/// filter side, compared case-insensitively against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// True when `raw` case-folds to this gender's name
    pub fn matches(&self, raw: &str) -> bool {
        fold_key(raw) == self.as_str()
    }
}

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_key(s.trim()).as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ParseGenderError(s.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// FilmographyIndex - build once, read many
// =============================================================================

/// Owner of both indexes plus the row count reported by the build.
///
/// There are no mutators: the only way to obtain one is through the
/// builders in [`crate::index`], so the indexes are frozen from the moment
/// a caller can see them.
#[derive(Debug, Default)]
pub struct FilmographyIndex {
    pub(crate) titles: TitleIndex,
    pub(crate) actors: ActorIndex,
    pub(crate) row_count: usize,
}

impl FilmographyIndex {
    pub fn titles(&self) -> &TitleIndex {
        &self.titles
    }

    pub fn actors(&self) -> &ActorIndex {
        &self.actors
    }

    /// Get a movie entry by title, case-insensitively
    pub fn get_movie(&self, title: &str) -> Option<&MovieEntry> {
        self.titles.get(&fold_key(title))
    }

    /// Get every appearance of an actor, case-insensitively.
    ///
    /// Returns an empty slice for unknown actors.
    pub fn get_appearances(&self, actor_name: &str) -> &[AppearanceRecord] {
        self.actors
            .get(&fold_key(actor_name))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Row counter as returned by the build.
    ///
    /// The counter starts at 1, so this is one more than the number of
    /// rows actually indexed.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// (distinct titles, distinct actors, cast entries)
    pub fn counts(&self) -> (usize, usize, usize) {
        let cast_entries = self.titles.values().map(|m| m.cast.len()).sum();
        (self.titles.len(), self.actors.len(), cast_entries)
    }

    /// Rough heap footprint of both indexes in bytes.
    ///
    /// Counts map slots, vector capacity and string capacity. Allocator
    /// overhead and hash-table control bytes are ignored.
    pub fn approx_memory_bytes(&self) -> usize {
        use std::mem::size_of;

        let title_slots = self.titles.capacity() * (size_of::<String>() + size_of::<MovieEntry>());
        let title_heap: usize = self
            .titles
            .iter()
            .map(|(key, movie)| {
                key.capacity()
                    + movie.display_title.capacity()
                    + movie.cast.capacity() * size_of::<CastMember>()
                    + movie
                        .cast
                        .iter()
                        .map(|c| c.name.capacity() + c.gender.capacity() + c.character.capacity())
                        .sum::<usize>()
            })
            .sum();

        let actor_slots =
            self.actors.capacity() * (size_of::<String>() + size_of::<Vec<AppearanceRecord>>());
        let actor_heap: usize = self
            .actors
            .iter()
            .map(|(key, appearances)| {
                key.capacity()
                    + appearances.capacity() * size_of::<AppearanceRecord>()
                    + appearances
                        .iter()
                        .map(|a| {
                            a.title.capacity()
                                + a.character.capacity()
                                + a.actor_name.capacity()
                                + a.gender.capacity()
                        })
                        .sum::<usize>()
            })
            .sum();

        title_slots + title_heap + actor_slots + actor_heap
    }
}
