//! Index building.
//!
//! A single pass over the rows fills both views. Every row lands in exactly
//! one movie entry's cast and exactly one actor's appearance list, in file
//! order.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{debug, info};

/// Build both indexes from a row stream.
///
/// Returns the title index, the actor index and the row counter. The
/// counter starts at 1 and is bumped once per row, so it ends at
/// `rows + 1`.
pub fn build_indexes<I>(rows: I) -> (TitleIndex, ActorIndex, usize)
where
    I: IntoIterator<Item = FilmographyRow>,
{
    let mut titles = TitleIndex::new();
    let mut actors = ActorIndex::new();
    let mut row_count = 1;

    for row in rows {
        insert_row(&mut titles, &mut actors, row);
        row_count += 1;
    }

    (titles, actors, row_count)
}

fn insert_row(titles: &mut TitleIndex, actors: &mut ActorIndex, row: FilmographyRow) {
    let actor_name = row.actor_name();

    // First row for a title fixes its year and display casing
    titles
        .entry(fold_key(&row.title))
        .or_insert_with(|| MovieEntry::new(row.year, row.title.as_str()))
        .cast
        .push(CastMember {
            name: actor_name.clone(),
            gender: row.gender.clone(),
            character: row.character.clone(),
        });

    actors
        .entry(fold_key(&actor_name))
        .or_insert_with(Vec::new)
        .push(AppearanceRecord {
            year: row.year,
            title: row.title,
            character: row.character,
            actor_name,
            gender: row.gender,
        });
}

impl FilmographyIndex {
    /// Build from already-parsed rows
    pub fn build<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = FilmographyRow>,
    {
        let (titles, actors, row_count) = build_indexes(rows);
        Self {
            titles,
            actors,
            row_count,
        }
    }

    /// Build from fallible rows, stopping at the first error.
    ///
    /// Nothing is returned on failure; there is no partially built index.
    pub fn try_build<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<FilmographyRow>>,
    {
        let mut first_error = None;
        let rows = rows.into_iter().map_while(|row| match row {
            Ok(row) => Some(row),
            Err(e) => {
                first_error = Some(e);
                None
            }
        });
        let index = Self::build(rows);

        match first_error {
            Some(e) => Err(e),
            None => Ok(index),
        }
    }

    /// Load and index a filmography TSV file.
    ///
    /// This is the main entry point used by the binary.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading filmography from {}", path.display());

        let rows = parser::open_rows(path)?;
        let index = Self::try_build(rows)?;

        let (titles, actors, cast_entries) = index.counts();
        info!(
            "Indexed {} titles, {} actors, {} cast entries",
            titles, actors, cast_entries
        );
        debug!("Build row counter: {}", index.row_count());
        Ok(index)
    }
}
