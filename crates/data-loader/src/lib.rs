//! # Data Loader Crate
//!
//! Loads a tab-separated filmography dataset and indexes it two ways:
//! by movie title and by actor name.
//!
//! ## Main Components
//!
//! - **types**: Row and record types, the two index maps, `FilmographyIndex`
//! - **parser**: Turn TSV lines into `FilmographyRow`s
//! - **index**: Build both indexes in one pass
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::FilmographyIndex;
//! use std::path::Path;
//!
//! let index = FilmographyIndex::load_from_file(Path::new("data/imdb_data_sample.tsv"))?;
//!
//! let movie = index.get_movie("batman begins").unwrap();
//! println!("{} ({}) has {} cast members", movie.display_title, movie.year, movie.cast.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, ParseGenderError, Result};
pub use index::build_indexes;
pub use types::{
    fold_key,
    // Type aliases
    Year,
    TitleIndex,
    ActorIndex,
    // Core types
    FilmographyRow,
    CastMember,
    MovieEntry,
    AppearanceRecord,
    FilmographyIndex,
    // Enums
    Gender,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn batman_rows() -> Vec<FilmographyRow> {
        vec![
            FilmographyRow {
                year: 2005,
                title: "Batman Begins".to_string(),
                first_name: "Christian".to_string(),
                last_name: "Bale".to_string(),
                gender: "male".to_string(),
                character: "Bruce Wayne".to_string(),
            },
            FilmographyRow {
                year: 2005,
                title: "Batman Begins".to_string(),
                first_name: "Michael".to_string(),
                last_name: "Caine".to_string(),
                gender: "male".to_string(),
                character: "Alfred".to_string(),
            },
        ]
    }

    #[test]
    fn test_empty_index() {
        let index = FilmographyIndex::build(Vec::new());
        let (titles, actors, cast_entries) = index.counts();

        assert_eq!(titles, 0);
        assert_eq!(actors, 0);
        assert_eq!(cast_entries, 0);
        assert_eq!(index.approx_memory_bytes(), 0);
    }

    #[test]
    fn test_get_movie_case_insensitive() {
        let index = FilmographyIndex::build(batman_rows());

        let movie = index.get_movie("BATMAN begins").unwrap();
        assert_eq!(movie.year, 2005);
        assert_eq!(movie.display_title, "Batman Begins");
        assert_eq!(
            movie.cast[1],
            CastMember {
                name: "Michael Caine".to_string(),
                gender: "male".to_string(),
                character: "Alfred".to_string(),
            }
        );
    }

    #[test]
    fn test_get_appearances() {
        let index = FilmographyIndex::build(batman_rows());

        let appearances = index.get_appearances("christian bale");
        assert_eq!(appearances.len(), 1);
        assert_eq!(appearances[0].character, "Bruce Wayne");
        assert_eq!(appearances[0].actor_name, "Christian Bale");
    }

    #[test]
    fn test_empty_queries() {
        let index = FilmographyIndex::build(batman_rows());

        assert!(index.get_movie("The Dark Knight").is_none());
        assert!(index.get_appearances("Heath Ledger").is_empty());
    }

    #[test]
    fn test_memory_estimate_grows() {
        let small = FilmographyIndex::build(batman_rows()[..1].to_vec());
        let large = FilmographyIndex::build(batman_rows());
        assert!(small.approx_memory_bytes() > 0);
        assert!(large.approx_memory_bytes() > small.approx_memory_bytes());
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" FEMALE ".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(
            "other".parse::<Gender>(),
            Err(ParseGenderError("other".to_string()))
        );
        assert_eq!(
            ParseGenderError("other".to_string()).to_string(),
            "Unknown gender restriction \"other\"; expected male or female"
        );
        assert!(Gender::Female.matches("Female"));
        assert!(!Gender::Male.matches("female"));
    }
}
