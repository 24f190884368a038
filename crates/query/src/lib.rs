//! Read-only queries against a built `FilmographyIndex`.
//!
//! This crate provides:
//! - `lookup_title`: cast of a movie, optionally restricted by gender
//! - `lookup_actor`: every role an actor played, in file order
//! - `CastFilter` trait and `CastFilterPipeline` for composing cast filters
//! - `QueryEngine`, a thin handle bundling both lookups over one index
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::{FilmographyIndex, Gender};
//! use query::QueryEngine;
//!
//! let index = FilmographyIndex::load_from_file(path)?;
//! let engine = QueryEngine::new(&index);
//!
//! let movie = engine.lookup_title("batman begins", Some(Gender::Female))?;
//! let roles = engine.lookup_actor("christian bale")?;
//! ```
//!
//! Lookups never mutate the index, so repeating a query always gives the
//! same answer.

pub mod error;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod engine;

// Re-export main types
pub use error::{QueryError, Result};
pub use traits::CastFilter;
pub use filter_pipeline::CastFilterPipeline;
pub use engine::{lookup_actor, lookup_title, ActorResult, QueryEngine, TitleResult};
