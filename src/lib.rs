//! Core crate exports for building and running the `artsearch` terminal
//! widget.
//!
//! The root module re-exports the search core and the UI entry points so
//! that embedders can run the widget without digging through the module
//! hierarchy.

pub mod app_dirs;
pub mod dataset;
pub mod logging;
pub mod search;
pub mod theme;
pub mod ui;

pub use dataset::Record;
pub use search::{
    Direction, Effect, Field, MatchOccurrence, SearchEvent, SearchState, Segment, find_matches,
    split_segments,
};
pub use ui::{App, FocusedArticle, QueryInput, SearchOutcome, run};
