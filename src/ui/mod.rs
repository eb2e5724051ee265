//! Terminal application for the search widget.
//!
//! The submodules keep presentation concerns out of the search core: `state`
//! owns the per-session [`App`] and its viewport bookkeeping, `actions` maps
//! key presses onto search events, `render` draws the query bar and article
//! list, and `runtime` runs the crossterm event loop.

mod actions;
mod input;
mod render;
mod runtime;
mod state;
mod wrap;

pub use input::QueryInput;
pub use runtime::run;
pub use state::{App, FocusedArticle, SearchOutcome};
