//! The search core: match indexing, segment splitting, and cursor
//! navigation over the article dataset.
//!
//! Everything here is pure logic with no terminal dependency. The UI layer
//! feeds [`SearchEvent`]s into [`SearchState::apply`] and executes the
//! returned [`Effect`]s; both the match counter and the inline highlighting
//! are derived from the same occurrence scan so the two can never disagree.

mod matcher;
mod navigator;
mod segments;
mod state;

pub use matcher::{Field, MatchOccurrence, find_matches};
pub use navigator::Direction;
pub use segments::{Segment, split_segments};
pub use state::{Effect, SearchEvent, SearchState};
