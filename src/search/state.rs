use crate::dataset::Record;

use super::matcher::{MatchOccurrence, find_matches};
use super::navigator::{self, Direction};

/// An input event driving the search state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The query text changed (keystroke, paste, initial query).
    Input(String),
    /// The clear control was invoked.
    Clear,
    /// A next/previous match navigation was requested.
    Navigate(Direction),
}

/// A side effect the presentation layer must carry out after a transition.
///
/// The core never touches the viewport itself; it only describes which
/// record should be brought into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ScrollIntoView(usize),
}

/// The full per-keystroke state of the search widget.
///
/// Immutable per transition: `apply` consumes nothing and returns the
/// successor state plus an optional effect, so the whole state machine is
/// unit-testable without a terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub matches: Vec<MatchOccurrence>,
    pub cursor: Option<usize>,
}

impl SearchState {
    /// The initial state: empty query, no matches, no cursor.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Apply one event, producing the successor state and any effect.
    pub fn apply(&self, records: &[Record], event: SearchEvent) -> (Self, Option<Effect>) {
        match event {
            SearchEvent::Input(query) => {
                let matches = find_matches(records, &query);
                let cursor = navigator::reset(matches.len());
                (
                    Self {
                        query,
                        matches,
                        cursor,
                    },
                    None,
                )
            }
            SearchEvent::Clear => self.apply(records, SearchEvent::Input(String::new())),
            SearchEvent::Navigate(direction) => {
                let cursor = navigator::advance(self.cursor, self.matches.len(), direction);
                let effect = cursor
                    .and_then(|index| self.matches.get(index))
                    .map(|occurrence| Effect::ScrollIntoView(occurrence.record));
                (
                    Self {
                        query: self.query.clone(),
                        matches: self.matches.clone(),
                        cursor,
                    },
                    effect,
                )
            }
        }
    }

    /// Total number of highlighted occurrences across all records.
    pub fn total_matches(&self) -> usize {
        self.matches.len()
    }

    /// Record index of the occurrence under the cursor, if any.
    pub fn focused_record(&self) -> Option<usize> {
        self.cursor
            .and_then(|index| self.matches.get(index))
            .map(|occurrence| occurrence.record)
    }
}
