use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::dataset::Record;
use crate::search::{Effect, SearchEvent, SearchState, split_segments};
use crate::theme::Theme;

use super::input::QueryInput;
use super::wrap::wrap_styled;

/// What the widget reports when the user exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub query: String,
    pub total_matches: usize,
    pub focused: Option<FocusedArticle>,
}

/// The article whose match was under the cursor at exit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusedArticle {
    pub index: usize,
    pub title: String,
}

/// Vertical placement of one article inside the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ArticlePlacement {
    pub(crate) first_line: usize,
    pub(crate) height: usize,
}

/// The interactive application: dataset, query editor, search state, and
/// viewport bookkeeping.
pub struct App {
    pub(crate) records: Vec<Record>,
    pub(crate) input: QueryInput,
    pub(crate) search: SearchState,
    pub(crate) theme: Theme,
    pub(crate) scroll: usize,
    pending_scroll: Option<usize>,
    pub(crate) document_height: usize,
    pub(crate) viewport_height: usize,
}

impl App {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            input: QueryInput::default(),
            search: SearchState::initial(),
            theme: Theme::default(),
            scroll: 0,
            pending_scroll: None,
            document_height: 0,
            viewport_height: 0,
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Seed the query editor and search state before the first draw.
    pub fn set_initial_query(&mut self, query: String) {
        self.input = QueryInput::new(query.clone());
        self.apply_event(SearchEvent::Input(query));
    }

    /// Run one search state transition and queue any scroll effect for the
    /// next draw, when the viewport dimensions are known.
    pub(crate) fn apply_event(&mut self, event: SearchEvent) {
        let (next, effect) = self.search.apply(&self.records, event);
        self.search = next;
        if let Some(Effect::ScrollIntoView(record)) = effect {
            self.pending_scroll = Some(record);
        }
    }

    /// Move the viewport by `delta` lines, clamped to the document.
    pub(crate) fn scroll_by(&mut self, delta: isize) {
        let max = self.max_scroll();
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    pub(crate) fn max_scroll(&self) -> usize {
        self.document_height.saturating_sub(self.viewport_height)
    }

    /// Consume a queued scroll effect against the freshly computed layout.
    pub(crate) fn resolve_pending_scroll(&mut self, placements: &[ArticlePlacement]) {
        let Some(record) = self.pending_scroll.take() else {
            return;
        };
        let Some(placement) = placements.get(record).copied() else {
            return;
        };
        self.scroll = scroll_into_view(
            self.scroll,
            placement,
            self.viewport_height,
            self.max_scroll(),
        );
    }

    /// Build the article list as wrapped, highlighted lines plus each
    /// article's placement, for a content area `width` columns wide.
    pub(crate) fn build_document(
        &self,
        width: usize,
    ) -> (Vec<Line<'static>>, Vec<ArticlePlacement>) {
        let query = self.input.text();
        let focused = self.search.focused_record();
        let mut lines = Vec::new();
        let mut placements = Vec::with_capacity(self.records.len());

        for (index, record) in self.records.iter().enumerate() {
            let first_line = lines.len();

            let mut title_spans = Vec::new();
            if focused == Some(index) {
                title_spans.push(Span::styled("▌ ".to_string(), self.theme.focus_marker));
            }
            title_spans.extend(self.field_spans(&record.title, query, self.theme.title));
            lines.extend(wrap_styled(&title_spans, width));

            let description_spans =
                self.field_spans(&record.description, query, Style::default());
            lines.extend(wrap_styled(&description_spans, width));

            lines.push(Line::from(Span::styled(
                record.date.clone(),
                self.theme.date,
            )));

            placements.push(ArticlePlacement {
                first_line,
                height: lines.len() - first_line,
            });
            lines.push(Line::default());
        }

        (lines, placements)
    }

    fn field_spans(&self, text: &str, query: &str, base: Style) -> Vec<Span<'static>> {
        split_segments(text, query)
            .into_iter()
            .map(|segment| {
                let style = if segment.highlighted {
                    self.theme.highlight
                } else {
                    base
                };
                Span::styled(segment.text, style)
            })
            .collect()
    }

    /// Text for the occurrence counter shown beside the query bar.
    pub(crate) fn counter_text(&self) -> String {
        let total = self.search.total_matches();
        if self.input.text().is_empty() {
            String::new()
        } else if total == 0 {
            "no matches".to_string()
        } else {
            match self.search.cursor {
                Some(cursor) => format!("match {}/{total}", cursor + 1),
                None => format!("{total} matches"),
            }
        }
    }

    pub fn outcome(&self) -> SearchOutcome {
        let focused = self.search.focused_record().map(|index| FocusedArticle {
            index,
            title: self.records[index].title.clone(),
        });
        SearchOutcome {
            query: self.input.text().to_string(),
            total_matches: self.search.total_matches(),
            focused,
        }
    }
}

/// Adjust `scroll` just enough that the placement is fully visible; articles
/// taller than the viewport pin to their first line.
fn scroll_into_view(
    scroll: usize,
    placement: ArticlePlacement,
    viewport: usize,
    max_scroll: usize,
) -> usize {
    let top = placement.first_line;
    let bottom = top + placement.height;
    let adjusted = if top < scroll {
        top
    } else if viewport > 0 && bottom > scroll + viewport {
        bottom.saturating_sub(viewport).min(top)
    } else {
        scroll
    };
    adjusted.min(max_scroll)
}
