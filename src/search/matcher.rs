use crate::dataset::Record;

/// Which field of a record an occurrence was found in.
///
/// The ordering matters: title occurrences sort before description
/// occurrences within the same record, and the navigator relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Description,
}

/// A single location where the query text occurs inside a record field.
///
/// `start` and `end` are a half-open range of *character* offsets into the
/// field's text, so highlighting stays correct for multi-byte content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOccurrence {
    pub record: usize,
    pub field: Field,
    pub start: usize,
    pub end: usize,
}

/// Find every occurrence of `query` across all records.
///
/// Occurrences are ordered by record, then field (title before description),
/// then left-to-right position. An empty query yields no occurrences: it
/// means "no filter", not "match everything".
pub fn find_matches(records: &[Record], query: &str) -> Vec<MatchOccurrence> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for (record, entry) in records.iter().enumerate() {
        let fields = [
            (Field::Title, entry.title.as_str()),
            (Field::Description, entry.description.as_str()),
        ];
        for (field, text) in fields {
            for (start, end) in scan_occurrences(text, query) {
                matches.push(MatchOccurrence {
                    record,
                    field,
                    start,
                    end,
                });
            }
        }
    }
    matches
}

/// Scan `text` for non-overlapping, case-insensitive occurrences of `query`.
///
/// Returns half-open char-offset ranges in left-to-right order. After a hit
/// the scan resumes past the hit, so a query overlapping itself is counted
/// once per consumed span ("aa" in "aaaa" is two hits, not three).
///
/// Matching is literal substring containment over case-folded characters.
/// No pattern engine is involved, so characters like `.` or `*` carry no
/// special meaning.
pub(crate) fn scan_occurrences(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let haystack: Vec<char> = text.chars().collect();
    let mut occurrences = Vec::new();
    let mut position = 0;
    while position + needle.len() <= haystack.len() {
        if matches_at(&haystack, position, &needle) {
            occurrences.push((position, position + needle.len()));
            position += needle.len();
        } else {
            position += 1;
        }
    }
    occurrences
}

fn matches_at(haystack: &[char], offset: usize, needle: &[char]) -> bool {
    haystack[offset..offset + needle.len()]
        .iter()
        .zip(needle)
        .all(|(a, b)| chars_eq_folded(*a, *b))
}

/// Case-insensitive comparison of two characters via Unicode lowercasing.
fn chars_eq_folded(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
