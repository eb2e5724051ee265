use super::matcher::scan_occurrences;

/// A contiguous run of text that is either highlighted or plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn plain(text: String) -> Self {
        Self {
            text,
            highlighted: false,
        }
    }

    fn highlighted(text: String) -> Self {
        Self {
            text,
            highlighted: true,
        }
    }
}

/// Split `text` into alternating plain/highlighted segments around every
/// case-insensitive occurrence of `query`.
///
/// Uses the same non-overlapping scan as the match indexer, so segment
/// boundaries always agree with the occurrence offsets it reports. Empty
/// segments are omitted; an empty query yields the whole text as one plain
/// segment.
pub fn split_segments(text: &str, query: &str) -> Vec<Segment> {
    if query.is_empty() {
        if text.is_empty() {
            return Vec::new();
        }
        return vec![Segment::plain(text.to_string())];
    }

    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut consumed = 0;
    for (start, end) in scan_occurrences(text, query) {
        if start > consumed {
            segments.push(Segment::plain(chars[consumed..start].iter().collect()));
        }
        segments.push(Segment::highlighted(chars[start..end].iter().collect()));
        consumed = end;
    }
    if consumed < chars.len() {
        segments.push(Segment::plain(chars[consumed..].iter().collect()));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;
    use crate::search::find_matches;

    #[test]
    fn empty_query_yields_single_plain_segment() {
        let segments = split_segments("Introduction to React", "");
        assert_eq!(
            segments,
            vec![Segment {
                text: "Introduction to React".to_string(),
                highlighted: false
            }]
        );
    }

    #[test]
    fn segments_alternate_and_preserve_original_casing() {
        let segments = split_segments("React uses react hooks", "react");
        let rendered: Vec<(&str, bool)> = segments
            .iter()
            .map(|segment| (segment.text.as_str(), segment.highlighted))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("React", true),
                (" uses ", false),
                ("react", true),
                (" hooks", false),
            ]
        );
    }

    #[test]
    fn concatenated_segments_reproduce_the_input() {
        let text = "Components are the building blocks of React applications.";
        let joined: String = split_segments(text, "the")
            .into_iter()
            .map(|segment| segment.text)
            .collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn no_empty_segments_are_emitted() {
        let segments = split_segments("abcabc", "abc");
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|segment| !segment.text.is_empty()));
        assert!(segments.iter().all(|segment| segment.highlighted));
    }

    #[test]
    fn highlighted_segment_count_agrees_with_the_indexer() {
        let title = "React promotes reusable React components";
        let description = "reactive react REACT";
        for query in ["react", "Re", "e"] {
            let records = vec![Record {
                title: title.to_string(),
                description: description.to_string(),
                date: "x".to_string(),
            }];
            let occurrences = find_matches(&records, query).len();
            let highlighted: usize = [title, description]
                .iter()
                .map(|text| {
                    split_segments(text, query)
                        .iter()
                        .filter(|segment| segment.highlighted)
                        .count()
                })
                .sum();
            assert_eq!(highlighted, occurrences, "query {query:?}");
        }
    }

    #[test]
    fn empty_text_yields_no_segments() {
        assert!(split_segments("", "react").is_empty());
        assert!(split_segments("", "").is_empty());
    }
}
