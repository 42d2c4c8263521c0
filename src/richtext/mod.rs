// SPDX-License-Identifier: MPL-2.0
//! Inline emphasis segmentation for UI strings.
//!
//! UI messages may carry `**bold**` runs. [`segment`] splits such a string
//! into an ordered sequence of plain and emphasized [`Segment`]s so the
//! rendering layer can emit them as inline text without ever parsing markup
//! itself. Malformed markup never fails; a dangling `**` stays in the text
//! as literal characters.

/// Emphasis delimiter recognized in message strings.
const DELIMITER: &str = "**";

/// A contiguous run of text with a single emphasis mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

impl Segment {
    /// Creates a plain segment.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    /// Creates an emphasized segment.
    #[must_use]
    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// Splits `input` into alternating plain/emphasized segments.
///
/// Paired `**` markers toggle emphasis and are stripped; text between a pair
/// becomes an emphasized segment. A dangling marker (odd count) is kept as
/// literal text. Zero-length runs are dropped, so `****` contributes no
/// segment, and adjacent runs with the same mode are merged; consequently no
/// two adjacent segments share an emphasis mode and no segment is empty.
///
/// Concatenating the returned texts reproduces `input` with the paired
/// delimiters removed and nothing else changed.
#[must_use]
pub fn segment(input: &str) -> Vec<Segment> {
    let marks: Vec<usize> = input.match_indices(DELIMITER).map(|(at, _)| at).collect();
    if marks.is_empty() {
        return vec![Segment::plain(input)];
    }

    // An odd trailing marker has no partner; leave it in the text untouched.
    let paired = marks.len() - marks.len() % 2;

    let mut segments = Vec::new();
    let mut cursor = 0;
    for pair in marks[..paired].chunks_exact(2) {
        let (open, close) = (pair[0], pair[1]);
        push_run(&mut segments, &input[cursor..open], false);
        push_run(&mut segments, &input[open + DELIMITER.len()..close], true);
        cursor = close + DELIMITER.len();
    }
    push_run(&mut segments, &input[cursor..], false);
    segments
}

/// Appends a run, merging into the previous segment when the mode matches
/// and skipping zero-length runs.
fn push_run(segments: &mut Vec<Segment>, text: &str, emphasized: bool) {
    if text.is_empty() {
        return;
    }
    if let Some(last) = segments.last_mut() {
        if last.emphasized == emphasized {
            last.text.push_str(text);
            return;
        }
    }
    segments.push(Segment {
        text: text.to_string(),
        emphasized,
    });
}
