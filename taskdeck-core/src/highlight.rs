//! Turns matched character offsets into render-ready text/match runs.
//!
//! Pure function of its inputs: it does no matching itself, so the offsets
//! can come from any source (in practice the fuzzy matcher).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Text,
    Match,
}

/// One run of characters, either plain text or part of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub value: String,
}

/// Split `text` into an ordered run-length sequence of segments. Runs of
/// consecutive matched offsets collapse into one `Match` segment, gaps into
/// one `Text` segment. Empty segments are never emitted; concatenating all
/// segment values reconstructs `text` exactly.
pub fn highlight_segments(text: &str, matched_indices: &[usize]) -> Vec<Segment> {
    let matched: HashSet<usize> = matched_indices.iter().copied().collect();

    let mut segments = Vec::new();
    let mut run = String::new();
    let mut run_kind = SegmentKind::Text;

    for (i, c) in text.chars().enumerate() {
        let kind = if matched.contains(&i) {
            SegmentKind::Match
        } else {
            SegmentKind::Text
        };
        if kind != run_kind && !run.is_empty() {
            segments.push(Segment {
                kind: run_kind,
                value: std::mem::take(&mut run),
            });
        }
        run_kind = kind;
        run.push(c);
    }
    if !run.is_empty() {
        segments.push(Segment {
            kind: run_kind,
            value: run,
        });
    }

    segments
}
