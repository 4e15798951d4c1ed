//! Lightweight fuzzy matcher for task text.
//!
//! Three strategies are tried in order, first success wins:
//! 1. Exact substring — highest score, word-boundary bonus.
//! 2. Ordered subsequence — all query chars appear in order, with bonuses
//!    for consecutive runs and word-boundary alignment.
//! 3. Word-level similarity — Levenshtein-based comparison of individual
//!    words, catching typos and transpositions (e.g. "tkas" → "task").
//!
//! Matching is case-insensitive; the reported indices are offsets into the
//! original text's character sequence, used for highlighting.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::distance::levenshtein_chars;

/// Word-tier candidates below this normalized similarity are discarded.
/// 0.5 keeps single-transposition typos of four-letter words in range.
const WORD_SIMILARITY_FLOOR: f64 = 0.5;

/// A successful match: a ranking score plus the character offsets that
/// matched, sorted ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuzzyResult {
    pub score: f64,
    pub matched_indices: Vec<usize>,
}

/// Match `query` against `text`. Returns `None` when nothing matches or the
/// trimmed query is empty — callers treat an empty query as "show
/// everything, highlight nothing".
pub fn fuzzy_match(text: &str, query: &str) -> Option<FuzzyResult> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    let text = lowered(text);
    let query = lowered(query);

    const TIERS: [fn(&[char], &[char]) -> Option<FuzzyResult>; 3] =
        [exact_substring, ordered_subsequence, word_similarity];
    TIERS.iter().find_map(|tier| tier(&text, &query))
}

/// Per-character lowercasing keeps a 1:1 mapping between lowered offsets
/// and the original text (multi-char expansions are truncated).
fn lowered(s: &str) -> Vec<char> {
    s.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

fn is_word_start(text: &[char], idx: usize) -> bool {
    idx == 0 || text[idx - 1].is_whitespace()
}

fn exact_substring(text: &[char], query: &[char]) -> Option<FuzzyResult> {
    if query.len() > text.len() {
        return None;
    }
    let idx = (0..=text.len() - query.len())
        .find(|&i| &text[i..i + query.len()] == query)?;

    let mut score = 1000.0;
    if is_word_start(text, idx) {
        score += 50.0;
    }
    Some(FuzzyResult {
        score,
        matched_indices: (idx..idx + query.len()).collect(),
    })
}

fn ordered_subsequence(text: &[char], query: &[char]) -> Option<FuzzyResult> {
    let mut indices = Vec::with_capacity(query.len());
    let mut cursor = 0usize;
    for &qc in query {
        let offset = text[cursor..].iter().position(|&tc| tc == qc)?;
        indices.push(cursor + offset);
        cursor += offset + 1;
    }

    let mut score = 100.0;
    for pair in indices.windows(2) {
        if pair[1] == pair[0] + 1 {
            score += 10.0;
        }
    }
    for &idx in &indices {
        if is_word_start(text, idx) {
            score += 5.0;
        }
    }

    Some(FuzzyResult {
        score,
        matched_indices: indices,
    })
}

/// Whitespace-delimited word with its start offset in the char sequence.
#[derive(Debug, Clone, Copy)]
struct WordSpan {
    start: usize,
    len: usize,
}

fn split_words(chars: &[char]) -> Vec<WordSpan> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in chars.iter().enumerate() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                words.push(WordSpan { start: s, len: i - s });
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        words.push(WordSpan {
            start: s,
            len: chars.len() - s,
        });
    }
    words
}

fn word_similarity(text: &[char], query: &[char]) -> Option<FuzzyResult> {
    let text_words = split_words(text);
    let query_words = split_words(query);
    if query_words.is_empty() {
        return None;
    }

    let mut matched = BTreeSet::new();
    let mut total_score = 0.0;
    let mut words_matched = 0usize;

    for qw in &query_words {
        let query_word = &query[qw.start..qw.start + qw.len];
        let mut best_score = 0.0;
        let mut best: Option<(usize, usize)> = None;

        for tw in &text_words {
            let text_word = &text[tw.start..tw.start + tw.len];
            let max_len = qw.len.max(tw.len);
            if max_len == 0 {
                continue;
            }
            let dist = levenshtein_chars(query_word, text_word);
            let similarity = 1.0 - dist as f64 / max_len as f64;
            if similarity < WORD_SIMILARITY_FLOOR {
                continue;
            }
            let score = similarity * 50.0;
            if score > best_score {
                best_score = score;
                best = Some((tw.start, qw.len.min(tw.len)));
            }
        }

        if let Some((start, len)) = best {
            total_score += best_score;
            words_matched += 1;
            matched.extend(start..start + len);
        }
    }

    if words_matched == 0 {
        return None;
    }

    let coverage_bonus = words_matched as f64 / query_words.len() as f64 * 20.0;
    Some(FuzzyResult {
        score: 10.0 + total_score + coverage_bonus,
        matched_indices: matched.into_iter().collect(),
    })
}
