//! Substring scoring and ranking.
//!
//! Points are cumulative: a title that starts with the term also contains it,
//! so such a title earns both [`TITLE_MATCH`] and [`TITLE_PREFIX`].

use super::types::{Document, ScoredResult};

pub const TITLE_MATCH: u32 = 10;
pub const CONTENT_MATCH: u32 = 5;
pub const TITLE_PREFIX: u32 = 5;

const ELLIPSIS: &str = "...";

/// Score `doc` against an already lowercased `term`. Zero means no match.
pub fn score(term: &str, doc: &Document) -> u32 {
    let title = doc.title.to_lowercase();
    let content = doc.content.to_lowercase();

    let mut score = 0;
    if title.contains(term) {
        score += TITLE_MATCH;
    }
    if content.contains(term) {
        score += CONTENT_MATCH;
    }
    if title.starts_with(term) {
        score += TITLE_PREFIX;
    }
    score
}

/// Cut `content` to `max_chars` characters, appending `...` when anything was cut.
///
/// Counts characters, not bytes, so a multi-byte character is never split.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &content[..cut], ELLIPSIS),
        None => content.to_string(),
    }
}

/// Score every document, drop non-matches and keep the best `limit`.
///
/// Sorting is stable: equal scores keep the order the documents came in.
pub fn rank(
    query: &str,
    documents: Vec<Document>,
    limit: usize,
    excerpt_chars: usize,
) -> Vec<ScoredResult> {
    let term = query.to_lowercase();

    let mut results: Vec<ScoredResult> = documents
        .into_iter()
        .filter_map(|document| {
            let score = score(&term, &document);
            (score > 0).then_some(ScoredResult { document, score })
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);

    for result in &mut results {
        result.document.content = excerpt(&result.document.content, excerpt_chars);
    }
    results
}
