use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::bilingual::split_bilingual;
use super::markers::{Marker, Role};
use super::titles;
use crate::model::{Article, BilingualText, Objection, Reply};
use crate::parts::PartId;

// Trailing structural boundary: a horizontal rule followed by a link back
// to the top of the document. Closes the last span when no marker follows.
static TRAILING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<hr\b[^>]*>\s*(?:<[^>]*>\s*)*?<a\b[^>]*href\s*=\s*["']?#"#).unwrap()
});

/// Span owned by marker `idx`: from just past the marker to the next marker
/// of equal-or-greater significance, or the trailing boundary, whichever
/// comes first. With no closing tags in the source this is a heuristic, not
/// a grammar rule: a missing neighbor silently widens the span.
pub fn span<'a>(doc: &'a str, markers: &[Marker], idx: usize) -> &'a str {
    let marker = &markers[idx];
    let major = marker.role.is_major();

    let next = markers[idx + 1..]
        .iter()
        .find(|m| !major || m.role.is_major())
        .map(|m| m.start)
        .unwrap_or(doc.len());
    let boundary = TRAILING_RE
        .find_at(doc, marker.end)
        .map(|m| m.start())
        .unwrap_or(doc.len());

    &doc[marker.end..next.min(boundary)]
}

/// Discover articles from thesis markers, then reconstruct any article
/// index referenced only by minor markers. Article numbers are unique in
/// the result (first thesis per number wins) and sorted ascending.
pub fn extract_articles(
    doc: &str,
    markers: &[Marker],
    part: PartId,
    question: u32,
) -> Vec<Article> {
    let mut declared: Vec<(u32, usize)> = Vec::new();
    for (idx, marker) in markers.iter().enumerate() {
        if let Role::Thesis { article } = marker.role {
            if !declared.iter().any(|&(n, _)| n == article) {
                declared.push((article, idx));
            }
        }
    }

    let mut articles: Vec<Article> = declared
        .iter()
        .map(|&(number, thesis_idx)| build_article(doc, markers, part, question, number, Some(thesis_idx)))
        .collect();

    // Recovery pass: minor markers whose article never got a thesis marker.
    // Real condition in a subset of files; the article still has to appear.
    let orphaned: BTreeSet<u32> = markers
        .iter()
        .filter_map(|m| match m.role {
            Role::Thesis { .. } | Role::Prologue => None,
            other => other.article(),
        })
        .filter(|n| !declared.iter().any(|&(d, _)| d == *n))
        .collect();
    for number in orphaned {
        debug!(article = number, "recovering article with no thesis marker");
        articles.push(build_article(doc, markers, part, question, number, None));
    }

    articles.sort_by_key(|a| a.number);
    articles
}

/// Role extraction for one article. Scans the whole marker stream, not just
/// the article's own span: objection and reply markers are interleaved or
/// even precede the thesis marker in malformed files. Sed contra and
/// respondeo take the first occurrence; objections and replies accumulate
/// in document order, duplicates included.
fn build_article(
    doc: &str,
    markers: &[Marker],
    part: PartId,
    question: u32,
    number: u32,
    thesis_idx: Option<usize>,
) -> Article {
    let (thesis, title) = match thesis_idx {
        Some(idx) => {
            let article_span = span(doc, markers, idx);
            (split_bilingual(article_span), titles::article_title(article_span))
        }
        None => (
            BilingualText::default(),
            titles::recovered_article_title(doc, number),
        ),
    };

    let mut objections = Vec::new();
    let mut replies = Vec::new();
    let mut sed_contra = BilingualText::default();
    let mut respondeo = BilingualText::default();

    for (idx, marker) in markers.iter().enumerate() {
        match marker.role {
            Role::Objection { article, number: n } if article == number => {
                objections.push(Objection {
                    number: n,
                    text: split_bilingual(span(doc, markers, idx)),
                });
            }
            Role::Reply { article, number: n } if article == number => {
                replies.push(Reply {
                    number: n,
                    text: split_bilingual(span(doc, markers, idx)),
                });
            }
            Role::SedContra { article } if article == number && sed_contra.is_empty() => {
                sed_contra = split_bilingual(span(doc, markers, idx));
            }
            Role::Respondeo { article } if article == number && respondeo.is_empty() => {
                respondeo = split_bilingual(span(doc, markers, idx));
            }
            _ => {}
        }
    }

    Article {
        part,
        question,
        number,
        title,
        thesis,
        objections,
        sed_contra,
        respondeo,
        replies,
    }
}
