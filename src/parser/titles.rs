use std::sync::LazyLock;

use regex::Regex;

use super::normalize::normalize;

// Heading conventions vary by annotator; each pattern below covers one of
// the conventions actually present in the corpus.

// "TREATISE ON ..." heading, question title after one or two <br>.
static TREATISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\bTREATISE\b[^<]*(?:<br\b[^>]*>\s*){1,2}([^<]+)").unwrap()
});

// Emphasized all-capitals topic line, optionally "OF ...", punctuation and
// a parenthetical allowed. `[^a-z<]` keeps the match inside one text run
// and rejects mixed-case prose.
static TOPIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<(?:b|i|strong|em|h[1-6])\b[^>]*>\s*((?:OF\s+)?[A-Z][^a-z<]{3,200})").unwrap()
});

static HEADING_CLOSED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h[1-6]\b[^>]*>(.*?)</h[1-6]\s*>").unwrap());
static HEADING_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h[1-6]\b[^>]*>([^<]+)").unwrap());

// "(IN TEN ARTICLES)", "(NINE ARTICLES)", "(In 8 Articles)" ...
static ARTICLE_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(\s*(?:in\s+)?[a-z0-9]+(?:-[a-z0-9]+)?\s+articles?\s*\)").unwrap());

/// Question title cascade: treatise heading, then standalone topic line,
/// then a synthesized label. Always yields something.
pub fn question_title(doc: &str, number: u32) -> String {
    if let Some(caps) = TREATISE_RE.captures(doc) {
        let title = normalize(&caps[1]);
        if !title.is_empty() {
            return title;
        }
    }
    if let Some(caps) = TOPIC_RE.captures(doc) {
        let title = normalize(&caps[1]);
        if !title.is_empty() {
            return title;
        }
    }
    format!("Question {}", number)
}

/// Title for an article discovered via its thesis marker: the first
/// heading-like element inside the article's segmented span, verbatim
/// (normalized). Empty when the span has no heading.
pub fn article_title(span: &str) -> String {
    if let Some(caps) = HEADING_CLOSED_RE.captures(span) {
        return normalize(&caps[1]);
    }
    if let Some(caps) = HEADING_OPEN_RE.captures(span) {
        return normalize(&caps[1]);
    }
    String::new()
}

/// Title for an article reconstructed by the recovery pass. Only fires when
/// the document carries an article-count parenthetical; otherwise the title
/// stays empty. Known heuristic gap, kept narrow on purpose.
pub fn recovered_article_title(doc: &str, number: u32) -> String {
    if ARTICLE_COUNT_RE.is_match(doc) {
        format!("Article {}", number)
    } else {
        String::new()
    }
}
