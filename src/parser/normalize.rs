use std::sync::LazyLock;

use regex::Regex;

static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\b[^>]*>").unwrap());
static PARA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<p\b[^>]*>").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static HSPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static NL_EDGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" *\n *").unwrap());
static MULTI_NL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Closed set of character references seen in the corpus. Anything outside
/// this table is left verbatim. `&amp;` decodes last so doubly-escaped
/// references ("&amp;lt;") come out single-escaped, not as a tag.
const ENTITIES: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&nbsp;", " "),
    ("&mdash;", "\u{2014}"),
    ("&ndash;", "\u{2013}"),
    ("&ldquo;", "\u{201C}"),
    ("&rdquo;", "\u{201D}"),
    ("&lsquo;", "\u{2018}"),
    ("&rsquo;", "\u{2019}"),
    ("&#8212;", "\u{2014}"),
    ("&#8211;", "\u{2013}"),
    ("&#8220;", "\u{201C}"),
    ("&#8221;", "\u{201D}"),
    ("&#8216;", "\u{2018}"),
    ("&#8217;", "\u{2019}"),
    // Windows-1252 numeric forms, common in the older files
    ("&#151;", "\u{2014}"),
    ("&#150;", "\u{2013}"),
    ("&#147;", "\u{201C}"),
    ("&#148;", "\u{201D}"),
    ("&#145;", "\u{2018}"),
    ("&#146;", "\u{2019}"),
    ("&#34;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

/// Strip markup from a fragment and canonicalize whitespace into clean
/// prose. Total: any string in, plain text out, never fails.
///
/// Line-break elements become newlines, paragraph openings a blank line,
/// every other tag vanishes without touching its enclosed text.
pub fn normalize(fragment: &str) -> String {
    let text = fragment.replace("\r\n", "\n").replace('\r', "\n");
    let text = COMMENT_RE.replace_all(&text, "");
    let text = BR_RE.replace_all(&text, "\n");
    let text = PARA_RE.replace_all(&text, "\n\n");
    let text = TAG_RE.replace_all(&text, "");

    let mut text = text.into_owned();
    for (entity, ch) in ENTITIES {
        if text.contains(entity) {
            text = text.replace(entity, ch);
        }
    }

    let text = HSPACE_RE.replace_all(&text, " ");
    let text = NL_EDGE_RE.replace_all(&text, "\n");
    let text = MULTI_NL_RE.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_keeps_text() {
        assert_eq!(normalize("<b>Utrum</b> Deus <i>sit</i>"), "Utrum Deus sit");
    }

    #[test]
    fn breaks_and_paragraphs() {
        assert_eq!(normalize("one<br>two"), "one\ntwo");
        assert_eq!(normalize("one<BR />two"), "one\ntwo");
        assert_eq!(normalize("one<p>two"), "one\n\ntwo");
    }

    #[test]
    fn decodes_known_entities() {
        assert_eq!(normalize("Peter &amp; Paul"), "Peter & Paul");
        assert_eq!(normalize("&ldquo;I answer&rdquo;"), "\u{201C}I answer\u{201D}");
        assert_eq!(normalize("a&#8212;b"), "a\u{2014}b");
    }

    #[test]
    fn unknown_entities_left_alone() {
        assert_eq!(normalize("&aelig; &unknown;"), "&aelig; &unknown;");
    }

    #[test]
    fn double_escaped_amp() {
        assert_eq!(normalize("&amp;lt;"), "&lt;");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  a \t b  "), "a b");
        assert_eq!(normalize("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize("a <br>  b"), "a\nb");
    }

    #[test]
    fn comments_removed_even_with_angle_brackets() {
        assert_eq!(normalize("x<!-- a > b -->y"), "xy");
    }

    #[test]
    fn total_on_garbage() {
        assert_eq!(normalize(""), "");
        normalize("<td><tr<<>>&&#;\u{0}\u{fffd}");
    }

    #[test]
    fn nbsp_collapses_with_spaces() {
        assert_eq!(normalize("a&nbsp;&nbsp; b"), "a b");
    }
}
