pub mod articles;
pub mod bilingual;
pub mod markers;
pub mod normalize;
pub mod titles;

use tracing::debug;

use crate::model::Question;
use crate::parts::PartId;

/// Parse one source document into its question tree.
///
/// Pure and total: any input — empty, garbage, markerless — yields a
/// Question; a document with nothing recoverable gets an empty article list
/// and the synthesized title, never an error. Identical input yields a
/// field-for-field identical result.
pub fn parse_question(part: PartId, number: u32, raw: &str) -> Question {
    let marks = markers::scan(raw);
    debug!(
        part = part.code(),
        question = number,
        markers = marks.len(),
        "scanned document"
    );

    let prologue = marks
        .iter()
        .position(|m| m.role == markers::Role::Prologue)
        .map(|idx| bilingual::split_bilingual(articles::span(raw, &marks, idx)))
        .unwrap_or_default();

    Question {
        part,
        number,
        title: titles::question_title(raw, number),
        prologue,
        articles: articles::extract_articles(raw, &marks, part, number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_on_arbitrary_input() {
        for raw in ["", "binary \u{0}\u{1}\u{2} garbage", "<html><body>no markers</body>"] {
            let q = parse_question(PartId::Prima, 5, raw);
            assert!(q.articles.is_empty());
            assert_eq!(q.title, "Question 5");
            assert!(q.prologue.is_empty());
        }
    }

    #[test]
    fn deterministic() {
        let raw = "<!-- pr --><tr><td>Ad primum<td>First<!-- a1 --><tr><td>Utrum<td>Whether";
        let a = parse_question(PartId::Tertia, 2, raw);
        let b = parse_question(PartId::Tertia, 2, raw);
        assert_eq!(a, b);
    }

    #[test]
    fn prologue_span_ends_at_first_thesis() {
        let raw = "<!-- pr --><tr><td>Prooemium latine<td>Prologue english\
                   <!-- a1 --><tr><td>Utrum<td>Whether";
        let q = parse_question(PartId::Prima, 1, raw);
        assert_eq!(q.prologue.latin, "Prooemium latine");
        assert_eq!(q.prologue.english, "Prologue english");
        assert_eq!(q.articles.len(), 1);
    }
}
