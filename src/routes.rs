use anyhow::Result;

use crate::cache::QuestionCache;
use crate::parts::{PartId, PARTS};

/// Canonical URL for a question page. Pure function of its arguments.
pub fn question_path(part: PartId, question: u32) -> String {
    format!("/summa/{}/q{}", part.code().to_lowercase(), question)
}

/// Canonical URL for one article within a question.
pub fn article_path(part: PartId, question: u32, article: u32) -> String {
    format!(
        "/summa/{}/q{}/a{}",
        part.code().to_lowercase(),
        question,
        article
    )
}

/// (question, article) pairs that parsed for one question, for static route
/// enumeration. Absent source yields no pairs.
pub fn article_pairs(cache: &QuestionCache, part: PartId, question: u32) -> Result<Vec<(u32, u32)>> {
    let Some(parsed) = cache.load(part, question)? else {
        return Ok(Vec::new());
    };
    Ok(parsed.articles.iter().map(|a| (question, a.number)).collect())
}

/// Every question and article route for the given parts (all five when
/// `part` is None), in part-table order.
pub fn enumerate(cache: &QuestionCache, part: Option<PartId>) -> Result<Vec<String>> {
    let mut routes = Vec::new();
    for p in PARTS.iter().filter(|p| part.is_none() || part == Some(p.id)) {
        for question in cache.source().available_questions(p.id) {
            routes.push(question_path(p.id, question));
            for (q, a) in article_pairs(cache, p.id, question)? {
                routes.push(article_path(p.id, q, a));
            }
        }
    }
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceDir;
    use std::fs;

    #[test]
    fn path_shapes() {
        assert_eq!(question_path(PartId::Prima, 1), "/summa/fp/q1");
        assert_eq!(article_path(PartId::Supplementum, 99, 3), "/summa/xp/q99/a3");
    }

    #[test]
    fn enumerate_covers_questions_and_articles() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("TP001.html"),
            "<!-- a1 --><tr><td>Utrum<td>Whether<!-- a2 --><tr><td>Utrum alterum<td>Whether too",
        )
        .unwrap();
        fs::write(dir.path().join("TP002.html"), "no markers").unwrap();
        let cache = QuestionCache::new(SourceDir::new(dir.path()));

        let routes = enumerate(&cache, Some(PartId::Tertia)).unwrap();
        assert_eq!(
            routes,
            vec![
                "/summa/tp/q1",
                "/summa/tp/q1/a1",
                "/summa/tp/q1/a2",
                "/summa/tp/q2",
            ]
        );
    }
}
