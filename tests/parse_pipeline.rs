use std::fs;

use summa_extract::cache::QuestionCache;
use summa_extract::parser::parse_question;
use summa_extract::parts::PartId;
use summa_extract::source::SourceDir;

// A document in the corpus's dominant convention: treatise heading, topic
// line, prologue, one fully-annotated article, trailing boundary.
const FP_Q1: &str = r##"<html><body>
<h2 align="center">TREATISE ON SACRED DOCTRINE<br><br>THE NATURE AND EXTENT OF SACRED DOCTRINE</h2>
<p><b>OF SACRED DOCTRINE (IN TEN ARTICLES)</b></p>
<!-- pr -->
<table><tr><td>Ad nostrae doctrinae terminos ponendos</td><td>To place limits on our doctrine</td></tr></table>
<!-- a1 -->
<table><tr><td>Utrum sit necessarium aliam doctrinam haberi</td><td>Whether another doctrine is necessary</td></tr></table>
<h3>Article 1. Whether another doctrine is necessary?</h3>
<!-- a1 obj. 1 -->
<tr><td>Videtur quod non sit necessarium</td><td>Objection 1. It seems that it is not necessary
<!-- a1 sc -->
<tr><td>Sed contra est quod dicitur</td><td>On the contrary, it is written
<!-- a1 co -->
<tr><td>Respondeo dicendum quod necessarium fuit</td><td>I answer that it was necessary
<!-- a1 ad 1 -->
<tr><td>Ad primum ergo dicendum</td><td>Reply to Objection 1. Although
<hr><a href="#top">Return to top</a>
<p>Transcribed 1996.</p>
</body></html>"##;

#[test]
fn full_question_structure() {
    let q = parse_question(PartId::Prima, 1, FP_Q1);

    assert_eq!(q.title, "THE NATURE AND EXTENT OF SACRED DOCTRINE");
    assert_eq!(q.prologue.latin, "Ad nostrae doctrinae terminos ponendos");
    assert_eq!(q.prologue.english, "To place limits on our doctrine");

    assert_eq!(q.articles.len(), 1);
    let a = &q.articles[0];
    assert_eq!(a.number, 1);
    assert_eq!(a.title, "Article 1. Whether another doctrine is necessary?");
    assert_eq!(a.thesis.latin, "Utrum sit necessarium aliam doctrinam haberi");
    assert_eq!(a.thesis.english, "Whether another doctrine is necessary");
    assert_eq!(a.objections.len(), 1);
    assert_eq!(a.objections[0].number, 1);
    assert_eq!(a.sed_contra.english, "On the contrary, it is written");
    assert_eq!(a.respondeo.latin, "Respondeo dicendum quod necessarium fuit");
    assert_eq!(a.replies.len(), 1);
    // Trailing boundary keeps the transcription footer out of the last span
    assert!(!a.replies[0].text.english.contains("Transcribed"));
}

#[test]
fn determinism_field_for_field() {
    let a = parse_question(PartId::Prima, 1, FP_Q1);
    let b = parse_question(PartId::Prima, 1, FP_Q1);
    assert_eq!(a, b);
}

#[test]
fn totality_over_garbage() {
    for raw in ["", "\u{0}\u{1}binary\u{fffd}", "<table><td><td><td>", "<!-- -->"] {
        let q = parse_question(PartId::Supplementum, 9, raw);
        assert!(q.articles.is_empty());
        assert_eq!(q.title, "Question 9");
    }
}

#[test]
fn article_ordering_strictly_ascending() {
    let doc = "<!-- a4 --><tr><td>d<td>4<!-- a2 --><tr><td>b<td>2\
               <!-- a9 --><tr><td>i<td>9<!-- a1 --><tr><td>a<td>1";
    let q = parse_question(PartId::Prima, 3, doc);
    for pair in q.articles.windows(2) {
        assert!(pair[0].number < pair[1].number);
    }
    assert_eq!(q.articles.len(), 4);
}

#[test]
fn bilingual_fallback_monotonicity() {
    // Tier 1: both sides populated
    let tabular = parse_question(
        PartId::Prima,
        1,
        "<!-- a1 --><table><tr><td>Utrum</td><td>Whether</td></tr></table>",
    );
    let thesis = &tabular.articles[0].thesis;
    assert!(!thesis.latin.is_empty() && !thesis.english.is_empty());

    // Tier 3: latin exactly empty
    let prose = parse_question(PartId::Prima, 1, "<!-- a1 --><p>Whether, in plain prose.</p>");
    let thesis = &prose.articles[0].thesis;
    assert_eq!(thesis.latin, "");
    assert_eq!(thesis.english, "Whether, in plain prose.");
}

#[test]
fn recovery_completeness() {
    let doc = "<!-- a3 obj 1 --><tr><td>Videtur quod<td>It seems that\
               <!-- a3 co --><tr><td>Respondeo dicendum<td>I answer that";
    let q = parse_question(PartId::Prima, 2, doc);
    assert_eq!(q.articles.len(), 1);
    let a = &q.articles[0];
    assert_eq!(a.number, 3);
    assert!(a.thesis.is_empty());
    assert!(!a.respondeo.english.is_empty());
}

#[test]
fn minimal_thesis_extraction() {
    let q = parse_question(
        PartId::Prima,
        1,
        "<!-- a1 --><td>Utrum...</td><td>Whether...</td>",
    );
    assert_eq!(q.articles[0].thesis.latin, "Utrum...");
    assert_eq!(q.articles[0].thesis.english, "Whether...");
}

#[test]
fn duplicate_objection_markers_preserved() {
    let doc = "<!-- a2 --><tr><td>Utrum<td>Whether\
               <!-- a2 obj 1 --><tr><td>primo<td>first\
               <!-- a2 obj 1 --><tr><td>iterum<td>again";
    let q = parse_question(PartId::Prima, 1, doc);
    let objs = &q.articles[0].objections;
    assert_eq!(objs.len(), 2);
    assert_eq!(objs[0].number, 1);
    assert_eq!(objs[1].number, 1);
    assert_ne!(objs[0].text, objs[1].text);
}

#[test]
fn out_of_range_question_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("FP001.html"), FP_Q1).unwrap();
    let cache = QuestionCache::new(SourceDir::new(dir.path()));

    // FP tops out at 119; 999 has no file and must be an explicit miss,
    // not a default-empty Question.
    assert!(cache.load(PartId::Prima, 999).unwrap().is_none());
    assert!(cache.load(PartId::Prima, 1).unwrap().is_some());
}

#[test]
fn mixed_casing_and_unclosed_markup() {
    let doc = "<!-- A1 --><TR><TD>Utrum Deus sit<TD>Whether God exists\
               <!-- a1 Obj. 1 --><tr><td>Videtur quod Deus non sit<td>It seems that God does not exist";
    let q = parse_question(PartId::Prima, 2, doc);
    assert_eq!(q.articles[0].thesis.english, "Whether God exists");
    assert_eq!(q.articles[0].objections[0].text.latin, "Videtur quod Deus non sit");
}
