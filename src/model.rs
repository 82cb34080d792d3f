use serde::Serialize;

use crate::parts::PartId;

/// A parallel Latin/English pair. Either side may be empty when extraction
/// found nothing; `latin` is only non-empty when a genuine two-cell
/// structure was recovered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BilingualText {
    pub latin: String,
    pub english: String,
}

impl BilingualText {
    pub fn english_only(english: String) -> Self {
        BilingualText {
            latin: String::new(),
            english,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.latin.is_empty() && self.english.is_empty()
    }
}

/// Numbers are the article-local ordinal as annotated in the source.
/// Duplicate markers in a source file yield duplicate entries; that is a
/// documented source quirk, not something to merge away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Objection {
    pub number: u32,
    pub text: BilingualText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub number: u32,
    pub text: BilingualText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub part: PartId,
    pub question: u32,
    pub number: u32,
    pub title: String,
    pub thesis: BilingualText,
    pub objections: Vec<Objection>,
    pub sed_contra: BilingualText,
    pub respondeo: BilingualText,
    pub replies: Vec<Reply>,
}

/// One parsed question. Articles are sorted ascending by number with unique
/// numbers; the record is never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub part: PartId,
    pub number: u32,
    pub title: String,
    pub prologue: BilingualText,
    pub articles: Vec<Article>,
}
