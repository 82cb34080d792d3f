use std::sync::LazyLock;

use regex::Regex;

/// The closed vocabulary of structural annotations. These comments are the
/// only reliable signal in the corpus: they carry a role and, for article
/// roles, the article (and objection) ordinal, but have no closing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Prologue,
    Thesis { article: u32 },
    Objection { article: u32, number: u32 },
    SedContra { article: u32 },
    Respondeo { article: u32 },
    Reply { article: u32, number: u32 },
}

impl Role {
    pub fn article(self) -> Option<u32> {
        match self {
            Role::Prologue => None,
            Role::Thesis { article }
            | Role::Objection { article, .. }
            | Role::SedContra { article }
            | Role::Respondeo { article }
            | Role::Reply { article, .. } => Some(article),
        }
    }

    /// Prologue- and thesis-grade markers bound each other's spans; the
    /// minor roles end at the next marker of any kind.
    pub fn is_major(self) -> bool {
        matches!(self, Role::Prologue | Role::Thesis { .. })
    }
}

/// One marker occurrence. `start` is the byte offset of `<!--`, `end` the
/// byte just past `-->`; the owned span begins at `end`.
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    pub role: Role,
    pub start: usize,
    pub end: usize,
}

// Annotators disagreed on casing, dots and spacing ("<!-- A3 Obj. 2 -->",
// "<!--a3obj2-->", "<!-- a 3 arg 2 -->"); the pattern absorbs all of it.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)<!--\s*(?:(?P<pr>prooem(?:ium)?|pr)\.?|a\.?\s*(?P<art>\d+)\s*(?:(?:obj|arg)\.?\s*(?P<obj>\d+)|(?P<sc>sed\s*contra|s\.?\s*c)\.?|(?P<co>co(?:rp(?:us)?)?|resp(?:ondeo)?)\.?|ad\.?\s*(?P<ad>\d+))?)\s*-->",
    )
    .unwrap()
});

/// Find every marker in document order. Comments that are not part of the
/// vocabulary are ignored, as is any surrounding malformed markup.
pub fn scan(doc: &str) -> Vec<Marker> {
    MARKER_RE
        .captures_iter(doc)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let role = classify(&caps)?;
            Some(Marker {
                role,
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect()
}

fn classify(caps: &regex::Captures<'_>) -> Option<Role> {
    if caps.name("pr").is_some() {
        return Some(Role::Prologue);
    }
    let article: u32 = caps.name("art")?.as_str().parse().ok()?;
    if let Some(n) = caps.name("obj") {
        return Some(Role::Objection {
            article,
            number: n.as_str().parse().ok()?,
        });
    }
    if caps.name("sc").is_some() {
        return Some(Role::SedContra { article });
    }
    if caps.name("co").is_some() {
        return Some(Role::Respondeo { article });
    }
    if let Some(n) = caps.name("ad") {
        return Some(Role::Reply {
            article,
            number: n.as_str().parse().ok()?,
        });
    }
    Some(Role::Thesis { article })
}
