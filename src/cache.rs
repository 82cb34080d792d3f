use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use anyhow::Result;
use tracing::debug;

use crate::model::Question;
use crate::parser;
use crate::parts::PartId;
use crate::source::SourceDir;

/// Build-scoped memoization of parsed questions, keyed by (part, question).
///
/// Constructed once per build and passed around explicitly; tests get fresh
/// instances. Parsing is deterministic, so when two threads race on the
/// same key the first insert wins and both hand out the same record.
pub struct QuestionCache {
    source: SourceDir,
    store: RwLock<HashMap<(PartId, u32), Arc<Question>>>,
}

impl QuestionCache {
    pub fn new(source: SourceDir) -> Self {
        QuestionCache {
            source,
            store: RwLock::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> &SourceDir {
        &self.source
    }

    /// Cached question, or parse-and-store. `Ok(None)` means the source
    /// file does not exist — a terminal outcome for that key, distinct
    /// from a parsed question that happens to be empty.
    pub fn load(&self, part: PartId, question: u32) -> Result<Option<Arc<Question>>> {
        assert!(question >= 1, "question numbers start at 1");

        if let Some(hit) = self
            .store
            .read()
            .expect("cache lock poisoned")
            .get(&(part, question))
        {
            return Ok(Some(Arc::clone(hit)));
        }

        let Some(raw) = self.source.read(part, question)? else {
            return Ok(None);
        };
        debug!(part = part.code(), question, "cache miss, parsing");
        let parsed = Arc::new(parser::parse_question(part, question, &raw));

        let mut store = self.store.write().expect("cache lock poisoned");
        Ok(Some(Arc::clone(
            store.entry((part, question)).or_insert(parsed),
        )))
    }
}
