use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::parts::PartId;

/// Maps (part, question) to a source file using the corpus naming
/// convention: part code plus zero-padded three-digit question number,
/// e.g. `FP001.html`.
#[derive(Debug, Clone)]
pub struct SourceDir {
    root: PathBuf,
}

impl SourceDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        SourceDir { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file_path(&self, part: PartId, question: u32) -> PathBuf {
        self.root.join(format!("{}{:03}.html", part.code(), question))
    }

    /// Read a question's source document. An absent file is a normal
    /// outcome (`Ok(None)`), distinct from real I/O failures.
    pub fn read(&self, part: PartId, question: u32) -> Result<Option<String>> {
        assert!(question >= 1, "question numbers start at 1");
        let path = self.file_path(part, question);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
        }
    }

    /// Question numbers whose source file exists, bounded by the part's
    /// fixed question count.
    pub fn available_questions(&self, part: PartId) -> Vec<u32> {
        (1..=part.part().questions)
            .filter(|&q| self.file_path(part, q).is_file())
            .collect()
    }
}
