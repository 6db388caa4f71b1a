use crate::error::{ParaphraseError, ParaphraseResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Outcome of one run, persisted as `result.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub input_text: String,
    pub status: Status,
    pub paraphrases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultEnvelope {
    /// Starts pessimistic: a run that never reaches `succeed` reports an error.
    pub fn new(input_text: impl Into<String>) -> Self {
        Self {
            input_text: input_text.into(),
            status: Status::Error,
            paraphrases: Vec::new(),
            error: None,
        }
    }

    pub fn succeed(&mut self, paraphrases: Vec<String>) {
        self.status = Status::Success;
        self.paraphrases = paraphrases;
        self.error = None;
    }

    pub fn fail(&mut self, error: impl ToString) {
        self.status = Status::Error;
        self.paraphrases.clear();
        self.error = Some(error.to_string());
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn to_json(&self) -> ParaphraseResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Writes the envelope as 2-space indented JSON, creating the parent
/// directory and replacing any previous file.
pub fn write_envelope(envelope: &ResultEnvelope, path: &Path) -> ParaphraseResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ParaphraseError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = envelope.to_json()?;
    std::fs::write(path, json).map_err(|source| ParaphraseError::Write {
        path: path.to_path_buf(),
        source,
    })
}
