use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ParaphraseError {
    #[error("Failed to load model from {}", directory.display())]
    ModelLoad {
        directory: PathBuf,
        #[source]
        reason: anyhow::Error,
    },
    #[error("Failed to generate paraphrases")]
    Generation(#[source] anyhow::Error),
    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to serialize result")]
    Serialize(#[from] serde_json::Error),
}

impl ParaphraseError {
    /// The message followed by every cause, joined by `": "`.
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            message.push_str(": ");
            message.push_str(&err.to_string());
            cause = err.source();
        }
        message
    }
}

pub type ParaphraseResult<T> = Result<T, ParaphraseError>;
