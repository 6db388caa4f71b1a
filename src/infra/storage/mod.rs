use crate::core::Result;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";
pub const TOKENIZER_FILE: &str = "tokenizer.json";
pub const SAFETENSORS_FILE: &str = "model.safetensors";
pub const PYTORCH_FILE: &str = "pytorch_model.bin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeightsFormat {
    SafeTensors,
    PyTorch,
}

/// Resolved locations of everything a pretrained model directory must hold.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub root: PathBuf,
    pub config: PathBuf,
    pub tokenizer: PathBuf,
    pub weights: PathBuf,
    pub weights_format: WeightsFormat,
}

pub struct ModelRepository {
    root: PathBuf,
}

impl ModelRepository {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Checks that the directory holds a config, a tokenizer and one set of
    /// weights. Safetensors wins over a PyTorch pickle when both are present.
    pub fn resolve(&self) -> Result<ModelArtifacts> {
        if !self.root.is_dir() {
            anyhow::bail!("Model directory not found: {}", self.root.display());
        }

        let config = self.require(CONFIG_FILE)?;
        let tokenizer = self.require(TOKENIZER_FILE)?;

        let safetensors = self.root.join(SAFETENSORS_FILE);
        let pytorch = self.root.join(PYTORCH_FILE);
        let (weights, weights_format) = if safetensors.is_file() {
            (safetensors, WeightsFormat::SafeTensors)
        } else if pytorch.is_file() {
            (pytorch, WeightsFormat::PyTorch)
        } else {
            anyhow::bail!(
                "No model weights in {} (expected {} or {})",
                self.root.display(),
                SAFETENSORS_FILE,
                PYTORCH_FILE
            );
        };

        Ok(ModelArtifacts {
            root: self.root.clone(),
            config,
            tokenizer,
            weights,
            weights_format,
        })
    }

    fn require(&self, name: &str) -> Result<PathBuf> {
        let path = self.root.join(name);
        if path.is_file() {
            Ok(path)
        } else {
            anyhow::bail!("Missing {} in model directory {}", name, self.root.display())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"{}").unwrap();
    }

    #[test]
    fn test_missing_directory() {
        let err = ModelRepository::new("/nonexistent/model/dir").resolve().unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_missing_tokenizer() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), CONFIG_FILE);
        touch(dir.path(), SAFETENSORS_FILE);

        let err = ModelRepository::new(dir.path()).resolve().unwrap_err();
        assert!(err.to_string().contains(TOKENIZER_FILE));
    }

    #[test]
    fn test_missing_weights() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), CONFIG_FILE);
        touch(dir.path(), TOKENIZER_FILE);

        let err = ModelRepository::new(dir.path()).resolve().unwrap_err();
        assert!(err.to_string().contains("No model weights"));
    }

    #[test]
    fn test_prefers_safetensors() {
        let dir = tempfile::tempdir().unwrap();
        for name in [CONFIG_FILE, TOKENIZER_FILE, SAFETENSORS_FILE, PYTORCH_FILE] {
            touch(dir.path(), name);
        }

        let artifacts = ModelRepository::new(dir.path()).resolve().unwrap();
        assert_eq!(artifacts.weights_format, WeightsFormat::SafeTensors);
        assert_eq!(artifacts.weights, dir.path().join(SAFETENSORS_FILE));
    }

    #[test]
    fn test_falls_back_to_pytorch() {
        let dir = tempfile::tempdir().unwrap();
        for name in [CONFIG_FILE, TOKENIZER_FILE, PYTORCH_FILE] {
            touch(dir.path(), name);
        }

        let artifacts = ModelRepository::new(dir.path()).resolve().unwrap();
        assert_eq!(artifacts.weights_format, WeightsFormat::PyTorch);
    }
}
