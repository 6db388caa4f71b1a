pub mod device;
pub mod hf_tokenizer;
pub mod storage;
pub mod t5;

pub use device::{device_name, select_device};
pub use hf_tokenizer::HfTokenizer;
pub use storage::{ModelArtifacts, ModelRepository, WeightsFormat};
pub use t5::T5Model;

use crate::core::{Result, Seq2SeqModel, Tokenizer};
use std::path::Path;

pub type LoadedModel = (Box<dyn Tokenizer>, Box<dyn Seq2SeqModel>);

/// Loads a pretrained paraphrasing model and its tokenizer.
pub trait ModelLoader {
    fn load(&self, directory: &Path) -> Result<LoadedModel>;
}

/// Reads a T5 checkpoint from a local HuggingFace-layout directory.
#[derive(Debug, Clone, Default)]
pub struct T5Loader {
    force_cpu: bool,
}

impl T5Loader {
    pub fn new(force_cpu: bool) -> Self {
        Self { force_cpu }
    }
}

impl ModelLoader for T5Loader {
    fn load(&self, directory: &Path) -> Result<LoadedModel> {
        let artifacts = ModelRepository::new(directory).resolve()?;
        let device = select_device(self.force_cpu)?;
        tracing::info!("Device: {}", device_name(&device));
        tracing::info!(
            "Loading {} weights from {}",
            match artifacts.weights_format {
                WeightsFormat::SafeTensors => "safetensors",
                WeightsFormat::PyTorch => "pytorch",
            },
            artifacts.root.display()
        );

        let tokenizer = HfTokenizer::from_file(&artifacts.tokenizer)?;
        let model = T5Model::load(&artifacts, &device)?;

        Ok((Box::new(tokenizer), Box::new(model)))
    }
}
