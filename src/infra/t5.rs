//! T5 encoder-decoder backed by `candle-transformers`.

use super::storage::{ModelArtifacts, WeightsFormat};
use crate::core::model::token_ids;
use crate::core::{ModelConfig, Result, Seq2SeqModel, TokenId};
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::t5;

pub struct T5Model {
    config: ModelConfig,
    device: Device,
    model: t5::T5ForConditionalGeneration,
}

impl T5Model {
    pub fn load(artifacts: &ModelArtifacts, device: &Device) -> Result<Self> {
        let t5_config: t5::Config = serde_json::from_str(&std::fs::read_to_string(&artifacts.config)?)?;

        let vb = match artifacts.weights_format {
            WeightsFormat::SafeTensors => unsafe {
                VarBuilder::from_mmaped_safetensors(&[&artifacts.weights], DType::F32, device)?
            },
            WeightsFormat::PyTorch => VarBuilder::from_pth(&artifacts.weights, DType::F32, device)?,
        };

        let model = t5::T5ForConditionalGeneration::load(vb, &t5_config)?;

        let pad = TokenId(t5_config.pad_token_id as u32);
        let config = ModelConfig::builder()
            .decoder_start_token(
                t5_config
                    .decoder_start_token_id
                    .map(|id| TokenId(id as u32))
                    .unwrap_or(pad),
            )
            .eos_token(TokenId(t5_config.eos_token_id as u32))
            .use_cache(t5_config.use_cache)
            .build();

        Ok(Self {
            config,
            device: device.clone(),
            model,
        })
    }

    fn input_tensor(&self, tokens: &[TokenId]) -> Result<Tensor> {
        Ok(Tensor::new(token_ids(tokens).as_slice(), &self.device)?.unsqueeze(0)?)
    }
}

impl Seq2SeqModel for T5Model {
    fn encode(&mut self, input: &[TokenId]) -> Result<Tensor> {
        let input = self.input_tensor(input)?;
        Ok(self.model.encode(&input)?)
    }

    fn decode(&mut self, decoder_input: &[TokenId], encoder_output: &Tensor) -> Result<Tensor> {
        let decoder_input = self.input_tensor(decoder_input)?;
        let logits = self.model.decode(&decoder_input, encoder_output)?;
        Ok(logits.squeeze(0)?.to_dtype(DType::F32)?)
    }

    fn clear_cache(&mut self) {
        self.model.clear_kv_cache();
    }

    fn config(&self) -> &ModelConfig {
        &self.config
    }
}
