use super::TokenId;
use crate::core::Result;
use candle_core::Tensor;

/// An encoder-decoder language model driven one decoder step at a time.
pub trait Seq2SeqModel: Send {
    /// Runs the encoder over a single prompt and returns its hidden states.
    fn encode(&mut self, input: &[TokenId]) -> Result<Tensor>;

    /// Returns next-token logits (shape `[vocab_size]`) for the last position
    /// of `decoder_input`. Implementations with a KV cache only need the
    /// tokens not yet seen since the last `clear_cache`.
    fn decode(&mut self, decoder_input: &[TokenId], encoder_output: &Tensor) -> Result<Tensor>;

    fn clear_cache(&mut self);

    fn config(&self) -> &ModelConfig;
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub decoder_start_token: TokenId,
    pub eos_token: TokenId,
    pub use_cache: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            decoder_start_token: TokenId::PAD,
            eos_token: TokenId::EOS,
            use_cache: true,
        }
    }
}

pub struct ModelConfigBuilder {
    config: ModelConfig,
}

impl ModelConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ModelConfig::default(),
        }
    }

    pub fn decoder_start_token(mut self, token: TokenId) -> Self {
        self.config.decoder_start_token = token;
        self
    }

    pub fn eos_token(mut self, token: TokenId) -> Self {
        self.config.eos_token = token;
        self
    }

    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.config.use_cache = use_cache;
        self
    }

    pub fn build(self) -> ModelConfig {
        self.config
    }
}

impl Default for ModelConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelConfig {
    pub fn builder() -> ModelConfigBuilder {
        ModelConfigBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ModelConfig::builder()
            .decoder_start_token(TokenId(5))
            .eos_token(TokenId(1))
            .use_cache(false)
            .build();

        assert_eq!(config.decoder_start_token, TokenId(5));
        assert_eq!(config.eos_token, TokenId(1));
        assert!(!config.use_cache);
    }

    #[test]
    fn test_default_matches_t5_special_tokens() {
        let config = ModelConfig::default();
        assert_eq!(config.decoder_start_token, TokenId::PAD);
        assert_eq!(config.eos_token, TokenId::EOS);
        assert!(config.use_cache);
    }
}
