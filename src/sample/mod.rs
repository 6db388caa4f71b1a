use crate::core::{Result, TokenId};
use candle_core::Tensor;
use candle_transformers::generation::{LogitsProcessor, Sampling};

pub const DEFAULT_NUM_RETURN_SEQUENCES: usize = 3;
pub const DEFAULT_MAX_LENGTH: usize = 128;
pub const DEFAULT_TOP_K: usize = 50;
pub const DEFAULT_TOP_P: f64 = 0.95;
pub const DEFAULT_TEMPERATURE: f64 = 1.1;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub num_return_sequences: usize,
    /// Caps both the tokenized prompt and each decoded sequence, the latter
    /// counting the decoder start token.
    pub max_length: usize,
    pub top_k: usize,
    pub top_p: f64,
    pub temperature: f64,
    pub seed: Option<u64>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            num_return_sequences: DEFAULT_NUM_RETURN_SEQUENCES,
            max_length: DEFAULT_MAX_LENGTH,
            top_k: DEFAULT_TOP_K,
            top_p: DEFAULT_TOP_P,
            temperature: DEFAULT_TEMPERATURE,
            seed: None,
        }
    }
}

impl GenerationOptions {
    pub fn num_return_sequences(mut self, n: usize) -> Self {
        self.num_return_sequences = n;
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = len;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    fn sampling(&self) -> Sampling {
        Sampling::TopKThenTopP {
            k: self.top_k,
            p: self.top_p,
            temperature: self.temperature,
        }
    }
}

/// Top-k then nucleus sampling over a 1-D logits tensor.
pub struct Sampler {
    processor: LogitsProcessor,
    seed: u64,
}

impl Sampler {
    pub fn new(options: &GenerationOptions) -> Self {
        let seed = options.seed.unwrap_or_else(rand::random);
        Self {
            processor: LogitsProcessor::from_sampling(seed, options.sampling()),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn sample(&mut self, logits: &Tensor) -> Result<TokenId> {
        Ok(TokenId(self.processor.sample(logits)?))
    }
}
