use crate::app::envelope::{write_envelope, ResultEnvelope};
use crate::core::{DecodeOptions, EncodeOptions, Result, Seq2SeqModel, TokenId, Tokenizer};
use crate::envconfig::RunConfig;
use crate::error::{ParaphraseError, ParaphraseResult};
use crate::infra::ModelLoader;
use crate::sample::{GenerationOptions, Sampler};
use candle_core::Tensor;

pub const PROMPT_PREFIX: &str = "paraphrase: ";

pub fn build_prompt(text: &str) -> String {
    format!("{}{}", PROMPT_PREFIX, text)
}

/// Samples paraphrases from a loaded encoder-decoder model.
pub struct Paraphraser {
    model: Box<dyn Seq2SeqModel>,
    tokenizer: Box<dyn Tokenizer>,
    options: GenerationOptions,
}

impl Paraphraser {
    pub fn new(model: Box<dyn Seq2SeqModel>, tokenizer: Box<dyn Tokenizer>) -> Self {
        Self {
            model,
            tokenizer,
            options: GenerationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn generate_paraphrases(&mut self, text: &str) -> Result<Vec<String>> {
        self.generate(text).inspect_err(|e| {
            tracing::error!("Error generating paraphrases: {:#}", e);
        })
    }

    fn generate(&mut self, text: &str) -> Result<Vec<String>> {
        let prompt = build_prompt(text);
        let encode = EncodeOptions::new()
            .with_special_tokens()
            .truncate(self.options.max_length);
        let input = self.tokenizer.encode_with_options(&prompt, &encode)?;
        if input.is_empty() {
            anyhow::bail!("Prompt produced no tokens");
        }
        tracing::debug!("Prompt encoded to {} tokens", input.len());

        self.model.clear_cache();
        let encoder_output = self.model.encode(&input)?;

        let mut sampler = Sampler::new(&self.options);
        tracing::debug!("Sampling with seed {}", sampler.seed());

        let decode = DecodeOptions::new().skip_special();
        let mut paraphrases = Vec::with_capacity(self.options.num_return_sequences);
        for _ in 0..self.options.num_return_sequences {
            let tokens = self.sample_sequence(&encoder_output, &mut sampler)?;
            paraphrases.push(self.tokenizer.decode_with_options(&tokens, &decode)?);
        }

        Ok(paraphrases)
    }

    fn sample_sequence(&mut self, encoder_output: &Tensor, sampler: &mut Sampler) -> Result<Vec<TokenId>> {
        let config = self.model.config().clone();
        self.model.clear_cache();

        let mut tokens = vec![config.decoder_start_token];
        while tokens.len() < self.options.max_length {
            let step = if config.use_cache && tokens.len() > 1 {
                &tokens[tokens.len() - 1..]
            } else {
                &tokens[..]
            };

            let logits = self.model.decode(step, encoder_output)?;
            let next = sampler.sample(&logits)?;
            if next == config.eos_token {
                break;
            }
            tokens.push(next);
        }

        Ok(tokens)
    }
}

/// Drives one configure, load, generate, write pass.
pub struct InferenceRunner<L: ModelLoader> {
    loader: L,
    config: RunConfig,
}

impl<L: ModelLoader> InferenceRunner<L> {
    pub fn new(loader: L, config: RunConfig) -> Self {
        Self { loader, config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn load_model(&self) -> ParaphraseResult<Paraphraser> {
        let directory = &self.config.request.model_directory;
        let (tokenizer, model) = self
            .loader
            .load(directory)
            .map_err(|reason| ParaphraseError::ModelLoad {
                directory: directory.clone(),
                reason,
            })?;

        Ok(Paraphraser::new(model, tokenizer).with_options(self.config.generation.clone()))
    }

    pub fn paraphrase(&self) -> ParaphraseResult<Vec<String>> {
        let mut paraphraser = self.load_model()?;
        paraphraser
            .generate_paraphrases(&self.config.request.input_text)
            .map_err(ParaphraseError::Generation)
    }

    /// Never fails: errors end up in the returned envelope and on stderr.
    /// A failed write is only logged, so the file on disk may be stale.
    pub fn run(&self) -> ResultEnvelope {
        let mut envelope = ResultEnvelope::new(self.config.request.input_text.clone());

        match self.paraphrase() {
            Ok(paraphrases) => {
                tracing::info!("Generated paraphrases:");
                for (i, paraphrase) in paraphrases.iter().enumerate() {
                    tracing::info!("{}. {}", i + 1, paraphrase);
                }
                envelope.succeed(paraphrases);
            }
            Err(e) => {
                let report = e.report();
                tracing::error!("Error during processing: {}", report);
                envelope.fail(report);
            }
        }

        let path = &self.config.output_path;
        match write_envelope(&envelope, path) {
            Ok(()) => match std::fs::metadata(path) {
                Ok(meta) => tracing::info!("Wrote result to {} ({} bytes)", path.display(), meta.len()),
                Err(e) => tracing::warn!("Wrote result to {} but cannot stat it: {}", path.display(), e),
            },
            Err(e) => tracing::error!("Error writing output file: {}", e.report()),
        }

        envelope
    }
}
