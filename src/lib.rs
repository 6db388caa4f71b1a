pub mod app;
pub mod core;
pub mod envconfig;
pub mod error;
pub mod infra;
pub mod sample;

pub use crate::core::{
    DecodeOptions, EncodeOptions, ModelConfig, Result, Seq2SeqModel, TokenId, Tokenizer,
};

pub use infra::{HfTokenizer, ModelLoader, ModelRepository, T5Loader, T5Model};

pub use app::{InferenceRunner, Paraphraser, ResultEnvelope, Status};

pub use envconfig::{Request, RunArgs, RunConfig};
pub use error::{ParaphraseError, ParaphraseResult};
pub use sample::{GenerationOptions, Sampler};
