pub mod model;
pub mod tokenizer;

pub use model::{ModelConfig, Seq2SeqModel, TokenId};
pub use tokenizer::{DecodeOptions, EncodeOptions, Tokenizer};

pub type Result<T> = anyhow::Result<T>;
