pub mod traits;

pub use traits::{truncate_keeping_last, DecodeOptions, EncodeOptions, Tokenizer};
