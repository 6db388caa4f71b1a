use crate::core::{Result, TokenId};

pub trait Tokenizer: Send + Sync {
    fn encode_with_options(&self, text: &str, options: &EncodeOptions) -> Result<Vec<TokenId>>;

    fn decode_with_options(&self, tokens: &[TokenId], options: &DecodeOptions) -> Result<String>;
}

#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub add_special_tokens: bool,
    pub truncate: Option<usize>,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_special_tokens(mut self) -> Self {
        self.add_special_tokens = true;
        self
    }

    pub fn truncate(mut self, max_len: usize) -> Self {
        self.truncate = Some(max_len);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    pub skip_special_tokens: bool,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip_special(mut self) -> Self {
        self.skip_special_tokens = true;
        self
    }
}

/// Cuts `tokens` down to `max_len`, keeping the final token in place when
/// it is a trailing special token such as `</s>`.
pub fn truncate_keeping_last(tokens: &mut Vec<TokenId>, max_len: usize, last: Option<TokenId>) {
    if tokens.len() <= max_len {
        return;
    }
    match last {
        Some(tail) if max_len > 0 && tokens.last() == Some(&tail) => {
            tokens.truncate(max_len - 1);
            tokens.push(tail);
        }
        _ => tokens.truncate(max_len),
    }
}
