use crate::core::model::token_ids;
use crate::core::tokenizer::truncate_keeping_last;
use crate::core::{DecodeOptions, EncodeOptions, Result, TokenId, Tokenizer};
use std::path::Path;

pub const EOS_PIECE: &str = "</s>";

/// Adapter over a HuggingFace `tokenizer.json`.
pub struct HfTokenizer {
    inner: tokenizers::Tokenizer,
    eos: Option<TokenId>,
}

impl HfTokenizer {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let inner = tokenizers::Tokenizer::from_file(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;
        Ok(Self::new(inner))
    }

    pub fn new(inner: tokenizers::Tokenizer) -> Self {
        let eos = inner.token_to_id(EOS_PIECE).map(TokenId);
        Self { inner, eos }
    }
}

impl Tokenizer for HfTokenizer {
    fn encode_with_options(&self, text: &str, options: &EncodeOptions) -> Result<Vec<TokenId>> {
        let encoding = self
            .inner
            .encode(text, options.add_special_tokens)
            .map_err(|e| anyhow::anyhow!("Failed to encode: {}", e))?;

        let mut tokens: Vec<TokenId> = encoding.get_ids().iter().copied().map(TokenId).collect();
        if let Some(max_len) = options.truncate {
            let tail = if options.add_special_tokens { self.eos } else { None };
            truncate_keeping_last(&mut tokens, max_len, tail);
        }

        Ok(tokens)
    }

    fn decode_with_options(&self, tokens: &[TokenId], options: &DecodeOptions) -> Result<String> {
        self.inner
            .decode(&token_ids(tokens), options.skip_special_tokens)
            .map_err(|e| anyhow::anyhow!("Failed to decode: {}", e))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    // Word-level vocabulary with a T5-style `$A </s>` post-processor.
    pub(crate) const TOKENIZER_JSON: &str = r#"{
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [
            {"id": 0, "content": "<pad>", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 1, "content": "</s>", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
        ],
        "normalizer": null,
        "pre_tokenizer": {"type": "Whitespace"},
        "post_processor": {
            "type": "TemplateProcessing",
            "single": [
                {"Sequence": {"id": "A", "type_id": 0}},
                {"SpecialToken": {"id": "</s>", "type_id": 0}}
            ],
            "pair": [
                {"Sequence": {"id": "A", "type_id": 0}},
                {"SpecialToken": {"id": "</s>", "type_id": 0}},
                {"Sequence": {"id": "B", "type_id": 0}},
                {"SpecialToken": {"id": "</s>", "type_id": 0}}
            ],
            "special_tokens": {
                "</s>": {"id": "</s>", "ids": [1], "tokens": ["</s>"]}
            }
        },
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": {
                "<pad>": 0, "</s>": 1, "<unk>": 2, "paraphrase": 3, ":": 4,
                "the": 5, "cat": 6, "sat": 7, "on": 8, "mat": 9, ".": 10
            },
            "unk_token": "<unk>"
        }
    }"#;

    fn tokenizer() -> HfTokenizer {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenizer.json");
        std::fs::write(&path, TOKENIZER_JSON).unwrap();
        HfTokenizer::from_file(&path).unwrap()
    }

    #[test]
    fn test_missing_file() {
        assert!(HfTokenizer::from_file("/nonexistent/tokenizer.json").is_err());
    }

    #[test]
    fn test_encode_appends_eos() {
        let tok = tokenizer();
        let ids = tok
            .encode_with_options("paraphrase: the cat sat", &EncodeOptions::new().with_special_tokens())
            .unwrap();
        assert_eq!(ids.first(), Some(&TokenId(3)));
        assert_eq!(ids.last(), Some(&TokenId(1)));
    }

    #[test]
    fn test_truncation_keeps_eos() {
        let tok = tokenizer();
        let options = EncodeOptions::new().with_special_tokens().truncate(3);
        let ids = tok.encode_with_options("the cat sat on the mat .", &options).unwrap();
        assert_eq!(ids, vec![TokenId(5), TokenId(6), TokenId(1)]);
    }

    #[test]
    fn test_decode_skips_special_tokens() {
        let tok = tokenizer();
        let text = tok
            .decode_with_options(
                &[TokenId(0), TokenId(6), TokenId(7), TokenId(1)],
                &DecodeOptions::new().skip_special(),
            )
            .unwrap();
        assert!(text.contains("cat"));
        assert!(!text.contains("</s>"));
        assert!(!text.contains("<pad>"));
    }

    #[test]
    fn test_eos_resolved_from_vocabulary() {
        assert_eq!(tokenizer().eos, Some(TokenId(1)));
    }
}
