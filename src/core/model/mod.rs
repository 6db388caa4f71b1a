pub mod traits;

pub use traits::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(pub u32);

impl TokenId {
    pub const PAD: Self = Self(0);
    pub const EOS: Self = Self(1);
}

pub fn token_ids(tokens: &[TokenId]) -> Vec<u32> {
    tokens.iter().map(|t| t.0).collect()
}
