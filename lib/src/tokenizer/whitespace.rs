use crate::{
    token::{Token, Tokens},
    tokenizer::TextTokenizer,
};

/// Splits on Unicode whitespace only; contractions stay fused.
#[derive(Clone, Debug, Default)]
pub struct Whitespace;

impl Whitespace {
    pub fn new() -> Self {
        Self
    }
}

impl TextTokenizer for Whitespace {
    fn tokenize<T: AsRef<str>>(&self, text: T) -> Tokens {
        text.as_ref().split_whitespace().map(Token::from).collect()
    }
}
