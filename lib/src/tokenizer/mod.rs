mod treebank;
mod whitespace;

pub use {treebank::Treebank, whitespace::Whitespace};

use crate::token::Tokens;

#[derive(Clone, Debug)]
pub enum Tokenizer {
    Treebank(Treebank),
    Whitespace(Whitespace),
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::Treebank(Treebank::new())
    }
}

impl Tokenizer {
    pub fn tokenize(&self, text: &str) -> Tokens {
        match self {
            Tokenizer::Treebank(tokenizer) => tokenizer.tokenize(text),
            Tokenizer::Whitespace(tokenizer) => tokenizer.tokenize(text),
        }
    }
}

pub trait TextTokenizer {
    fn tokenize<T: AsRef<str>>(&self, text: T) -> Tokens;
}
