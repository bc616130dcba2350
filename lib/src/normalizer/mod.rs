pub mod lemmatize;
pub mod noise;
pub mod stopwords;

pub use {lemmatize::Lemmatizer, noise::Noise, stopwords::Stopwords};

use crate::token::Tokens;

/// A token-level stage. Implementations must keep the relative order of
/// the tokens they leave in place.
pub trait TextNormalizer: std::fmt::Debug + Send + Sync {
    fn normalize(&self, tokens: &mut Tokens);
}
