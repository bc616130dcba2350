pub mod config;
pub mod driver;
pub mod error;
pub mod lexicon;
pub mod ngram;
pub mod normalizer;
pub mod pipeline;
pub mod read;
pub mod resource;
pub mod sentence;
pub mod token;
pub mod tokenizer;
pub mod util;

pub use {
    config::Config,
    driver::{Driver, Summary},
    error::{Error, Result},
    lexicon::Lexicon,
    ngram::Ngram,
    normalizer::{lemmatize::Pos, Lemmatizer, Noise, Stopwords},
    pipeline::{Pipeline, Record},
    resource::Resources,
    sentence::Sentence,
    token::{Token, Tokens},
};
