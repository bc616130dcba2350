use std::{fs, path::Path};

use hashbrown::HashSet;
use log::info;

use crate::{
    error::{ResourceError, Result},
    normalizer::TextNormalizer,
    token::Tokens,
};

const ENGLISH: &str = include_str!("../../assets/stopwords/en.txt");

/// Fixed stopword set. Membership is exact and case-sensitive; callers are
/// expected to lowercase before filtering.
#[derive(Clone, Debug, Default)]
pub struct Stopwords(HashSet<String>);

impl Stopwords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(words.into_iter().map(Into::into).collect())
    }

    /// The bundled English list.
    pub fn english() -> Self {
        Self::parse(ENGLISH)
    }

    /// One word per line. Blank lines and lines starting with `#` are skipped.
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|error| ResourceError::Stopwords {
            path: path.to_path_buf(),
            kind: error.kind(),
        })?;

        let stopwords = Self::parse(&text);
        info!("Loaded {} stopwords from {path:?}", stopwords.len());

        Ok(stopwords)
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TextNormalizer for Stopwords {
    fn normalize(&self, tokens: &mut Tokens) {
        tokens.retain(|token| !self.contains(token.as_str()))
    }
}
