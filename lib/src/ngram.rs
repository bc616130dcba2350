use std::{
    fmt::{Display, Formatter},
    num::NonZeroUsize,
    ops::Deref,
};

use serde::Serialize;

// SAFETY: 2 is non-zero.
pub const BIGRAM: NonZeroUsize = unsafe { NonZeroUsize::new_unchecked(2) };

/// A window of consecutive lemmas.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Ngram(Box<[String]>);

impl Ngram {
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Deref for Ngram {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: AsRef<str>> From<&[S]> for Ngram {
    fn from(window: &[S]) -> Self {
        Self(window.iter().map(|item| item.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Ngram {
    fn from(window: [S; N]) -> Self {
        Self::from(&window[..])
    }
}

/// Tuple-style rendering, `("cat", "run")`.
impl Display for Ngram {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("(")?;

        for (position, item) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item:?}")?;
        }

        f.write_str(")")
    }
}

/// Stride-1 windows of size `n` in left-to-right order. Empty when fewer
/// than `n` items are given.
pub fn ngrams<S: AsRef<str>>(items: &[S], n: NonZeroUsize) -> Vec<Ngram> {
    items.windows(n.get()).map(Ngram::from).collect()
}
