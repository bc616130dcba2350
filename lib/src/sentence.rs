use std::{
    fmt::{Display, Formatter},
    ops::Deref,
};

/// A single non-blank line of input, surrounding whitespace removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence(String);

impl Sentence {
    /// Returns `None` for lines that are empty after trimming.
    #[inline]
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for Sentence {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Sentence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Sentence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::sentence::Sentence;

    #[test]
    fn test_sentence_trims() {
        let sentence = Sentence::parse("  The cat sat.\r").unwrap();
        assert_eq!(&*sentence, "The cat sat.");
    }

    #[test]
    fn test_sentence_blank() {
        assert_eq!(Sentence::parse(""), None);
        assert_eq!(Sentence::parse(" \t \u{3000}"), None);
    }
}
