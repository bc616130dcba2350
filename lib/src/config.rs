use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Result},
    ngram::BIGRAM,
    normalizer::lemmatize::Pos,
};

pub const DEFAULT_INPUT: &str = "data/input_data.txt";

/// Run configuration. Every field has a default, so `{}` is a valid file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Input file, one sentence per line.
    pub input: PathBuf,

    /// N-gram window size.
    pub window: NonZeroUsize,

    /// Part-of-speech hint for the lemmatizer.
    pub pos: Pos,

    /// Replaces the bundled English stopword list.
    pub stopwords: Option<PathBuf>,

    /// WordNet `dict/` directory replacing the bundled verb lexicon.
    pub wordnet: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            window: BIGRAM,
            pos: Pos::Verb,
            stopwords: None,
            wordnet: None,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|error| ConfigError::File {
            path: path.to_path_buf(),
            kind: error.kind(),
        })?;

        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|error| ConfigError::Parse(error.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Write, num::NonZeroUsize, path::PathBuf};

    use crate::{
        config::Config,
        error::{ConfigError, Error},
        normalizer::lemmatize::Pos,
    };

    #[test]
    fn test_config_defaults() {
        let config = Config::default();

        assert_eq!(config.input, PathBuf::from("data/input_data.txt"));
        assert_eq!(config.window.get(), 2);
        assert_eq!(config.pos, Pos::Verb);
        assert!(config.stopwords.is_none() && config.wordnet.is_none());
    }

    #[test]
    fn test_config_empty_object() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_config_overrides() {
        let config =
            Config::from_json(r#"{"window": 3, "pos": "adj", "wordnet": "/usr/share/wordnet"}"#)
                .unwrap();

        assert_eq!(config.window, NonZeroUsize::new(3).unwrap());
        assert_eq!(config.pos, Pos::Adjective);
        assert_eq!(config.wordnet, Some(PathBuf::from("/usr/share/wordnet")));
        assert_eq!(config.input, PathBuf::from("data/input_data.txt"));
    }

    #[test]
    fn test_config_rejects_zero_window() {
        let error = Config::from_json(r#"{"window": 0}"#).unwrap_err();
        assert!(matches!(error, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_rejects_unknown_field() {
        assert!(Config::from_json(r#"{"windows": 2}"#).is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"input": "corpus.txt", "pos": "noun"}}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.input, PathBuf::from("corpus.txt"));
        assert_eq!(config.pos, Pos::Noun);
    }

    #[test]
    fn test_config_missing_file() {
        let error = Config::from_file("missing/config.json").unwrap_err();
        assert!(matches!(error, Error::Config(ConfigError::File { .. })));
    }
}
