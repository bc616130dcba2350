use std::{
    fmt::{Display, Formatter},
    num::NonZeroUsize,
};

use log::debug;
use serde::Serialize;

use crate::{
    config::Config,
    error::Result,
    ngram::{self, Ngram},
    normalizer::{lemmatize::Pos, Lemmatizer, Noise, Stopwords, TextNormalizer},
    resource::Resources,
    sentence::Sentence,
    token::Tokens,
    tokenizer::Tokenizer,
};

/// Outcome for one input sentence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Record {
    original: String,
    lemmas: Vec<String>,
    bigrams: Vec<Ngram>,
}

impl Record {
    pub fn new(original: String, lemmas: Vec<String>, bigrams: Vec<Ngram>) -> Self {
        Self {
            original,
            lemmas,
            bigrams,
        }
    }

    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[inline]
    pub fn lemmas(&self) -> &[String] {
        &self.lemmas
    }

    /// Windows of the configured size; pairs unless configured otherwise.
    #[inline]
    pub fn bigrams(&self) -> &[Ngram] {
        &self.bigrams
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Original: {}", self.original)?;
        writeln!(f, "Tokens:   {:?}", self.lemmas)?;

        f.write_str("Bigrams:  [")?;
        for (position, gram) in self.bigrams.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{gram}")?;
        }
        f.write_str("]")
    }
}

/// The fixed four-stage pipeline:
/// noise removal, stopword filtering, lemmatization, n-grams.
///
/// Stages hold no per-line state, so one pipeline serves every line.
#[derive(Clone, Debug)]
pub struct Pipeline {
    noise: Noise,
    tokenizer: Tokenizer,
    stopwords: Stopwords,
    lemmatizer: Lemmatizer,
    window: NonZeroUsize,
}

impl Pipeline {
    pub fn new(resources: &Resources, pos: Pos, window: NonZeroUsize) -> Result<Self> {
        Ok(Self {
            noise: Noise::new(),
            tokenizer: Tokenizer::default(),
            stopwords: resources.stopwords().clone(),
            lemmatizer: Lemmatizer::new(resources.lexicon(), pos)?,
            window,
        })
    }

    pub fn from_config(resources: &Resources, config: &Config) -> Result<Self> {
        Self::new(resources, config.pos, config.window)
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    #[inline]
    pub fn window(&self) -> NonZeroUsize {
        self.window
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.lemmatizer.pos()
    }

    pub fn normalize(&self, text: &str) -> String {
        self.noise.clean(text)
    }

    pub fn remove_stopwords(&self, text: &str) -> Tokens {
        let mut tokens = self.tokenizer.tokenize(text);
        self.stopwords.normalize(&mut tokens);
        tokens
    }

    pub fn lemmatize(&self, mut tokens: Tokens) -> Tokens {
        self.lemmatizer.normalize(&mut tokens);
        tokens
    }

    pub fn ngrams(&self, lemmas: &Tokens) -> Vec<Ngram> {
        ngram::ngrams(lemmas.as_slice(), self.window)
    }

    pub fn process(&self, sentence: &Sentence) -> Record {
        let cleaned = self.normalize(sentence);
        let tokens = self.remove_stopwords(&cleaned);
        let lemmas = self.lemmatize(tokens).into_strings();
        let bigrams = ngram::ngrams(&lemmas, self.window);

        debug!("{sentence}: lemmas={lemmas:?} bigrams={bigrams:?}");

        Record::new(sentence.to_string(), lemmas, bigrams)
    }

    /// `None` for blank lines.
    pub fn process_line(&self, line: &str) -> Option<Record> {
        Sentence::parse(line).map(|sentence| self.process(&sentence))
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use crate::{
        lexicon::Lexicon,
        ngram::{Ngram, BIGRAM},
        normalizer::{lemmatize::Pos, Stopwords},
        pipeline::{Pipeline, Record},
        resource::Resources,
        sentence::Sentence,
        tokenizer::{Tokenizer, Whitespace},
        tokens,
    };

    fn pipeline() -> Pipeline {
        Pipeline::new(&Resources::bundled(), Pos::Verb, BIGRAM).unwrap()
    }

    #[test]
    fn test_pipeline_stages() {
        let pipeline = pipeline();

        let cleaned = pipeline.normalize("The cats are running in the Park!");
        assert_eq!(cleaned, "the cats are running in the park");

        let tokens = pipeline.remove_stopwords(&cleaned);
        assert_eq!(tokens, tokens!["cats", "running", "park"]);

        let lemmas = pipeline.lemmatize(tokens);
        assert_eq!(lemmas, tokens!["cat", "run", "park"]);

        assert_eq!(
            pipeline.ngrams(&lemmas),
            vec![Ngram::from(["cat", "run"]), Ngram::from(["run", "park"])]
        );
    }

    #[test]
    fn test_pipeline_process() {
        let sentence = Sentence::parse("  The cats are running in the Park!  ").unwrap();
        let record = pipeline().process(&sentence);

        assert_eq!(record.original(), "The cats are running in the Park!");
        assert_eq!(record.lemmas(), ["cat", "run", "park"]);
        assert_eq!(record.bigrams().len(), 2);
    }

    #[test]
    fn test_pipeline_blank_line() {
        assert_eq!(pipeline().process_line("   \t"), None);
    }

    #[test]
    fn test_pipeline_only_stopwords() {
        let record = pipeline().process_line("It is what it is.").unwrap();

        assert!(record.lemmas().is_empty());
        assert!(record.bigrams().is_empty());
    }

    #[test]
    fn test_pipeline_single_survivor() {
        let record = pipeline().process_line("The dog!").unwrap();

        assert_eq!(record.lemmas(), ["dog"]);
        assert!(record.bigrams().is_empty());
    }

    #[test]
    fn test_pipeline_contraction_is_fused_by_noise() {
        // The apostrophe is gone before tokenization, leaving "dont".
        let record = pipeline().process_line("Don't stop walking").unwrap();
        assert_eq!(record.lemmas(), ["dont", "stop", "walk"]);
    }

    #[test]
    fn test_pipeline_cannot_splits() {
        let record = pipeline().process_line("Dogs cannot fly").unwrap();
        assert_eq!(record.lemmas(), ["dog", "fly"]);
    }

    #[test]
    fn test_pipeline_window() {
        let window = NonZeroUsize::new(3).unwrap();
        let pipeline = Pipeline::new(&Resources::bundled(), Pos::Verb, window).unwrap();

        let record = pipeline.process_line("cats jumped dogs barked").unwrap();
        assert_eq!(
            record.bigrams(),
            [Ngram::from(["cat", "jump", "dog"]), Ngram::from(["jump", "dog", "bark"])]
        );
    }

    #[test]
    fn test_pipeline_whitespace_tokenizer() {
        let pipeline = pipeline().with_tokenizer(Tokenizer::Whitespace(Whitespace::new()));
        let record = pipeline.process_line("Dogs cannot fly").unwrap();
        assert_eq!(record.lemmas(), ["dog", "cannot", "fly"]);
    }

    #[test]
    fn test_pipeline_missing_pos_is_fatal() {
        let resources = Resources::new(Stopwords::english(), Lexicon::new());
        assert!(Pipeline::new(&resources, Pos::Verb, BIGRAM).is_err());
    }

    #[test]
    fn test_record_display() {
        let record = Record::new(
            "Cats run".into(),
            vec!["cat".into(), "run".into()],
            vec![Ngram::from(["cat", "run"])],
        );

        assert_eq!(
            record.to_string(),
            "Original: Cats run\nTokens:   [\"cat\", \"run\"]\nBigrams:  [(\"cat\", \"run\")]"
        );
    }

    #[test]
    fn test_record_serialize() {
        let record = pipeline().process_line("The cats are running in the Park!").unwrap();

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({
                "original": "The cats are running in the Park!",
                "lemmas": ["cat", "run", "park"],
                "bigrams": [["cat", "run"], ["run", "park"]],
            })
        );
    }
}
