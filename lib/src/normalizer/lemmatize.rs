use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, ResourceError, Result},
    lexicon::{Lexicon, Lookup},
    normalizer::TextNormalizer,
    token::{Token, Tokens},
};

/// Part-of-speech hint applied to every token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pos {
    #[serde(alias = "adj")]
    Adjective,
    #[serde(alias = "adv")]
    Adverb,
    Noun,
    #[default]
    Verb,
}

impl Pos {
    pub const ALL: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adjective, Pos::Adverb];

    pub fn name(self) -> &'static str {
        match self {
            Pos::Adjective => "adjective",
            Pos::Adverb => "adverb",
            Pos::Noun => "noun",
            Pos::Verb => "verb",
        }
    }

    /// Suffix used by the WordNet database files, as in `index.verb`.
    pub fn wordnet_suffix(self) -> &'static str {
        match self {
            Pos::Adjective => "adj",
            Pos::Adverb => "adv",
            Pos::Noun => "noun",
            Pos::Verb => "verb",
        }
    }

    /// Inflectional endings and their replacements, tried in order.
    fn rules(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Pos::Noun => &[
                ("s", ""),
                ("ses", "s"),
                ("ves", "f"),
                ("xes", "x"),
                ("zes", "z"),
                ("ches", "ch"),
                ("shes", "sh"),
                ("men", "man"),
                ("ies", "y"),
            ],
            Pos::Verb => &[
                ("s", ""),
                ("ies", "y"),
                ("es", "e"),
                ("es", ""),
                ("ed", "e"),
                ("ed", ""),
                ("ing", "e"),
                ("ing", ""),
            ],
            Pos::Adjective => &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")],
            Pos::Adverb => &[],
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pos {
    type Err = ConfigError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "n" | "noun" => Ok(Pos::Noun),
            "v" | "verb" => Ok(Pos::Verb),
            "a" | "adj" | "adjective" => Ok(Pos::Adjective),
            "r" | "adv" | "adverb" => Ok(Pos::Adverb),
            _ => Err(ConfigError::Pos(value.to_string())),
        }
    }
}

fn detach(rules: &[(&str, &str)], forms: &[String]) -> Vec<String> {
    forms
        .iter()
        .flat_map(move |form| {
            rules
                .iter()
                .filter(move |(suffix, _)| form.ends_with(suffix))
                .map(move |(suffix, replacement)| {
                    let mut stem = form[..form.len() - suffix.len()].to_string();
                    stem.push_str(replacement);
                    stem
                })
        })
        .collect()
}

/// Dictionary lemmatizer with a fixed part-of-speech hint.
///
/// A token maps to the shortest indexed form reachable through the
/// exception list or the detachment rules of the configured part of
/// speech. Tokens with no such form pass through unchanged, so under the
/// verb hint `"better"` stays `"better"` and `"cats"` only becomes `"cat"`
/// because `cat` is also a verb.
#[derive(Clone, Debug)]
pub struct Lemmatizer {
    pos: Pos,
    lookup: Lookup,
}

impl Lemmatizer {
    pub fn new(lexicon: &Lexicon, pos: Pos) -> Result<Self> {
        let lookup = lexicon
            .get(pos)
            .cloned()
            .ok_or(ResourceError::MissingPos(pos))?;

        Ok(Self { pos, lookup })
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Indexed base forms for `word`, in discovery order, deduplicated.
    pub fn candidates(&self, word: &str) -> Vec<String> {
        if let Some(bases) = self.lookup.exceptions(word) {
            let forms = std::iter::once(word.to_string()).chain(bases.iter().cloned());
            return self.indexed(forms);
        }

        let rules = self.pos.rules();
        let mut forms = detach(rules, &[word.to_string()]);

        let found = self.indexed(std::iter::once(word.to_string()).chain(forms.iter().cloned()));
        if !found.is_empty() {
            return found;
        }

        // Every rule shortens its input or yields a form no rule matches again.
        while !forms.is_empty() {
            forms = detach(rules, &forms);

            let found = self.indexed(forms.iter().cloned());
            if !found.is_empty() {
                return found;
            }
        }

        Vec::new()
    }

    pub fn lemma(&self, word: &str) -> String {
        self.candidates(word)
            .into_iter()
            .min_by_key(|form| form.chars().count())
            .unwrap_or_else(|| word.to_string())
    }

    fn indexed(&self, forms: impl Iterator<Item = String>) -> Vec<String> {
        let mut seen = HashSet::new();

        forms
            .filter(|form| self.lookup.contains(form))
            .filter(|form| seen.insert(form.clone()))
            .collect()
    }
}

impl TextNormalizer for Lemmatizer {
    fn normalize(&self, tokens: &mut Tokens) {
        tokens.iter_mut().for_each(|token| {
            *token = Token::from(self.lemma(token.as_str()));
        })
    }
}
