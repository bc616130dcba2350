use crate::{
    token::{Token, Tokens},
    tokenizer::TextTokenizer,
};

/// Fused forms and the byte offset they split at. Matched case-insensitively.
const FUSED: [(&str, usize); 10] = [
    ("cannot", 3),
    ("d'ye", 1),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("more'n", 4),
    ("wanna", 3),
    ("'tis", 2),
    ("'twas", 2),
];

const CLITICS: [&str; 7] = ["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Apostrophes are handled by the clitic rules, not peeled as punctuation.
fn is_punctuation(ch: char) -> bool {
    (ch.is_ascii_punctuation() && ch != '\'')
        || matches!(
            ch,
            '“' | '”' | '‘' | '’' | '«' | '»' | '…' | '—' | '–' | '¡' | '¿'
        )
}

fn ends_with_ignore_case(word: &str, suffix: &str) -> bool {
    word.len() > suffix.len()
        && word.is_char_boundary(word.len() - suffix.len())
        && word[word.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Word-boundary tokenizer following Penn Treebank conventions: punctuation
/// at word edges becomes its own token, clitics such as `n't` and `'ll` are
/// split from their host, and fused forms like `cannot` are separated.
#[derive(Clone, Debug, Default)]
pub struct Treebank;

impl Treebank {
    pub fn new() -> Self {
        Self
    }

    fn split_chunk(chunk: &str, tokens: &mut Tokens) {
        let Some(start) = chunk.find(|ch: char| !is_punctuation(ch)) else {
            tokens.extend(chunk.chars().map(|ch| Token::from(ch.to_string())));
            return;
        };

        // A non-punctuation char exists, so the reverse scan always hits.
        let end = chunk
            .char_indices()
            .rev()
            .find(|(_, ch)| !is_punctuation(*ch))
            .map(|(index, ch)| index + ch.len_utf8())
            .unwrap_or(chunk.len());

        tokens.extend(chunk[..start].chars().map(|ch| Token::from(ch.to_string())));
        Self::split_word(&chunk[start..end], tokens);
        tokens.extend(chunk[end..].chars().map(|ch| Token::from(ch.to_string())));
    }

    fn split_word(word: &str, tokens: &mut Tokens) {
        if let Some(&(_, at)) = FUSED.iter().find(|(form, _)| word.eq_ignore_ascii_case(form)) {
            tokens.push(Token::from(&word[..at]));
            tokens.push(Token::from(&word[at..]));
            return;
        }

        if let Some(clitic) = CLITICS
            .iter()
            .find(|clitic| ends_with_ignore_case(word, clitic))
        {
            let at = word.len() - clitic.len();
            tokens.push(Token::from(&word[..at]));
            tokens.push(Token::from(&word[at..]));
            return;
        }

        if word.len() > 1 && word.ends_with('\'') {
            Self::split_word(&word[..word.len() - 1], tokens);
            tokens.push(Token::from("'"));
            return;
        }

        tokens.push(Token::from(word));
    }
}

impl TextTokenizer for Treebank {
    fn tokenize<T: AsRef<str>>(&self, text: T) -> Tokens {
        let mut tokens = Tokens::new();

        text.as_ref()
            .split_whitespace()
            .for_each(|chunk| Self::split_chunk(chunk, &mut tokens));

        tokens
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        tokenizer::{TextTokenizer, Treebank},
        tokens,
    };

    #[test]
    fn test_treebank_basic() {
        let tokens = Treebank::new().tokenize("the quick brown fox jumps over the lazy dog");

        assert_eq!(
            tokens,
            tokens!["the", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog"]
        );
    }

    #[test]
    fn test_treebank_punctuation() {
        let tokens = Treebank::new().tokenize("Hello, world! (This is a test.)");

        assert_eq!(
            tokens,
            tokens!["Hello", ",", "world", "!", "(", "This", "is", "a", "test", ".", ")"]
        );
    }

    #[test]
    fn test_treebank_clitics() {
        let tokens = Treebank::new().tokenize("They'll say it's fine, don't they? Can't be.");

        assert_eq!(
            tokens,
            tokens![
                "They", "'ll", "say", "it", "'s", "fine", ",", "do", "n't", "they", "?", "Ca",
                "n't", "be", "."
            ]
        );
    }

    #[test]
    fn test_treebank_fused_forms() {
        let tokens = Treebank::new().tokenize("i cannot stop gonna wanna Gimme");

        assert_eq!(
            tokens,
            tokens!["i", "can", "not", "stop", "gon", "na", "wan", "na", "Gim", "me"]
        );
    }

    #[test]
    fn test_treebank_trailing_apostrophe() {
        let tokens = Treebank::new().tokenize("the dogs' bowls");
        assert_eq!(tokens, tokens!["the", "dogs", "'", "bowls"]);
    }

    #[test]
    fn test_treebank_inner_punctuation_kept() {
        let tokens = Treebank::new().tokenize("memory-efficient compile-time");
        assert_eq!(tokens, tokens!["memory-efficient", "compile-time"]);
    }

    #[test]
    fn test_treebank_only_punctuation() {
        let tokens = Treebank::new().tokenize("... !");
        assert_eq!(tokens, tokens![".", ".", ".", "!"]);
    }

    #[test]
    fn test_treebank_unicode() {
        let tokens = Treebank::new().tokenize("एकाधिक ಭಾಷೆಗಳು work");
        assert_eq!(tokens, tokens!["एकाधिक", "ಭಾಷೆಗಳು", "work"]);
    }

    #[test]
    fn test_treebank_empty() {
        assert_eq!(Treebank::new().tokenize(""), tokens![]);
        assert_eq!(Treebank::new().tokenize("  \n\t"), tokens![]);
    }
}
