use std::{
    env,
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use hashbrown::{HashMap, HashSet};
use log::{debug, info};

use crate::{
    error::{ResourceError, Result},
    normalizer::lemmatize::Pos,
};

const BUNDLED_VERB_INDEX: &str = include_str!("../assets/wordnet/index.verb");
const BUNDLED_VERB_EXCEPTIONS: &str = include_str!("../assets/wordnet/verb.exc");

/// Install locations checked after the environment variables.
const WORDNET_DIRS: [&str; 4] = [
    "/usr/share/nltk_data/corpora/wordnet",
    "/usr/local/share/nltk_data/corpora/wordnet",
    "/usr/share/wordnet",
    "/usr/local/share/wordnet",
];

/// Lemma index and exception list for one part of speech.
#[derive(Clone, Debug, Default)]
pub struct Lookup {
    index: HashSet<String>,
    exceptions: HashMap<String, Vec<String>>,
}

impl Lookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the contents of a WordNet `index.<pos>` and `<pos>.exc` pair.
    pub fn parse(index: &str, exceptions: &str) -> Self {
        let mut lookup = Self::new();

        // Header lines start with whitespace; the lemma is the first field.
        index
            .lines()
            .filter(|line| !line.starts_with(char::is_whitespace))
            .filter_map(|line| line.split_whitespace().next())
            .for_each(|lemma| lookup.insert_lemma(lemma));

        exceptions.lines().for_each(|line| {
            let mut fields = line.split_whitespace();

            if let Some(form) = fields.next() {
                lookup.insert_exception(form, fields);
            }
        });

        lookup
    }

    pub fn insert_lemma<S: Into<String>>(&mut self, lemma: S) {
        self.index.insert(lemma.into());
    }

    /// Bases are appended to any already recorded for `form`.
    pub fn insert_exception<S, I, B>(&mut self, form: S, bases: I)
    where
        S: Into<String>,
        I: IntoIterator<Item = B>,
        B: Into<String>,
    {
        self.exceptions
            .entry(form.into())
            .or_default()
            .extend(bases.into_iter().map(Into::into));
    }

    #[inline]
    pub fn contains(&self, lemma: &str) -> bool {
        self.index.contains(lemma)
    }

    #[inline]
    pub fn exceptions(&self, form: &str) -> Option<&[String]> {
        self.exceptions.get(form).map(Vec::as_slice)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Morphological dictionary keyed by part of speech.
#[derive(Clone, Debug, Default)]
pub struct Lexicon(HashMap<Pos, Lookup>);

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// A few thousand common English verbs in WordNet layout, with their
    /// irregular, `-ied` and doubled-consonant inflections. Contains no other
    /// part of speech.
    pub fn bundled() -> Self {
        let mut lexicon = Self::new();
        lexicon.insert(
            Pos::Verb,
            Lookup::parse(BUNDLED_VERB_INDEX, BUNDLED_VERB_EXCEPTIONS),
        );
        lexicon
    }

    /// Loads every part of speech found in a WordNet `dict/` directory.
    /// Exception files are optional, index files are not.
    pub fn load_wordnet<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut lexicon = Self::new();

        for pos in Pos::ALL {
            let suffix = pos.wordnet_suffix();

            let Some(index) = read_optional(&dir.join(format!("index.{suffix}")))? else {
                debug!("No {pos} index in {dir:?}");
                continue;
            };
            let exceptions = read_optional(&dir.join(format!("{suffix}.exc")))?.unwrap_or_default();

            let lookup = Lookup::parse(&index, &exceptions);
            info!("Loaded {} {pos} lemmas from {dir:?}", lookup.len());
            lexicon.insert(pos, lookup);
        }

        if lexicon.0.is_empty() {
            return Err(ResourceError::EmptyLexicon(dir.to_path_buf()).into());
        }

        Ok(lexicon)
    }

    /// First installed WordNet `dict/` directory, searched through
    /// `WNSEARCHDIR`, `WNHOME`, `NLTK_DATA`, `~/nltk_data` and the usual
    /// system locations.
    pub fn locate_wordnet() -> Option<PathBuf> {
        wordnet_candidates(|key| env::var_os(key))
            .into_iter()
            .find(|dir| dir.join("index.verb").is_file())
    }

    pub fn insert(&mut self, pos: Pos, lookup: Lookup) -> &mut Self {
        self.0.insert(pos, lookup);
        self
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Option<&Lookup> {
        self.0.get(&pos)
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.0.contains_key(&pos)
    }
}

fn wordnet_candidates<F>(var: F) -> Vec<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    let mut dirs = Vec::new();

    if let Some(dir) = var("WNSEARCHDIR") {
        dirs.push(PathBuf::from(dir));
    }
    if let Some(home) = var("WNHOME") {
        dirs.push(PathBuf::from(home).join("dict"));
    }
    if let Some(paths) = var("NLTK_DATA") {
        dirs.extend(env::split_paths(&paths).map(|path| path.join("corpora").join("wordnet")));
    }
    if let Some(home) = var("HOME") {
        dirs.push(PathBuf::from(home).join("nltk_data/corpora/wordnet"));
    }

    dirs.extend(WORDNET_DIRS.iter().map(PathBuf::from));
    dirs
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(ResourceError::Lexicon {
            path: path.to_path_buf(),
            kind: error.kind(),
        }
        .into()),
    }
}
