use log::{info, warn};

use crate::{
    config::Config,
    error::Result,
    lexicon::Lexicon,
    normalizer::Stopwords,
};

/// Linguistic resources the pipeline is built from. Loaded once at startup;
/// any failure here is fatal for the run.
#[derive(Clone, Debug)]
pub struct Resources {
    stopwords: Stopwords,
    lexicon: Lexicon,
}

impl Resources {
    pub fn new(stopwords: Stopwords, lexicon: Lexicon) -> Self {
        Self { stopwords, lexicon }
    }

    /// English stopwords and the bundled verb lexicon.
    pub fn bundled() -> Self {
        Self::new(Stopwords::english(), Lexicon::bundled())
    }

    /// Stopwords from the configured file, else the bundled list. The lexicon
    /// comes from the configured WordNet directory, else an installed
    /// WordNet, else the bundled verb lexicon.
    pub fn load(config: &Config) -> Result<Self> {
        let stopwords = match &config.stopwords {
            Some(path) => Stopwords::load(path)?,
            None => Stopwords::english(),
        };

        let lexicon = match config.wordnet.clone().or_else(Lexicon::locate_wordnet) {
            Some(dir) => Lexicon::load_wordnet(dir)?,
            None => {
                warn!("No WordNet installation found, using the bundled verb lexicon");
                Lexicon::bundled()
            }
        };

        info!("Resources ready: {} stopwords", stopwords.len());

        Ok(Self::new(stopwords, lexicon))
    }

    #[inline]
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    #[inline]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}
