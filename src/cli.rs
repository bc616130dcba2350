extern crate clap;

use std::{num::NonZeroUsize, path::PathBuf};

use clap::Parser;
use prep::{Config, Pos};

#[derive(Debug, Parser)]
#[command(name = "prep-bin", version)]
#[command(about = "Normalize sentences, drop stopwords, lemmatize and extract n-grams")]
pub struct Cli {
    /// JSON config file. Flags below take precedence over it.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Input file, one sentence per line [default: data/input_data.txt]
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// N-gram window size [default: 2]
    #[arg(long, short = 'n')]
    pub window: Option<NonZeroUsize>,

    /// Part-of-speech hint: noun, verb, adjective or adverb [default: verb]
    #[arg(long, short = 'p')]
    pub pos: Option<Pos>,

    /// Stopword list, one word per line, replacing the bundled English list
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// WordNet dict/ directory replacing the bundled verb lexicon
    #[arg(long)]
    pub wordnet: Option<PathBuf>,

    /// Print the records as JSON instead of the console report
    #[arg(long)]
    pub json: bool,

    /// Log resource loading and every processed line
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Default `env_logger` filter; `RUST_LOG` still takes precedence.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    pub fn config(&self) -> prep::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(window) = self.window {
            config.window = window;
        }
        if let Some(pos) = self.pos {
            config.pos = pos;
        }
        if let Some(stopwords) = &self.stopwords {
            config.stopwords = Some(stopwords.clone());
        }
        if let Some(wordnet) = &self.wordnet {
            config.wordnet = Some(wordnet.clone());
        }

        Ok(config)
    }
}
