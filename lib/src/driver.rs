use std::{
    fmt::{Display, Formatter},
    path::Path,
};

use log::{debug, error, info};

use crate::{
    error::Result,
    pipeline::{Pipeline, Record},
    read::FileReader,
    sentence::Sentence,
    util::Counter,
};

/// Line tallies for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: Counter<usize>,
    pub skipped: Counter<usize>,
    pub records: Counter<usize>,
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} lines read, {} blank lines skipped, {} records",
            self.lines, self.skipped, self.records
        )
    }
}

/// Feeds input lines through a [`Pipeline`] and collects the records.
#[derive(Clone, Debug)]
pub struct Driver {
    pipeline: Pipeline,
}

impl Driver {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    #[inline]
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Processes every line of the file at `path`. An input that cannot be
    /// opened or read is logged and yields no records.
    pub async fn run<P: AsRef<Path>>(&self, path: P) -> Vec<Record> {
        let path = path.as_ref();
        info!("Loading data from {path:?}");

        let text = match read(path).await {
            Ok(text) => text,
            Err(error) => {
                error!("{error}");
                return Vec::new();
            }
        };

        let (records, summary) = self.process_text(&text);
        info!("Processing complete: {summary}");

        records
    }

    /// Records for the non-blank lines of `text`, in order.
    pub fn process_text(&self, text: &str) -> (Vec<Record>, Summary) {
        let mut summary = Summary::default();

        let records = text
            .lines()
            .filter_map(|line| {
                summary.lines.increment();

                let Some(sentence) = Sentence::parse(line) else {
                    summary.skipped.increment();
                    return None;
                };

                debug!("Line {}: {sentence}", summary.lines);
                summary.records.increment();

                Some(self.pipeline.process(&sentence))
            })
            .collect();

        (records, summary)
    }
}

async fn read(path: &Path) -> Result<String> {
    let mut buffer = String::new();
    let mut reader = FileReader::new();

    reader.open(path).await?;
    reader.read_into(&mut buffer).await?;

    Ok(buffer)
}
