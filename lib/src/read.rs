use std::path::{Path, PathBuf};

use tokio::{fs::File, io::AsyncReadExt};

use crate::error::{IoError, Result};

#[derive(Debug, Default)]
pub struct FileReader {
    inner: Option<File>,
    path: PathBuf,
}

impl FileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path_buf = path.as_ref().to_path_buf();

        match File::open(&path_buf).await {
            Ok(file) => {
                self.inner = Some(file);
                self.path = path_buf;
                Ok(())
            }
            Err(error) => Err(IoError::File {
                path: path_buf,
                kind: error.kind(),
            }
            .into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fails on input that is not valid UTF-8.
    pub async fn read_into(&mut self, buffer: &mut String) -> Result<()> {
        match &mut self.inner {
            Some(reader) => reader.read_to_string(buffer).await.map(|_| ()).map_err(|error| {
                IoError::File {
                    path: self.path.clone(),
                    kind: error.kind(),
                }
                .into()
            }),

            None => Err(IoError::Reader(std::io::ErrorKind::InvalidInput).into()),
        }
    }
}
