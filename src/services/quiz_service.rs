use std::path::PathBuf;

use tokio::fs;

use crate::error::Result;
use crate::models::dataset::QuizDataset;

/// Reads the quiz dataset from disk. The file is re-read on every call, so
/// dataset edits show up without a restart and concurrent requests need no
/// coordination.
#[derive(Debug, Clone)]
pub struct QuizService {
    data_path: PathBuf,
}

impl QuizService {
    pub fn new(data_path: PathBuf) -> Self {
        Self { data_path }
    }

    /// Read and parse the dataset, surfacing the underlying failure.
    /// The health endpoint uses this to report availability.
    pub async fn try_load(&self) -> Result<QuizDataset> {
        let raw = fs::read_to_string(&self.data_path).await?;
        let dataset = serde_json::from_str(&raw)?;
        Ok(dataset)
    }

    /// Load the dataset, absorbing any read or parse failure into the empty
    /// fallback. Callers never observe an error from this path.
    pub async fn load(&self) -> QuizDataset {
        match self.try_load().await {
            Ok(dataset) => dataset,
            Err(err) => {
                tracing::error!(
                    "failed to load quiz data from {}: {}",
                    self.data_path.display(),
                    err
                );
                QuizDataset::fallback()
            }
        }
    }
}
