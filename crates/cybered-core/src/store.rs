//! JSON-backed content store.
//!
//! The store holds only a path. Every call re-reads and re-parses the
//! dataset file, so edits to the file take effect without a restart. This
//! is a deliberate freshness-over-performance choice for a tiny dataset;
//! an invalidation-aware cache would replace `load` if the dataset grew.

use std::path::{Path, PathBuf};

use crate::error::ContentError;
use crate::model::{Dataset, Module};

/// Read-only handle to the content dataset on disk.
#[derive(Debug, Clone)]
pub struct ContentStore {
    path: PathBuf,
}

impl ContentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing dataset file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole dataset.
    pub async fn load(&self) -> Result<Dataset, ContentError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ContentError::DatasetMissing {
                    path: self.path.clone(),
                });
            }
            Err(e) => {
                return Err(ContentError::DatasetUnreadable {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let dataset: Dataset =
            serde_json::from_slice(&bytes).map_err(|e| ContentError::DatasetInvalid {
                path: self.path.clone(),
                source: e,
            })?;

        tracing::debug!(modules = dataset.modules.len(), "dataset loaded");
        Ok(dataset)
    }

    /// Load the dataset and return the module with the given id.
    pub async fn module(&self, id: &str) -> Result<Module, ContentError> {
        let dataset = self.load().await?;
        dataset
            .module(id)
            .cloned()
            .ok_or_else(|| ContentError::ModuleNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    const SAMPLE: &str = r#"{
        "modules": [
            {
                "id": "m1",
                "title": "Phishing",
                "summary": "Spotting bad links",
                "quiz": [
                    {
                        "id": "q1",
                        "question": "Q?",
                        "options": ["A", "B"],
                        "answer": 1,
                        "explanation": "B is correct"
                    }
                ]
            }
        ]
    }"#;

    #[tokio::test]
    async fn load_parses_dataset() {
        let file = write_dataset(SAMPLE);
        let store = ContentStore::new(file.path());
        let dataset = store.load().await.unwrap();
        assert_eq!(dataset.modules.len(), 1);
        assert_eq!(dataset.modules[0].quiz[0].answer, 1);
    }

    #[tokio::test]
    async fn module_lookup_and_not_found() {
        let file = write_dataset(SAMPLE);
        let store = ContentStore::new(file.path());
        assert_eq!(store.module("m1").await.unwrap().title, "Phishing");

        let err = store.module("missing").await.unwrap_err();
        assert!(matches!(err, ContentError::ModuleNotFound(ref id) if id == "missing"));
    }

    #[tokio::test]
    async fn missing_file_is_dataset_missing() {
        let store = ContentStore::new("/nonexistent/modules.json");
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, ContentError::DatasetMissing { .. }));
    }

    #[tokio::test]
    async fn invalid_json_is_dataset_invalid() {
        let file = write_dataset("{ not json");
        let store = ContentStore::new(file.path());
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, ContentError::DatasetInvalid { .. }));
    }

    #[tokio::test]
    async fn reload_picks_up_edits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("modules.json");
        std::fs::write(&path, r#"{"modules": []}"#).unwrap();

        let store = ContentStore::new(&path);
        assert!(store.load().await.unwrap().modules.is_empty());

        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(store.load().await.unwrap().modules.len(), 1);
    }
}
