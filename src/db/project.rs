use crate::models;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::Instrument;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("project file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed project data: {0}")]
    DataCorruption(String),
    #[error("could not serialize projects: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The whole project collection lives in one pretty-printed JSON array.
///
/// Rows are kept as raw JSON so older records with other field shapes still
/// load; the only hard rule is that the document is an array.
///
/// Every append rewrites the full file. Appends are serialized through an
/// in-process lock; several processes sharing one file can still lose updates.
pub struct ProjectStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ProjectStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file holding an empty array unless it already exists.
    pub async fn ensure_exists(&self) -> Result<(), StoreError> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        tracing::info!("Creating empty project file {:?}", self.path);
        self.write(&[]).await
    }

    pub async fn all(&self) -> Result<Vec<Value>, StoreError> {
        let contents = match tokio::fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(err) => return Err(err.into()),
        };

        if contents.is_empty() {
            return Ok(vec![]);
        }

        match serde_json::from_slice(&contents) {
            Ok(Value::Array(projects)) => Ok(projects),
            Ok(_) => Err(StoreError::DataCorruption(
                "expected a JSON array of projects".to_string(),
            )),
            Err(err) => Err(StoreError::DataCorruption(err.to_string())),
        }
    }

    pub async fn append(&self, project: models::Project) -> Result<(), StoreError> {
        let span = tracing::info_span!("Append project.", title = %project.title);
        async move {
            let _guard = self.write_lock.lock().await;

            let mut projects = self.all().await?;
            projects.push(serde_json::to_value(&project)?);
            self.write(&projects).await.map_err(|err| {
                tracing::error!("Failed to write project file, error: {:?}", err);
                err
            })
        }
        .instrument(span)
        .await
    }

    /// Write to a sibling temp file and rename it over the target, readers never see half a file.
    async fn write(&self, projects: &[Value]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(projects)?;

        let mut tmp_name = self.path.clone().into_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}
