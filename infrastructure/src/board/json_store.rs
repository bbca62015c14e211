//! File-backed task board.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use taskdesk_application::{RepositoryError, TaskRepository};
use taskdesk_domain::TaskBoard;
use tracing::debug;

/// Board stored as pretty-printed JSON in a single file.
///
/// A missing file is an empty board. Saves write a sibling temp file and
/// rename it over the target, so a crash never leaves a half-written board.
pub struct JsonTaskRepository {
    path: PathBuf,
}

impl JsonTaskRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "board.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn io_error(action: &str, path: &Path, error: std::io::Error) -> RepositoryError {
    RepositoryError::Io(format!("{} {}: {}", action, path.display(), error))
}

#[async_trait]
impl TaskRepository for JsonTaskRepository {
    async fn load(&self) -> Result<TaskBoard, RepositoryError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No board at {}, starting empty", self.path.display());
                return Ok(TaskBoard::default());
            }
            Err(e) => return Err(io_error("Failed to read", &self.path, e)),
        };

        serde_json::from_str(&text)
            .map_err(|e| RepositoryError::Corrupt(format!("{}: {}", self.path.display(), e)))
    }

    async fn save(&self, board: &TaskBoard) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error("Failed to create", parent, e))?;
        }

        let json = serde_json::to_string_pretty(board)
            .map_err(|e| RepositoryError::Corrupt(e.to_string()))?;

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, json)
            .await
            .map_err(|e| io_error("Failed to write", &temp_path, e))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| io_error("Failed to replace", &self.path, e))?;

        debug!(
            "Saved {} tasks to {}",
            board.tasks().len(),
            self.path.display()
        );
        Ok(())
    }
}
