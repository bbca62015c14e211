//! Task repository port
//!
//! Where the board's working copy lives between commands.

use async_trait::async_trait;
use taskdesk_domain::TaskBoard;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Corrupt board data: {0}")]
    Corrupt(String),
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Load the board; a store that was never written yields an empty board
    async fn load(&self) -> Result<TaskBoard, RepositoryError>;

    /// Persist the whole board
    async fn save(&self, board: &TaskBoard) -> Result<(), RepositoryError>;
}

/// Board kept in memory, for tests and `--ephemeral` runs
#[derive(Default)]
pub struct InMemoryTaskRepository {
    board: Mutex<TaskBoard>,
}

impl InMemoryTaskRepository {
    pub fn new(board: TaskBoard) -> Self {
        Self {
            board: Mutex::new(board),
        }
    }

    pub async fn snapshot(&self) -> TaskBoard {
        self.board.lock().await.clone()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn load(&self) -> Result<TaskBoard, RepositoryError> {
        Ok(self.board.lock().await.clone())
    }

    async fn save(&self, board: &TaskBoard) -> Result<(), RepositoryError> {
        *self.board.lock().await = board.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdesk_domain::Task;

    #[tokio::test]
    async fn test_in_memory_round_trip() {
        let repo = InMemoryTaskRepository::default();
        assert!(repo.load().await.unwrap().tasks().is_empty());

        let board = TaskBoard::new(vec![Task::new("1", "audit", "Vedant")]);
        repo.save(&board).await.unwrap();
        assert_eq!(repo.snapshot().await, board);
    }
}
