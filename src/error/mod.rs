use crate::color::ColorError;
use crate::storage::StorageError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to serialize theme settings")]
    Serialize(#[from] serde_json::Error),
}
