use thiserror::Error;

use crate::domain::EntryError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Category already exists: {0}")]
    CategoryAlreadyExists(String),

    #[error("Cannot transfer from category {0} to itself")]
    SelfTransfer(String),

    #[error(transparent)]
    Entry(#[from] EntryError),
}
