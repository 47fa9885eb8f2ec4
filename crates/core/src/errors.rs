use thiserror::Error;

use crate::validation::SlotError;

#[derive(Error, Debug, PartialEq)]
pub enum AvailError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid hour: {0}")]
    InvalidHour(String),

    #[error("Invalid time zone: {0}")]
    InvalidZone(String),

    #[error(transparent)]
    Slot(#[from] SlotError),
}

pub type AvailResult<T> = Result<T, AvailError>;
