use std::io;
use thiserror::Error;

/// Failure conditions surfaced explicitly instead of being left undefined.
#[derive(Error, Debug)]
pub enum Error {
    /// A negative value was handed to the decimal formatter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input would exceed the buffer capacity; the character is rejected,
    /// never written past the end.
    #[error("input buffer full (capacity {capacity})")]
    BufferOverflow { capacity: usize },

    /// The terminal backend could not be initialized. Fatal at startup.
    #[error("terminal backend unavailable: {0}")]
    BackendUnavailable(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
