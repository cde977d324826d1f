//! Error types for Keel

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
