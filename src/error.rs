//! Application Error Types

use derive_more::{Display, Error};

pub type Error = exn::Exn<ErrorKind>;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("failed to initialize logging: {_0}")]
    Logging(#[error(not(source))] String),
    #[display("invalid configuration")]
    Config,
    #[display("failed to set up crawler")]
    Crawl,
    #[display("failed to write output")]
    Output,
}
