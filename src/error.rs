//! Defines custom error types for the application.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Urls2MdError {
    #[error("Please provide a file path as an argument.")]
    MissingArgument,
}
