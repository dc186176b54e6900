pub mod cli;
pub mod error;
pub mod fixtures;
pub mod github;
pub mod huggingface;
pub mod progress;
pub mod transfer;
pub mod validation;

pub use error::{Error, Result};
