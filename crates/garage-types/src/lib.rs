//! Shared vehicle identity types and error definitions

mod error;
mod types;

pub use error::*;
pub use types::*;
