mod error;
mod types;

pub use error::OrderError;
pub use types::*;
