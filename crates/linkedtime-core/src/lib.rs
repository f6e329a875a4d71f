pub mod config;
pub mod logging;

pub mod delayed;
pub mod extract;

pub use extract::{extract, extract_with_offset, ExtractError, PostTime};
