// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use crate::core::converter::{CONTENT_FOLDER, ConvertConfig, Visit, classify, convert};
pub use crate::core::ignore::{
    ExclusionPattern, IGNORE_FILE_NAME, Patterns, load_ignore_patterns, should_exclude,
};
pub use crate::core::rewrite::rewrite_links;
pub use models::ConversionStats;
