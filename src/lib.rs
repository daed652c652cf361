pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{
    filter::{filter_content, strip_inline_comments},
    walker::CommentStripper,
};
pub use utils::error::{Result, StripError};
