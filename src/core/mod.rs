pub mod filter;
pub mod walker;

pub use crate::domain::model::{FileReport, FileStatus, FilterOutcome, LineKind, RunSummary};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
