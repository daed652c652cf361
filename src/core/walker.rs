use crate::core::filter::filter_content;
use crate::domain::model::{FileReport, FileStatus, FilterOutcome, RunSummary};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{Result, StripError};
use std::ffi::OsStr;
use std::path::Path;
use walkdir::WalkDir;

/// Suffix match on the raw file name bytes, so `index.d.ts`, a bare `.js`
/// and names that are not valid UTF-8 all count.
pub fn is_target_file(file_name: &OsStr, extensions: &[String]) -> bool {
    let name = file_name.as_encoded_bytes();
    extensions.iter().any(|ext| {
        let ext = ext.as_bytes();
        name.len() > ext.len()
            && name.ends_with(ext)
            && name[name.len() - ext.len() - 1] == b'.'
    })
}

pub struct CommentStripper<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CommentStripper<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Reads, filters and rewrites one file in place. No backup is kept.
    pub fn process_file(&self, path: &Path) -> Result<FilterOutcome> {
        let content = self.storage.read_text(path)?;
        let outcome = filter_content(&content);
        if outcome.is_unchanged() {
            tracing::debug!("{}: no comment lines", path.display());
        } else {
            tracing::debug!(
                "{}: kept {} lines, removed {}",
                path.display(),
                outcome.kept_lines,
                outcome.removed_lines
            );
        }
        self.storage.write_text(path, &outcome.content)?;
        Ok(outcome)
    }

    /// Walks the root and prints one console line per matching file.
    pub fn run(&self) -> RunSummary {
        self.run_with(|report| println!("{}", report.console_line()))
    }

    pub fn run_with<F>(&self, mut on_report: F) -> RunSummary
    where
        F: FnMut(&FileReport),
    {
        let root = self.config.root();
        let extensions = self.config.extensions();
        let mut summary = RunSummary::default();

        tracing::info!("Scanning {} for: {}", root.display(), extensions.join(", "));

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", StripError::from(e));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if !is_target_file(entry.file_name(), extensions) {
                summary.files_skipped += 1;
                continue;
            }

            let status = match self.process_file(entry.path()) {
                Ok(outcome) => FileStatus::Processed {
                    removed_lines: outcome.removed_lines,
                },
                Err(e) => {
                    tracing::debug!("Failed on {}: {}", entry.path().display(), e);
                    FileStatus::Failed {
                        message: e.user_friendly_message(),
                    }
                }
            };

            let report = FileReport {
                path: entry.path().to_path_buf(),
                status,
            };
            on_report(&report);
            summary.record(&report);
        }

        tracing::info!(
            "Done: {} processed, {} failed, {} skipped, {} lines removed",
            summary.files_processed,
            summary.files_failed,
            summary.files_skipped,
            summary.lines_removed
        );

        summary
    }
}
