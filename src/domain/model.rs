use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Code,
    /// Starts with the documentation block opener `/**`.
    DocComment,
    /// Starts with `//` after leading whitespace.
    LineComment,
}

impl LineKind {
    pub fn is_kept(self) -> bool {
        !matches!(self, LineKind::LineComment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub content: String,
    pub kept_lines: usize,
    pub removed_lines: usize,
}

impl FilterOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.removed_lines == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Processed { removed_lines: usize },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
}

impl FileReport {
    /// The console line for this file.
    pub fn console_line(&self) -> String {
        match &self.status {
            FileStatus::Processed { .. } => format!("Processed: {}", self.path.display()),
            FileStatus::Failed { message } => {
                format!("Error processing {}: {}", self.path.display(), message)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_processed: usize,
    pub files_failed: usize,
    pub files_skipped: usize,
    pub lines_removed: usize,
}

impl RunSummary {
    pub fn record(&mut self, report: &FileReport) {
        match report.status {
            FileStatus::Processed { removed_lines } => {
                self.files_processed += 1;
                self.lines_removed += removed_lines;
            }
            FileStatus::Failed { .. } => self.files_failed += 1,
        }
    }
}
