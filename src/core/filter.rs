use crate::domain::model::{FilterOutcome, LineKind};

pub const LINE_COMMENT_MARKER: &str = "//";
pub const DOC_COMMENT_MARKER: &str = "/**";

/// Classifies a single line by the prefix of its leading-whitespace-trimmed
/// text. No lexing: markers inside strings or block comments count too.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim_start();
    if trimmed.starts_with(DOC_COMMENT_MARKER) {
        LineKind::DocComment
    } else if trimmed.starts_with(LINE_COMMENT_MARKER) {
        LineKind::LineComment
    } else {
        LineKind::Code
    }
}

/// Drops every line comment line and rejoins the rest with `\n`.
///
/// Splitting is on `\n` only, so a trailing newline survives as a trailing
/// empty line and `\r` stays attached to its line.
pub fn filter_content(content: &str) -> FilterOutcome {
    let mut kept = Vec::new();
    let mut removed_lines = 0;

    for line in content.split('\n') {
        if classify_line(line).is_kept() {
            kept.push(line);
        } else {
            removed_lines += 1;
        }
    }

    FilterOutcome {
        kept_lines: kept.len(),
        content: kept.join("\n"),
        removed_lines,
    }
}

pub fn strip_inline_comments(content: &str) -> String {
    filter_content(content).content
}
