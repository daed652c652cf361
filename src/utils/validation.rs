use crate::utils::error::{Result, StripError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl Into<String>, reason: &str) -> StripError {
    StripError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.into(),
        reason: reason.to_string(),
    }
}

/// Checks that `path` names an existing directory.
pub fn validate_directory(field_name: &str, path: &Path) -> Result<()> {
    let shown = path.display().to_string();

    if path.as_os_str().is_empty() {
        return Err(invalid(field_name, shown, "Path cannot be empty"));
    }
    if path.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(invalid(field_name, shown, "Path contains null bytes"));
    }
    if !path.exists() {
        return Err(invalid(field_name, shown, "Directory does not exist"));
    }
    if !path.is_dir() {
        return Err(invalid(field_name, shown, "Path is not a directory"));
    }

    Ok(())
}

pub fn validate_extensions(field_name: &str, extensions: &[String]) -> Result<()> {
    if extensions.is_empty() {
        return Err(invalid(field_name, "", "At least one extension is required"));
    }

    for ext in extensions {
        if ext.trim().is_empty() {
            return Err(invalid(field_name, ext.as_str(), "Extension cannot be blank"));
        }
        if ext.contains(['/', '\\']) {
            return Err(invalid(
                field_name,
                ext.as_str(),
                "Extension cannot contain a path separator",
            ));
        }
    }

    Ok(())
}
