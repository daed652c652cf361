use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_text(&self, path: &Path) -> Result<String>;
    fn write_text(&self, path: &Path, content: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn root(&self) -> &Path;
    fn extensions(&self) -> &[String];
}
