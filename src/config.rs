use std::path::{Path, PathBuf};

use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub workspace_root: PathBuf,
}

impl AppConfig {
    pub fn load(workspace_hint: &Path) -> AppResult<Self> {
        Ok(Self {
            workspace_root: workspace_hint.to_path_buf(),
        })
    }
}
