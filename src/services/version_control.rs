use async_trait::async_trait;

use crate::domain::report::Report;
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Condensed history with per-commit shortstat lines.
    async fn fetch_report(&self) -> AppResult<Report>;
}
