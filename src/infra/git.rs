use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::report::Report;
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

const GIT_PROGRAM: &str = "git";
const LOG_ARGS: [&str; 3] = ["log", "--shortstat", "--oneline"];

/// What `git log` says on a branch with no commits. Newer git prints the first, older
/// releases the second.
const UNBORN_BRANCH_MESSAGES: [&str; 2] = [
    "does not have any commits yet",
    "bad default revision 'HEAD'",
];

pub struct GitCli {
    workspace_root: PathBuf,
    program: String,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self::with_program(workspace_root, GIT_PROGRAM)
    }

    pub fn with_program(workspace_root: PathBuf, program: impl Into<String>) -> Self {
        Self {
            workspace_root,
            program: program.into(),
        }
    }
}

fn is_unborn_branch(stderr: &str) -> bool {
    UNBORN_BRANCH_MESSAGES
        .iter()
        .any(|message| stderr.contains(message))
}

#[async_trait]
impl VersionControlService for GitCli {
    #[tracing::instrument(level = "debug", skip(self), fields(root = %self.workspace_root.display()))]
    async fn fetch_report(&self) -> AppResult<Report> {
        // Untranslated output, so both the shortstat phrases and the errors match.
        let output = Command::new(&self.program)
            .args(LOG_ARGS)
            .current_dir(&self.workspace_root)
            .env("LC_ALL", "C")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if is_unborn_branch(&stderr) {
                debug!("current branch has no commits yet");
                return Ok(Report::empty());
            }
            return Err(AppError::VersionControl(format!(
                "`{} {}` failed ({}): {}",
                self.program,
                LOG_ARGS.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        let report = Report::from_output(&String::from_utf8_lossy(&output.stdout));
        debug!(lines = report.len(), "fetched history report");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;
    use crate::domain::change::ChangeTotals;

    fn git(dir: &Path, args: &[&str]) {
        let status = std::process::Command::new(GIT_PROGRAM)
            .args([
                "-c",
                "user.name=churn",
                "-c",
                "user.email=churn@example.com",
                "-c",
                "commit.gpgsign=false",
            ])
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .expect("git should be installed");
        assert!(status.success(), "git {args:?} failed");
    }

    fn init_repo() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        git(dir.path(), &["init", "-q"]);
        dir
    }

    fn commit_file(dir: &Path, contents: &str, message: &str) {
        fs::write(dir.join("notes.txt"), contents).unwrap();
        git(dir, &["add", "notes.txt"]);
        git(dir, &["commit", "-q", "--no-verify", "-m", message]);
    }

    #[test]
    fn recognises_unborn_branch_messages() {
        assert!(is_unborn_branch(
            "fatal: your current branch 'main' does not have any commits yet\n"
        ));
        assert!(is_unborn_branch("fatal: bad default revision 'HEAD'\n"));
        assert!(!is_unborn_branch(
            "fatal: not a git repository (or any of the parent directories): .git\n"
        ));
    }

    #[tokio::test]
    async fn repository_without_commits_gives_empty_report() {
        let repo = init_repo();
        let report = GitCli::new(repo.path().to_path_buf())
            .fetch_report()
            .await
            .unwrap();
        assert!(report.is_empty());
        assert_eq!(ChangeTotals::aggregate(&report), ChangeTotals::default());
    }

    #[tokio::test]
    async fn totals_real_history() {
        let repo = init_repo();
        commit_file(repo.path(), "one\ntwo\nthree\n", "add notes");
        commit_file(repo.path(), "one\n", "trim notes");

        let report = GitCli::new(repo.path().to_path_buf())
            .fetch_report()
            .await
            .unwrap();
        let totals = ChangeTotals::aggregate(&report);
        assert_eq!(totals, ChangeTotals::new(3, 2));
        assert_eq!(totals.net_change(), 1);
    }

    #[tokio::test]
    async fn outside_a_repository_is_a_version_control_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GitCli::new(dir.path().to_path_buf())
            .fetch_report()
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::VersionControl(_)), "{err}");
    }

    #[tokio::test]
    async fn missing_program_is_an_io_error() {
        let git = GitCli::with_program(std::env::temp_dir(), "churn-no-such-program");
        let err = git.fetch_report().await.unwrap_err();
        assert!(matches!(err, AppError::Io(_)), "{err}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_a_version_control_error() {
        let git = GitCli::with_program(std::env::temp_dir(), "false");
        let err = git.fetch_report().await.unwrap_err();
        assert!(matches!(err, AppError::VersionControl(_)), "{err}");
    }
}
