//! Running the quote program.

use std::future::Future;
use std::process::{ExitStatus, Stdio};

use tracing::debug;

use super::command::QuoteCommand;
use super::errors::RefreshError;

/// Captured result of one quote program run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteOutput {
    /// Standard output, verbatim.
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` if the process was killed by a signal.
    pub exit_code: Option<i32>,
}

impl QuoteOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// The error describing a failed exit, if the run did not succeed.
    pub fn exit_error(&self, command: &QuoteCommand) -> Option<RefreshError> {
        if self.success() {
            return None;
        }
        let status = match self.exit_code {
            Some(code) => format!("exit code {code}"),
            None => "a signal".to_string(),
        };
        Some(RefreshError::NonZeroExit {
            command: command.to_string(),
            status,
            stderr: self.stderr.trim().to_string(),
        })
    }

    fn from_parts(stdout: &[u8], stderr: &[u8], status: ExitStatus) -> Self {
        Self {
            stdout: String::from_utf8_lossy(stdout).into_owned(),
            stderr: String::from_utf8_lossy(stderr).into_owned(),
            exit_code: status.code(),
        }
    }
}

/// Runs a [`QuoteCommand`] without blocking the caller.
///
/// Implemented by [`FortuneRunner`] for real processes; tests substitute
/// their own.
pub trait QuoteRunner: Send + Sync + 'static {
    fn run(
        &self,
        command: &QuoteCommand,
    ) -> impl Future<Output = Result<QuoteOutput, RefreshError>> + Send;
}

/// Spawns the quote program as a child process on the Tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct FortuneRunner;

impl QuoteRunner for FortuneRunner {
    async fn run(&self, command: &QuoteCommand) -> Result<QuoteOutput, RefreshError> {
        debug!(
            event = "core.process.spawn_started",
            program = command.program(),
            args = ?command.args()
        );

        let output = tokio::process::Command::new(command.program())
            .args(command.args())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| RefreshError::SpawnFailed {
                command: command.to_string(),
                message: e.to_string(),
            })?;

        debug!(
            event = "core.process.spawn_completed",
            program = command.program(),
            exit_code = ?output.status.code(),
            stdout_len = output.stdout.len()
        );

        Ok(QuoteOutput::from_parts(
            &output.stdout,
            &output.stderr,
            output.status,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_program_is_spawn_failure() {
        let command = QuoteCommand::new("qotd-definitely-not-a-program", ["-s"]);
        let result = FortuneRunner.run(&command).await;
        assert!(matches!(result, Err(RefreshError::SpawnFailed { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_stdout_is_kept_verbatim() {
        let command = QuoteCommand::new("sh", ["-c", "printf 'Be yourself.\\n  -- Wilde\\n\\n'"]);
        let output = FortuneRunner.run(&command).await.unwrap();
        assert_eq!(output.stdout, "Be yourself.\n  -- Wilde\n\n");
        assert!(output.success());
        assert!(output.exit_error(&command).is_none());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_reported() {
        let command = QuoteCommand::new("sh", ["-c", "echo partial; echo oops >&2; exit 3"]);
        let output = FortuneRunner.run(&command).await.unwrap();
        assert_eq!(output.stdout, "partial\n");
        assert_eq!(output.exit_code, Some(3));

        let error = output.exit_error(&command).unwrap();
        assert!(matches!(
            &error,
            RefreshError::NonZeroExit { status, stderr, .. }
                if status == "exit code 3" && stderr == "oops"
        ));
    }
}
